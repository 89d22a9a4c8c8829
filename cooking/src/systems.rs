use {
    bevy::prelude::*,
    cooking_assets::CookingProfile,
    cooking_components::{Cookable, CookingSignal, ManualHeat},
    cooking_events::{
        Burnt, CookStateChanged, CookingCompleted, CookingStarted, ResetCooking, SetCookState,
        StartCooking, StopCooking,
    },
};

/// Turns state machine signals into entity events on `entity`.
pub fn emit_signals(
    commands: &mut Commands,
    entity: Entity,
    signals: impl IntoIterator<Item = CookingSignal>,
) {
    for signal in signals {
        match signal {
            CookingSignal::Started => commands.trigger(CookingStarted { entity }),
            CookingSignal::Completed => commands.trigger(CookingCompleted { entity }),
            CookingSignal::Burnt => commands.trigger(Burnt { entity }),
            CookingSignal::StateChanged(state) => {
                commands.trigger(CookStateChanged { entity, state })
            }
        }
    }
}

/// Heating is re-established every tick by whoever applies heat.
pub fn clear_heating_flags(mut items: Query<&mut Cookable>) {
    for mut item in &mut items {
        if item.is_being_heated() {
            item.stop_heating();
        }
    }
}

/// Applies self-heat to items cooking outside of a heat source.
pub fn heat_manually_cooked_items(
    time: Res<Time>,
    profiles: Res<Assets<CookingProfile>>,
    mut items: Query<(Entity, &mut Cookable, &ManualHeat)>,
    mut commands: Commands,
) {
    let dt = time.delta_secs();
    for (entity, mut item, heat) in &mut items {
        let profile = profiles.get(&item.profile);
        let signals = item.apply_heat(profile, heat.0, dt);
        emit_signals(&mut commands, entity, signals);
    }
}

pub fn start_cooking(
    trigger: On<StartCooking>,
    mut commands: Commands,
    items: Query<(), With<Cookable>>,
) {
    let event = trigger.event();
    if items.get(event.entity).is_err() {
        warn!(item = ?event.entity, "StartCooking requested for an entity that cannot cook");
        return;
    }
    if !(event.heat_level > 0.0 && event.heat_level.is_finite()) {
        warn!(item = ?event.entity, heat_level = event.heat_level, "Ignoring StartCooking with non-positive heat");
        return;
    }

    commands
        .entity(event.entity)
        .insert(ManualHeat(event.heat_level));
    debug!(item = ?event.entity, heat_level = event.heat_level, "Started cooking");
}

pub fn stop_cooking(
    trigger: On<StopCooking>,
    mut commands: Commands,
    mut items: Query<&mut Cookable>,
) {
    let event = trigger.event();
    let Ok(mut item) = items.get_mut(event.entity) else {
        return;
    };

    item.stop_heating();
    commands.entity(event.entity).remove::<ManualHeat>();
    debug!(item = ?event.entity, "Stopped cooking");
}

pub fn set_cook_state(
    trigger: On<SetCookState>,
    mut commands: Commands,
    mut items: Query<&mut Cookable>,
) {
    let event = trigger.event();
    let Ok(mut item) = items.get_mut(event.entity) else {
        warn!(item = ?event.entity, "SetCookState requested for an entity that cannot cook");
        return;
    };

    let signal = item.force_state(event.state);
    emit_signals(&mut commands, event.entity, [signal]);
}

pub fn reset_cooking(
    trigger: On<ResetCooking>,
    mut commands: Commands,
    mut items: Query<&mut Cookable>,
) {
    let event = trigger.event();
    let Ok(mut item) = items.get_mut(event.entity) else {
        return;
    };

    let signal = item.reset();
    emit_signals(&mut commands, event.entity, [signal]);
}
