//! Observers for the stove control requests.

use {
    crate::subscriptions::{subscribe, unsubscribe},
    bevy::prelude::*,
    cooking_components::Cookable,
    cooking_resources::CookingSettings,
    stove_components::{DetectionZone, HeatSource, ItemsOnStove, StoveSubscriptions},
    stove_events::{
        AddItemToStove, ItemPlaced, ItemRemoved, RemoveItemFromStove, SetStoveHeat, StoveToggled,
        ToggleStove, TurnOffStove, TurnOnStove,
    },
};

/// Aligns a new heat source's detection cadence with [`CookingSettings`].
pub fn configure_detection_timer(
    trigger: On<Add, HeatSource>,
    settings: Res<CookingSettings>,
    mut zones: Query<&mut DetectionZone>,
) {
    let Ok(mut zone) = zones.get_mut(trigger.event().entity) else {
        return;
    };
    zone.timer = Timer::from_seconds(settings.detection_interval, TimerMode::Repeating);
}

fn switch_on(commands: &mut Commands, stove: Entity, heat_source: &mut HeatSource) {
    if !heat_source.turn_on() {
        return;
    }
    commands.trigger(StoveToggled {
        entity: stove,
        is_on: true,
    });
    info!(?stove, heat_level = heat_source.heat_level(), "Heat source turned on");
}

fn switch_off(
    commands: &mut Commands,
    stove: Entity,
    heat_source: &mut HeatSource,
    tracked: &ItemsOnStove,
    items: &mut Query<&mut Cookable>,
) {
    if !heat_source.turn_off() {
        return;
    }
    for item in tracked.iter() {
        if let Ok(mut cookable) = items.get_mut(item) {
            cookable.stop_heating();
        }
    }
    commands.trigger(StoveToggled {
        entity: stove,
        is_on: false,
    });
    info!(?stove, "Heat source turned off");
}

pub fn turn_on_stove(
    trigger: On<TurnOnStove>,
    mut commands: Commands,
    mut stoves: Query<&mut HeatSource>,
) {
    let stove = trigger.event().entity;
    let Ok(mut heat_source) = stoves.get_mut(stove) else {
        warn!(?stove, "TurnOnStove sent to an entity that is not a heat source");
        return;
    };
    switch_on(&mut commands, stove, &mut heat_source);
}

pub fn turn_off_stove(
    trigger: On<TurnOffStove>,
    mut commands: Commands,
    mut stoves: Query<(&mut HeatSource, &ItemsOnStove)>,
    mut items: Query<&mut Cookable>,
) {
    let stove = trigger.event().entity;
    let Ok((mut heat_source, tracked)) = stoves.get_mut(stove) else {
        warn!(?stove, "TurnOffStove sent to an entity that is not a heat source");
        return;
    };
    switch_off(&mut commands, stove, &mut heat_source, tracked, &mut items);
}

pub fn toggle_stove(
    trigger: On<ToggleStove>,
    mut commands: Commands,
    mut stoves: Query<(&mut HeatSource, &ItemsOnStove)>,
    mut items: Query<&mut Cookable>,
) {
    let stove = trigger.event().entity;
    let Ok((mut heat_source, tracked)) = stoves.get_mut(stove) else {
        warn!(?stove, "ToggleStove sent to an entity that is not a heat source");
        return;
    };

    if heat_source.is_on() {
        switch_off(&mut commands, stove, &mut heat_source, tracked, &mut items);
    } else {
        switch_on(&mut commands, stove, &mut heat_source);
    }
}

pub fn set_stove_heat(trigger: On<SetStoveHeat>, mut stoves: Query<&mut HeatSource>) {
    let event = trigger.event();
    let Ok(mut heat_source) = stoves.get_mut(event.entity) else {
        warn!(stove = ?event.entity, "SetStoveHeat sent to an entity that is not a heat source");
        return;
    };

    let applied = heat_source.set_heat_level(event.heat_level);
    debug!(stove = ?event.entity, requested = event.heat_level, applied, "Heat level set");
}

pub fn add_item_to_stove(
    trigger: On<AddItemToStove>,
    mut commands: Commands,
    mut stoves: Query<(&mut ItemsOnStove, &mut StoveSubscriptions), With<HeatSource>>,
    items: Query<(), With<Cookable>>,
) {
    let (stove, item) = (trigger.event().entity, trigger.event().item);
    let Ok((mut tracked, mut subscriptions)) = stoves.get_mut(stove) else {
        warn!(?stove, "AddItemToStove sent to an entity that is not a heat source");
        return;
    };
    if items.get(item).is_err() {
        warn!(?stove, ?item, "Only cookable items can be added to a heat source");
        return;
    }

    if !tracked.insert(item) {
        trace!(?stove, ?item, "Item already on heat source");
        return;
    }
    subscribe(&mut commands, &mut subscriptions, stove, item);
    commands.trigger(ItemPlaced {
        entity: stove,
        item,
    });
    debug!(?stove, ?item, "Item added to heat source");
}

pub fn remove_item_from_stove(
    trigger: On<RemoveItemFromStove>,
    mut commands: Commands,
    mut stoves: Query<(&mut ItemsOnStove, &mut StoveSubscriptions), With<HeatSource>>,
    mut items: Query<&mut Cookable>,
) {
    let (stove, item) = (trigger.event().entity, trigger.event().item);
    let Ok((mut tracked, mut subscriptions)) = stoves.get_mut(stove) else {
        warn!(?stove, "RemoveItemFromStove sent to an entity that is not a heat source");
        return;
    };

    if !tracked.remove(item) {
        trace!(?stove, ?item, "Item was not on heat source");
        return;
    }
    unsubscribe(&mut commands, &mut subscriptions, item);
    if let Ok(mut cookable) = items.get_mut(item) {
        cookable.stop_heating();
    }
    commands.trigger(ItemRemoved {
        entity: stove,
        item,
    });
    debug!(?stove, ?item, "Item removed from heat source");
}
