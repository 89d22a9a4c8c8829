use {
    bevy::prelude::*,
    cooking::spawn_cookable,
    cooking_assets::CookingProfileMap,
    cooking_components::Cookable,
    stove_components::{DetectionZone, HeatSource, TransitionEffects},
    stove_events::{ItemPlaced, ItemRemoved, ItemTransformed, StoveToggled, TurnOnStove},
};

/// Raw items of the demo kitchen, by profile id. The potato starts off the stove.
const STARTING_ITEMS: [(&str, &str, Vec3); 3] = [
    ("steak", "raw_steak", Vec3::new(-0.5, 0.1, 0.0)),
    ("egg", "raw_egg", Vec3::new(0.3, 0.1, 0.0)),
    ("potato", "raw_potato", Vec3::new(2.0, 0.1, 0.0)),
];

pub fn spawn_kitchen(mut commands: Commands, profiles: Res<CookingProfileMap>) {
    info!("spawning kitchen");

    let stove = commands
        .spawn((
            Name::new("stove"),
            HeatSource::default(),
            DetectionZone {
                radius: 1.0,
                ..default()
            },
            TransitionEffects {
                cooked_transition: Some("steam".into()),
                burnt_transition: Some("smoke".into()),
                cooked_burst: Some("sizzle".into()),
                burnt_burst: Some("sparks".into()),
            },
            Transform::default(),
        ))
        .id();
    commands.trigger(TurnOnStove { entity: stove });

    for (profile_id, prefab, position) in STARTING_ITEMS {
        let Some(profile) = profiles.handles.get(profile_id) else {
            warn!(profile = profile_id, "missing cooking profile, item not spawned");
            continue;
        };
        spawn_cookable(
            &mut commands,
            prefab,
            Transform::from_translation(position),
            Cookable::new(profile.clone()),
        );
    }
}

pub fn log_item_placed(trigger: On<ItemPlaced>, names: Query<&Name>) {
    let event = trigger.event();
    info!(stove = ?event.entity, item = %display_name(&names, event.item), "placed on stove");
}

pub fn log_item_removed(trigger: On<ItemRemoved>, names: Query<&Name>) {
    let event = trigger.event();
    info!(stove = ?event.entity, item = %display_name(&names, event.item), "taken off stove");
}

pub fn log_item_transformed(trigger: On<ItemTransformed>, names: Query<&Name>) {
    let event = trigger.event();
    info!(
        stove = ?event.entity,
        replacement = %display_name(&names, event.replacement),
        state = ?event.state,
        "item transformed"
    );
}

pub fn log_stove_toggled(trigger: On<StoveToggled>) {
    let event = trigger.event();
    info!(stove = ?event.entity, is_on = event.is_on, "stove toggled");
}

fn display_name(names: &Query<&Name>, entity: Entity) -> String {
    names
        .get(entity)
        .map(|name| name.to_string())
        .unwrap_or_else(|_| format!("{entity:?}"))
}
