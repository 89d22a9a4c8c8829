use {
    bevy::{platform::collections::HashSet, prelude::*},
    cooking::emit_signals,
    cooking_assets::CookingProfile,
    cooking_components::Cookable,
    stove_components::{HeatSource, ItemsOnStove, PendingTransformations},
};

/// Applies each lit heat source's heat to the items on it.
///
/// Items whose profile is not loaded are skipped, as are items waiting to be
/// replaced on any heat source.
pub fn heat_items_on_stoves(
    time: Res<Time>,
    profiles: Res<Assets<CookingProfile>>,
    stoves: Query<(&HeatSource, &ItemsOnStove)>,
    pending: Query<&PendingTransformations>,
    mut items: Query<&mut Cookable>,
    mut commands: Commands,
) {
    let dt = time.delta_secs();
    let in_flight: HashSet<Entity> = pending
        .iter()
        .flat_map(PendingTransformations::iter)
        .collect();

    for (stove, tracked) in &stoves {
        if !stove.is_on() {
            continue;
        }

        for item in tracked.iter() {
            if in_flight.contains(&item) {
                continue;
            }
            let Ok(mut cookable) = items.get_mut(item) else {
                continue;
            };
            let Some(profile) = profiles.get(&cookable.profile) else {
                continue;
            };

            let signals = cookable.apply_heat(Some(profile), stove.heat_level(), dt);
            emit_signals(&mut commands, item, signals);
        }
    }
}
