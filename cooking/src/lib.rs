use {
    bevy::prelude::*,
    cooking_components::{CookingComponentsPlugin, Cookable, PrefabId},
    system_schedule::{GameSchedule, GameSchedulePlugin},
};

pub mod systems;

#[cfg(test)]
mod tests;

pub use systems::emit_signals;

/// Per-item cooking: control requests, manual heating and the per-tick flag reset.
///
/// Profile assets are registered by `cooking_assets::CookingAssetsPlugin`.
pub struct CookingPlugin;

impl Plugin for CookingPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<GameSchedulePlugin>() {
            app.add_plugins(GameSchedulePlugin);
        }

        app.add_plugins(CookingComponentsPlugin)
            .add_observer(systems::start_cooking)
            .add_observer(systems::stop_cooking)
            .add_observer(systems::set_cook_state)
            .add_observer(systems::reset_cooking)
            .add_systems(
                Update,
                (
                    systems::clear_heating_flags.in_set(GameSchedule::FrameStart),
                    systems::heat_manually_cooked_items.in_set(GameSchedule::PerformAction),
                ),
            );
    }
}

/// Spawns a cookable item for `prefab` at `transform`.
/// Returns the spawned entity ID.
pub fn spawn_cookable(
    commands: &mut Commands,
    prefab: &str,
    transform: Transform,
    cookable: Cookable,
) -> Entity {
    commands
        .spawn((
            PrefabId(prefab.to_string()),
            Name::new(prefab.to_string()),
            transform,
            cookable,
        ))
        .id()
}
