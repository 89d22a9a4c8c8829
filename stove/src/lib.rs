//! Heat sources: item detection, heating and in-place replacement of finished items.

use {
    bevy::prelude::*,
    cooking_resources::CookingResourcesPlugin,
    stove_components::StoveComponentsPlugin,
    system_schedule::{GameSchedule, GameSchedulePlugin},
};

pub mod controls;
pub mod detection;
pub mod heating;
pub mod subscriptions;
pub mod transformation;


pub use {
    detection::CookableBroadPhase,
    transformation::{TransformationCoordinator, TransformationTask},
};

pub struct StovePlugin;

impl Plugin for StovePlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<GameSchedulePlugin>() {
            app.add_plugins(GameSchedulePlugin);
        }

        app.add_plugins((StoveComponentsPlugin, CookingResourcesPlugin))
            .add_observer(controls::configure_detection_timer)
            .add_observer(controls::turn_on_stove)
            .add_observer(controls::turn_off_stove)
            .add_observer(controls::toggle_stove)
            .add_observer(controls::set_stove_heat)
            .add_observer(controls::add_item_to_stove)
            .add_observer(controls::remove_item_from_stove)
            .add_systems(
                Update,
                (
                    detection::detect_items.in_set(GameSchedule::ResolveIntent),
                    heating::heat_items_on_stoves.in_set(GameSchedule::PerformAction),
                    transformation::advance_transformations.in_set(GameSchedule::Effect),
                ),
            );
    }
}
