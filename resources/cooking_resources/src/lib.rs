use bevy::prelude::*;

pub struct CookingResourcesPlugin;

impl Plugin for CookingResourcesPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CookingSettings>()
            .init_resource::<CookingSettings>();
    }
}

/// Timings shared by every heat source.
///
/// Insert a custom value before adding the plugins to override the defaults.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct CookingSettings {
    /// Seconds between two detection cycles of a heat source
    pub detection_interval: f32,
    /// Seconds between the transition effect request and the item swap
    pub transformation_delay: f32,
    /// Seconds before a requested effect expires
    pub effect_lifetime: f32,
}

impl Default for CookingSettings {
    fn default() -> Self {
        Self {
            detection_interval: 0.2,
            transformation_delay: 0.5,
            effect_lifetime: 2.0,
        }
    }
}
