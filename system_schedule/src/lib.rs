use bevy::prelude::*;

/// Ordered phases of a simulation frame.
///
/// `FrameStart` resets per-tick flags, `ResolveIntent` runs detection,
/// `PerformAction` applies heat, `Effect` resumes pending transformations
/// and `FrameEnd` expires presentation effects.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameSchedule {
    FrameStart,
    ResolveIntent,
    PerformAction,
    Effect,
    FrameEnd,
}

/// Chains the [`GameSchedule`] sets in `Update`.
///
/// Feature plugins add this when it is missing, so each of them can be used on its own.
pub struct GameSchedulePlugin;

impl Plugin for GameSchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GameSchedule::FrameStart,
                GameSchedule::ResolveIntent,
                GameSchedule::PerformAction,
                GameSchedule::Effect,
                GameSchedule::FrameEnd,
            )
                .chain(),
        );
    }
}
