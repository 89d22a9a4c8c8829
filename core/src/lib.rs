use {
    bevy::prelude::*,
    cooking::CookingPlugin,
    cooking_assets::CookingAssetsPlugin,
    effects::EffectsPlugin,
    game_assets::AssetsPlugin,
    states::GameState,
    stove::StovePlugin,
    system_schedule::{GameSchedule, GameSchedulePlugin},
};

mod systems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_plugins((
                GameSchedulePlugin,
                CookingAssetsPlugin,
                CookingPlugin,
                StovePlugin,
                EffectsPlugin,
                AssetsPlugin,
            ))
            .configure_sets(
                Update,
                (
                    GameSchedule::FrameStart,
                    GameSchedule::ResolveIntent,
                    GameSchedule::PerformAction,
                    GameSchedule::Effect,
                    GameSchedule::FrameEnd,
                )
                    .run_if(in_state(GameState::Running)),
            )
            .add_observer(systems::log_item_placed)
            .add_observer(systems::log_item_removed)
            .add_observer(systems::log_item_transformed)
            .add_observer(systems::log_stove_toggled)
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Running), systems::spawn_kitchen);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
