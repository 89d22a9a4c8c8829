use {
    bevy::{asset::LoadedFolder, prelude::*},
    cooking_assets::{CookingProfile, CookingProfileMap},
    states::GameState,
};

pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameAssets>()
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_assets.run_if(in_state(GameState::Loading)));
    }
}

#[derive(Resource, Default)]
pub struct GameAssets {
    /// Every `*.cooking.ron` file under `assets/profiles`
    pub profiles: Handle<LoadedFolder>,
}

fn start_loading(mut assets: ResMut<GameAssets>, asset_server: Res<AssetServer>) {
    info!("started loading assets");
    assets.profiles = asset_server.load_folder("profiles");
}

/// Waits for the profile folder, then starts the game once every profile in
/// it has been registered by `cooking_assets::register_loaded_profiles`.
fn check_assets(
    mut next_state: ResMut<NextState<GameState>>,
    profile_map: Res<CookingProfileMap>,
    game_assets: Res<GameAssets>,
    asset_server: Res<AssetServer>,
    folders: Res<Assets<LoadedFolder>>,
    profiles: Res<Assets<CookingProfile>>,
) {
    if !asset_server.is_loaded_with_dependencies(game_assets.profiles.id()) {
        return;
    }

    let Some(folder) = folders.get(&game_assets.profiles) else {
        warn!("profile folder reported as loaded but is missing");
        return;
    };

    if !profiles_registered(&folder.handles, &profiles, &profile_map) {
        trace!("waiting for cooking profiles to be registered");
        return;
    }

    info!(profiles = profile_map.handles.len(), "assets loaded");
    next_state.set(GameState::Running);
}

/// `true` once every profile among `handles` is present in `profile_map`.
/// Handles of other asset types are ignored.
fn profiles_registered(
    handles: &[UntypedHandle],
    profiles: &Assets<CookingProfile>,
    profile_map: &CookingProfileMap,
) -> bool {
    handles
        .iter()
        .cloned()
        .filter_map(|handle| handle.try_typed::<CookingProfile>().ok())
        .all(|handle| {
            profiles
                .get(&handle)
                .is_some_and(|profile| profile_map.handles.contains_key(&profile.id))
        })
}
