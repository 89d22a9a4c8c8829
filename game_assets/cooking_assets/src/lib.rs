//! Cooking profile asset definitions.
//!
//! Profiles are loaded from `.cooking.ron` files and shared by handle between
//! every item of the same kind.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

pub struct CookingAssetsPlugin;

impl Plugin for CookingAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<CookingProfile>::new(&["cooking.ron"]))
            .init_resource::<CookingProfileMap>()
            .add_systems(Update, register_loaded_profiles);
    }
}

/// Static parameters describing how one kind of item cooks.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct CookingProfile {
    /// Unique identifier (e.g., "steak")
    pub id: String,
    /// Name used in logs and UI
    pub display_name: String,
    /// Seconds at heat 1.0 to go from raw to cooked
    pub cook_time: f32,
    /// Seconds at heat 1.0 to go from cooked to burnt
    #[serde(default)]
    pub burn_time: f32,
    #[serde(default = "default_can_burn")]
    pub can_burn: bool,
    /// Multiplier applied to incoming heat
    #[serde(default = "default_heat_sensitivity")]
    pub heat_sensitivity: f32,
    /// Prefab spawned in place of the item once it is cooked
    #[serde(default)]
    pub cooked_prefab: Option<String>,
    /// Prefab spawned in place of the item once it is burnt
    #[serde(default)]
    pub burnt_prefab: Option<String>,
}

fn default_can_burn() -> bool {
    true
}

fn default_heat_sensitivity() -> f32 {
    1.0
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    #[error("profile '{id}' has non-positive cook_time {value}")]
    CookTime { id: String, value: f32 },
    #[error("profile '{id}' can burn but has non-positive burn_time {value}")]
    BurnTime { id: String, value: f32 },
    #[error("profile '{id}' has non-positive heat_sensitivity {value}")]
    HeatSensitivity { id: String, value: f32 },
}

impl CookingProfile {
    pub fn new(id: impl Into<String>, cook_time: f32, burn_time: f32) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            cook_time,
            burn_time,
            can_burn: true,
            heat_sensitivity: 1.0,
            cooked_prefab: None,
            burnt_prefab: None,
        }
    }

    pub fn with_can_burn(mut self, can_burn: bool) -> Self {
        self.can_burn = can_burn;
        self
    }

    pub fn with_heat_sensitivity(mut self, heat_sensitivity: f32) -> Self {
        self.heat_sensitivity = heat_sensitivity;
        self
    }

    pub fn with_cooked_prefab(mut self, prefab: impl Into<String>) -> Self {
        self.cooked_prefab = Some(prefab.into());
        self
    }

    pub fn with_burnt_prefab(mut self, prefab: impl Into<String>) -> Self {
        self.burnt_prefab = Some(prefab.into());
        self
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        // NaN fails every comparison below, so test for "not positive".
        if !(self.cook_time > 0.0) {
            return Err(ProfileError::CookTime {
                id: self.id.clone(),
                value: self.cook_time,
            });
        }
        if self.can_burn && !(self.burn_time > 0.0) {
            return Err(ProfileError::BurnTime {
                id: self.id.clone(),
                value: self.burn_time,
            });
        }
        if !(self.heat_sensitivity > 0.0) {
            return Err(ProfileError::HeatSensitivity {
                id: self.id.clone(),
                value: self.heat_sensitivity,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Resource mapping profile IDs to their asset handles.
/// Populated as profile assets finish loading.
#[derive(Resource, Default)]
pub struct CookingProfileMap {
    pub handles: HashMap<String, Handle<CookingProfile>>,
}

/// Registers newly loaded profiles and reports invalid ones.
pub fn register_loaded_profiles(
    mut events: MessageReader<AssetEvent<CookingProfile>>,
    mut assets: ResMut<Assets<CookingProfile>>,
    mut profile_map: ResMut<CookingProfileMap>,
) {
    let added_ids: Vec<_> = events
        .read()
        .filter_map(|event| match event {
            AssetEvent::Added { id } | AssetEvent::Modified { id } => Some(*id),
            _ => None,
        })
        .collect();

    for id in added_ids {
        let Some(profile) = assets.get(id) else {
            continue;
        };

        if let Err(error) = profile.validate() {
            warn!("Invalid cooking profile, items using it will not cook: {error}");
        }

        let profile_id = profile.id.clone();
        let Some(handle) = assets.get_strong_handle(id) else {
            continue;
        };

        debug!(profile = %profile_id, "Registered cooking profile");
        profile_map.handles.insert(profile_id, handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = CookingProfile::new("steak", 5.0, 3.0);
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn test_cook_time_must_be_positive() {
        let profile = CookingProfile::new("steak", 0.0, 3.0);
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::CookTime { .. })
        ));
    }

    #[test]
    fn test_burn_time_only_required_when_burnable() {
        let burnable = CookingProfile::new("toast", 5.0, 0.0);
        assert!(matches!(
            burnable.validate(),
            Err(ProfileError::BurnTime { .. })
        ));

        let fireproof = CookingProfile::new("stone", 5.0, 0.0).with_can_burn(false);
        assert!(fireproof.is_valid());
    }

    #[test]
    fn test_nan_sensitivity_is_rejected() {
        let profile = CookingProfile::new("egg", 5.0, 3.0).with_heat_sensitivity(f32::NAN);
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::HeatSensitivity { .. })
        ));
    }

    #[test]
    fn test_profile_ron_format() {
        let source = r#"(
            id: "steak",
            display_name: "Steak",
            cook_time: 5.0,
            burn_time: 3.0,
            cooked_prefab: Some("cooked_steak"),
        )"#;

        let profile: CookingProfile = ron::from_str(source).unwrap();
        assert_eq!(profile.id, "steak");
        assert!(profile.can_burn);
        assert_eq!(profile.heat_sensitivity, 1.0);
        assert_eq!(profile.cooked_prefab.as_deref(), Some("cooked_steak"));
        assert_eq!(profile.burnt_prefab, None);
    }

    #[test]
    fn test_error_message_names_profile() {
        let error = CookingProfile::new("rice", -1.0, 3.0).validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            "profile 'rice' has non-positive cook_time -1"
        );
    }
}
