use bevy::prelude::*;

/// Fire-and-forget request for a visual effect.
///
/// # Observers
/// - `effects::spawn_requested_effect`: spawns an `ActiveEffect` that despawns
///   itself after `auto_expire_after` seconds.
#[derive(Event, Debug, Clone)]
pub struct SpawnEffectRequest {
    pub effect: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub auto_expire_after: f32,
}
