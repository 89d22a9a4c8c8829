//! Per-item notifications and requests.
//!
//! Notifications are triggered on the item entity, so a listener can either
//! observe one item (`Observer::with_entity`) or every item (`add_observer`).

use {bevy::prelude::*, cooking_components::CookState};

/// Triggered on an item when it leaves the raw state.
#[derive(Debug, EntityEvent)]
pub struct CookingStarted {
    pub entity: Entity,
}

/// Triggered on an item when it reaches the cooked state through heating.
#[derive(Debug, EntityEvent)]
pub struct CookingCompleted {
    pub entity: Entity,
}

/// Triggered on an item when it reaches the burnt state through heating.
#[derive(Debug, EntityEvent)]
pub struct Burnt {
    pub entity: Entity,
}

/// Triggered on an item whenever its state changes, forced changes included.
#[derive(Debug, EntityEvent)]
pub struct CookStateChanged {
    pub entity: Entity,
    pub state: CookState,
}

/// Request for an item to heat itself every tick, independent of any heat source.
///
/// # Observers
/// - `cooking::start_cooking`: inserts `ManualHeat` with the requested level.
///   The level is used as given; clamping is the caller's business.
#[derive(Debug, EntityEvent)]
pub struct StartCooking {
    pub entity: Entity,
    pub heat_level: f32,
}

/// Request to stop self-heating an item. Progress is kept.
#[derive(Debug, EntityEvent)]
pub struct StopCooking {
    pub entity: Entity,
}

/// Administrative override of an item's state, for scripted setups.
/// Only [`CookStateChanged`] is triggered.
#[derive(Debug, EntityEvent)]
pub struct SetCookState {
    pub entity: Entity,
    pub state: CookState,
}

/// Request to return an item to raw with no progress.
#[derive(Debug, EntityEvent)]
pub struct ResetCooking {
    pub entity: Entity,
}
