//! Stove control requests and stove notifications.
//!
//! All events target the stove entity.

use {bevy::prelude::*, cooking_components::CookState};

#[derive(Debug, EntityEvent)]
pub struct TurnOnStove {
    pub entity: Entity,
}

/// Turns the stove off; every item on it stops heating.
#[derive(Debug, EntityEvent)]
pub struct TurnOffStove {
    pub entity: Entity,
}

#[derive(Debug, EntityEvent)]
pub struct ToggleStove {
    pub entity: Entity,
}

/// Sets the heat level, clamped into the stove's range.
#[derive(Debug, EntityEvent)]
pub struct SetStoveHeat {
    pub entity: Entity,
    pub heat_level: f32,
}

/// Starts tracking `item` without waiting for detection.
#[derive(Debug, EntityEvent)]
pub struct AddItemToStove {
    pub entity: Entity,
    pub item: Entity,
}

/// Stops tracking `item` without waiting for detection.
#[derive(Debug, EntityEvent)]
pub struct RemoveItemFromStove {
    pub entity: Entity,
    pub item: Entity,
}

/// Triggered when the stove actually changes between on and off.
#[derive(Debug, EntityEvent)]
pub struct StoveToggled {
    pub entity: Entity,
    pub is_on: bool,
}

/// Triggered when an item starts being tracked by the stove.
#[derive(Debug, EntityEvent)]
pub struct ItemPlaced {
    pub entity: Entity,
    pub item: Entity,
}

/// Triggered when an item stops being tracked by the stove.
#[derive(Debug, EntityEvent)]
pub struct ItemRemoved {
    pub entity: Entity,
    pub item: Entity,
}

/// Triggered once a cooked or burnt item has been replaced in place.
#[derive(Debug, EntityEvent)]
pub struct ItemTransformed {
    pub entity: Entity,
    pub original: Entity,
    pub replacement: Entity,
    pub state: CookState,
}
