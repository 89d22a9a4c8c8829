//! Components for heat sources (stoves) and the items they track.

use {
    bevy::{
        platform::collections::{HashMap, HashSet},
        prelude::*,
    },
    cooking_components::CookState,
};

pub struct StoveComponentsPlugin;

impl Plugin for StoveComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HeatSource>()
            .register_type::<DetectionZone>()
            .register_type::<TransitionEffects>();
    }
}

/// Share of the broad-phase radius an item must be within, horizontally, to
/// count as sitting on the heat source.
pub const PRECISE_RADIUS_FACTOR: f32 = 0.8;

pub const DEFAULT_HEAT_LEVEL: f32 = 1.0;
pub const MIN_HEAT_LEVEL: f32 = 0.1;
pub const MAX_HEAT_LEVEL: f32 = 2.0;

/// A device that heats the items placed on it.
///
/// # Usage
/// - **Detection**: the attached [`DetectionZone`] decides which items are on it.
/// - **Heating**: while `is_on`, every tracked item receives `heat_level` each tick.
/// - **Transformation**: cooked or burnt items are replaced in place, see
///   [`PendingTransformations`].
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(DetectionZone, ItemsOnStove, StoveSubscriptions, PendingTransformations)]
pub struct HeatSource {
    is_on: bool,
    heat_level: f32,
    pub min_heat_level: f32,
    pub max_heat_level: f32,
}

impl Default for HeatSource {
    fn default() -> Self {
        Self {
            is_on: false,
            heat_level: DEFAULT_HEAT_LEVEL,
            min_heat_level: MIN_HEAT_LEVEL,
            max_heat_level: MAX_HEAT_LEVEL,
        }
    }
}

impl HeatSource {
    pub fn with_heat_range(mut self, min: f32, max: f32) -> Self {
        self.min_heat_level = min;
        self.max_heat_level = max.max(min);
        self.heat_level = self.heat_level.clamp(self.min_heat_level, self.max_heat_level);
        self
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn heat_level(&self) -> f32 {
        self.heat_level
    }

    /// Returns `true` if the source was off.
    pub fn turn_on(&mut self) -> bool {
        !std::mem::replace(&mut self.is_on, true)
    }

    /// Returns `true` if the source was on.
    pub fn turn_off(&mut self) -> bool {
        std::mem::replace(&mut self.is_on, false)
    }

    /// Clamps `level` into the configured range and returns the applied value.
    pub fn set_heat_level(&mut self, level: f32) -> f32 {
        self.heat_level = level.clamp(self.min_heat_level, self.max_heat_level);
        self.heat_level
    }
}

/// Region above a heat source in which items are detected.
///
/// The anchor is the owner's translation plus `anchor_offset`. Heights are
/// measured along +Y, horizontal distance in the XZ plane.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct DetectionZone {
    pub anchor_offset: Vec3,
    /// Broad-phase radius
    pub radius: f32,
    /// Highest vertical offset above the anchor that still counts
    pub height: f32,
    /// Lowest vertical offset from the anchor that still counts
    pub minimum_height_offset: f32,
    /// Automatic detection; when off only explicit add/remove change the tracked set
    pub enabled: bool,
    /// Detection cadence, reset from `CookingSettings` when the heat source is added
    pub timer: Timer,
}

impl Default for DetectionZone {
    fn default() -> Self {
        Self {
            anchor_offset: Vec3::ZERO,
            radius: 0.5,
            height: 0.3,
            minimum_height_offset: 0.0,
            enabled: true,
            timer: Timer::from_seconds(0.2, TimerMode::Repeating),
        }
    }
}

impl DetectionZone {
    pub fn anchor(&self, origin: Vec3) -> Vec3 {
        origin + self.anchor_offset
    }

    /// Positioning policy applied to broad-phase candidates.
    ///
    /// Candidates come from a sphere of `radius` around the anchor; the
    /// horizontal check here is tighter than that.
    pub fn is_positioned_on(&self, anchor: Vec3, position: Vec3) -> bool {
        let offset = position - anchor;
        let horizontal = Vec2::new(offset.x, offset.z).length();

        (self.minimum_height_offset..=self.height).contains(&offset.y)
            && horizontal <= self.radius * PRECISE_RADIUS_FACTOR
    }
}

/// Items currently on a heat source, in the order they arrived.
///
/// `members` indexes `order` for constant-time membership checks.
#[derive(Component, Debug, Default, Clone)]
pub struct ItemsOnStove {
    order: Vec<Entity>,
    members: HashSet<Entity>,
}

impl ItemsOnStove {
    pub fn contains(&self, item: Entity) -> bool {
        self.members.contains(&item)
    }

    /// Returns `false` if the item was already tracked.
    pub fn insert(&mut self, item: Entity) -> bool {
        if !self.members.insert(item) {
            return false;
        }
        self.order.push(item);
        true
    }

    /// Returns `false` if the item was not tracked.
    pub fn remove(&mut self, item: Entity) -> bool {
        if !self.members.remove(&item) {
            return false;
        }
        self.order.retain(|tracked| *tracked != item);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    pub fn snapshot(&self) -> Vec<Entity> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Replaces the tracked set with `detected`, returning what changed.
    pub fn reconcile(&mut self, detected: &[Entity]) -> Reconciliation {
        let reconciliation = Reconciliation::between(&self.order, detected);
        for item in &reconciliation.removed {
            self.members.remove(item);
        }
        self.order.retain(|item| self.members.contains(item));
        for item in &reconciliation.added {
            self.insert(*item);
        }
        reconciliation
    }
}

/// Difference between two consecutive detection results.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub added: Vec<Entity>,
    pub removed: Vec<Entity>,
}

impl Reconciliation {
    pub fn between(previous: &[Entity], detected: &[Entity]) -> Self {
        let previous_set: HashSet<Entity> = previous.iter().copied().collect();
        let detected_set: HashSet<Entity> = detected.iter().copied().collect();

        let mut added = Vec::new();
        for item in detected {
            if !previous_set.contains(item) && !added.contains(item) {
                added.push(*item);
            }
        }
        let removed = previous
            .iter()
            .copied()
            .filter(|item| !detected_set.contains(item))
            .collect();

        Self { added, removed }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Observer entities listening to one item on behalf of a heat source.
/// Despawning them removes exactly this subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSubscription {
    pub on_completed: Entity,
    pub on_burnt: Entity,
}

impl ItemSubscription {
    pub fn observers(&self) -> [Entity; 2] {
        [self.on_completed, self.on_burnt]
    }
}

/// Which items a heat source currently listens to.
#[derive(Component, Debug, Default)]
pub struct StoveSubscriptions {
    handles: HashMap<Entity, ItemSubscription>,
}

impl StoveSubscriptions {
    pub fn contains(&self, item: Entity) -> bool {
        self.handles.contains_key(&item)
    }

    /// Registers `subscription` unless the item already has one.
    /// Returns `false` without touching the existing handle in that case.
    pub fn insert(&mut self, item: Entity, subscription: ItemSubscription) -> bool {
        if self.contains(item) {
            return false;
        }
        self.handles.insert(item, subscription);
        true
    }

    pub fn remove(&mut self, item: Entity) -> Option<ItemSubscription> {
        self.handles.remove(&item)
    }

    pub fn get(&self, item: Entity) -> Option<&ItemSubscription> {
        self.handles.get(&item)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = Entity> + '_ {
        self.handles.keys().copied()
    }
}

/// Items of a heat source that are currently being replaced.
#[derive(Component, Debug, Default)]
pub struct PendingTransformations {
    in_flight: HashSet<Entity>,
}

impl PendingTransformations {
    /// Returns `false` if a transformation for `item` is already running.
    pub fn begin(&mut self, item: Entity) -> bool {
        self.in_flight.insert(item)
    }

    pub fn finish(&mut self, item: Entity) -> bool {
        self.in_flight.remove(&item)
    }

    pub fn contains(&self, item: Entity) -> bool {
        self.in_flight.contains(&item)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.in_flight.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}

/// Effect descriptors requested when an item is replaced.
///
/// The dedicated transition effect is preferred, the burst effect is the fallback.
#[derive(Component, Reflect, Debug, Default, Clone)]
#[reflect(Component)]
pub struct TransitionEffects {
    pub cooked_transition: Option<String>,
    pub burnt_transition: Option<String>,
    pub cooked_burst: Option<String>,
    pub burnt_burst: Option<String>,
}

impl TransitionEffects {
    pub fn for_target(&self, target: CookState) -> Option<&str> {
        let (transition, burst) = match target {
            CookState::Cooked => (&self.cooked_transition, &self.cooked_burst),
            CookState::Burnt => (&self.burnt_transition, &self.burnt_burst),
            CookState::Raw | CookState::Cooking => return None,
        };
        transition.as_deref().or(burst.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_heat_level_is_clamped() {
        let mut stove = HeatSource::default();

        assert_eq!(stove.set_heat_level(5.0), MAX_HEAT_LEVEL);
        assert_eq!(stove.set_heat_level(0.0), MIN_HEAT_LEVEL);
        assert_eq!(stove.set_heat_level(1.5), 1.5);
    }

    #[test]
    fn test_turn_on_and_off_are_idempotent() {
        let mut stove = HeatSource::default();

        assert!(stove.turn_on());
        assert!(!stove.turn_on());
        assert!(stove.is_on());
        assert!(stove.turn_off());
        assert!(!stove.turn_off());
        assert!(!stove.is_on());
    }

    #[test]
    fn test_positioning_policy() {
        let zone = DetectionZone {
            radius: 1.0,
            height: 0.5,
            minimum_height_offset: -0.25,
            ..default()
        };
        let anchor = Vec3::new(0.0, 1.0, 0.0);

        assert!(zone.is_positioned_on(anchor, anchor));
        assert!(zone.is_positioned_on(anchor, anchor + Vec3::new(0.8, 0.0, 0.0)));
        assert!(zone.is_positioned_on(anchor, anchor + Vec3::new(0.0, 0.5, 0.0)));
        assert!(zone.is_positioned_on(anchor, anchor + Vec3::new(0.0, -0.25, 0.0)));
        assert!(!zone.is_positioned_on(anchor, anchor + Vec3::new(0.0, 0.75, 0.0)));
        assert!(!zone.is_positioned_on(anchor, anchor + Vec3::new(0.0, -0.5, 0.0)));
        assert!(!zone.is_positioned_on(anchor, anchor + Vec3::new(0.6, 0.0, 0.6)));
    }

    #[test]
    fn test_policy_is_tighter_than_broad_phase() {
        let zone = DetectionZone {
            radius: 1.0,
            ..default()
        };

        assert!(!zone.is_positioned_on(Vec3::ZERO, Vec3::new(0.85, 0.0, 0.0)));
        assert!(!zone.is_positioned_on(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.85)));
    }

    #[test]
    fn test_reconciliation() {
        let e = entities(4);
        let reconciliation = Reconciliation::between(&[e[0], e[1], e[2]], &[e[1], e[3], e[3]]);

        assert_eq!(reconciliation.added, vec![e[3]]);
        assert_eq!(reconciliation.removed, vec![e[0], e[2]]);
    }

    #[test]
    fn test_reconcile_keeps_arrival_order() {
        let e = entities(3);
        let mut items = ItemsOnStove::default();
        items.insert(e[0]);
        items.insert(e[1]);

        let changes = items.reconcile(&[e[2], e[1]]);

        assert_eq!(changes.added, vec![e[2]]);
        assert_eq!(changes.removed, vec![e[0]]);
        assert_eq!(items.snapshot(), vec![e[1], e[2]]);
        assert!(items.reconcile(&[e[1], e[2]]).is_empty());
    }

    #[test]
    fn test_tracked_items_are_unique() {
        let e = entities(1);
        let mut items = ItemsOnStove::default();

        assert!(items.insert(e[0]));
        assert!(!items.insert(e[0]));
        assert_eq!(items.len(), 1);
        assert!(items.remove(e[0]));
        assert!(!items.remove(e[0]));
    }

    #[test]
    fn test_membership_follows_reconcile() {
        let e = entities(3);
        let mut items = ItemsOnStove::default();
        items.insert(e[0]);
        items.insert(e[1]);

        items.reconcile(&[e[1], e[2]]);

        assert!(!items.contains(e[0]));
        assert!(items.contains(e[1]));
        assert!(items.contains(e[2]));
        assert!(items.insert(e[0]));
        assert_eq!(items.snapshot(), vec![e[1], e[2], e[0]]);
    }

    #[test]
    fn test_subscriptions_keep_first_handle() {
        let e = entities(5);
        let mut subscriptions = StoveSubscriptions::default();
        let first = ItemSubscription {
            on_completed: e[1],
            on_burnt: e[2],
        };
        let second = ItemSubscription {
            on_completed: e[3],
            on_burnt: e[4],
        };

        assert!(subscriptions.insert(e[0], first));
        assert!(!subscriptions.insert(e[0], second));
        assert_eq!(subscriptions.get(e[0]), Some(&first));
        assert_eq!(subscriptions.remove(e[0]), Some(first));
        assert!(subscriptions.is_empty());
    }

    #[test]
    fn test_pending_transformations_guard() {
        let e = entities(1);
        let mut pending = PendingTransformations::default();

        assert!(pending.begin(e[0]));
        assert!(!pending.begin(e[0]));
        assert!(pending.finish(e[0]));
        assert!(pending.begin(e[0]));
    }

    #[test]
    fn test_transition_effect_fallback() {
        let effects = TransitionEffects {
            cooked_transition: Some("steam".into()),
            cooked_burst: Some("puff".into()),
            burnt_burst: Some("smoke".into()),
            ..default()
        };

        assert_eq!(effects.for_target(CookState::Cooked), Some("steam"));
        assert_eq!(effects.for_target(CookState::Burnt), Some("smoke"));
        assert_eq!(TransitionEffects::default().for_target(CookState::Burnt), None);
    }
}
