//! Periodic detection of the items sitting on each heat source.

use {
    crate::subscriptions::{subscribe, unsubscribe},
    bevy::{ecs::system::SystemParam, prelude::*},
    cooking_components::Cookable,
    stove_components::{DetectionZone, HeatSource, ItemsOnStove, StoveSubscriptions},
    stove_events::{ItemPlaced, ItemRemoved},
};

/// Broad-phase spatial query over cookable items.
///
/// Positions come from `Transform`, so items are expected to be root entities.
#[derive(SystemParam)]
pub struct CookableBroadPhase<'w, 's> {
    items: Query<'w, 's, (Entity, &'static Transform), With<Cookable>>,
}

impl CookableBroadPhase<'_, '_> {
    /// Items within `radius` of `anchor`, with their positions.
    pub fn entities_within(&self, anchor: Vec3, radius: f32) -> Vec<(Entity, Vec3)> {
        self.items
            .iter()
            .map(|(entity, transform)| (entity, transform.translation))
            .filter(|(_, position)| anchor.distance(*position) <= radius)
            .collect()
    }
}

/// Runs a detection cycle for every heat source whose detection timer fired.
pub fn detect_items(
    time: Res<Time>,
    mut stoves: Query<
        (
            Entity,
            &Transform,
            &mut DetectionZone,
            &mut ItemsOnStove,
            &mut StoveSubscriptions,
        ),
        With<HeatSource>,
    >,
    broad_phase: CookableBroadPhase,
    mut items: Query<&mut Cookable>,
    mut commands: Commands,
) {
    for (stove, transform, mut zone, mut tracked, mut subscriptions) in &mut stoves {
        if !zone.enabled {
            continue;
        }
        if !zone.timer.tick(time.delta()).just_finished() {
            continue;
        }

        let anchor = zone.anchor(transform.translation);
        let detected: Vec<Entity> = broad_phase
            .entities_within(anchor, zone.radius)
            .into_iter()
            .filter(|(_, position)| zone.is_positioned_on(anchor, *position))
            .map(|(item, _)| item)
            .collect();

        let changes = tracked.reconcile(&detected);

        for item in changes.added {
            subscribe(&mut commands, &mut subscriptions, stove, item);
            commands.trigger(ItemPlaced {
                entity: stove,
                item,
            });
            debug!(?stove, ?item, "Item placed on heat source");
        }

        for item in changes.removed {
            unsubscribe(&mut commands, &mut subscriptions, item);
            if let Ok(mut cookable) = items.get_mut(item) {
                cookable.stop_heating();
            }
            commands.trigger(ItemRemoved {
                entity: stove,
                item,
            });
            debug!(?stove, ?item, "Item removed from heat source");
        }
    }
}
