//! Handle-based listener registration for items on a heat source.
//!
//! Each subscription is a pair of entity-scoped observers parented to the
//! heat source. Unsubscribing despawns exactly those observers, and despawning
//! the heat source takes them down with it.

use {
    crate::TransformationCoordinator,
    bevy::prelude::*,
    cooking_components::CookState,
    cooking_events::{Burnt, CookingCompleted},
    stove_components::{ItemSubscription, StoveSubscriptions},
};

/// Starts listening to `item` on behalf of `stove`.
/// Returns `false` if the item already had a subscription.
pub fn subscribe(
    commands: &mut Commands,
    subscriptions: &mut StoveSubscriptions,
    stove: Entity,
    item: Entity,
) -> bool {
    if subscriptions.contains(item) {
        trace!(?stove, ?item, "Item already subscribed");
        return false;
    }

    let on_completed = commands
        .spawn((
            Observer::new(
                move |trigger: On<CookingCompleted>, mut coordinator: TransformationCoordinator| {
                    coordinator.begin(stove, trigger.event().entity, CookState::Cooked);
                },
            )
            .with_entity(item),
            ChildOf(stove),
        ))
        .id();

    let on_burnt = commands
        .spawn((
            Observer::new(
                move |trigger: On<Burnt>, mut coordinator: TransformationCoordinator| {
                    coordinator.begin(stove, trigger.event().entity, CookState::Burnt);
                },
            )
            .with_entity(item),
            ChildOf(stove),
        ))
        .id();

    subscriptions.insert(
        item,
        ItemSubscription {
            on_completed,
            on_burnt,
        },
    )
}

/// Stops listening to `item`. Returns `false` if it had no subscription.
pub fn unsubscribe(
    commands: &mut Commands,
    subscriptions: &mut StoveSubscriptions,
    item: Entity,
) -> bool {
    let Some(subscription) = subscriptions.remove(item) else {
        return false;
    };

    // The observers may already be gone if the item was despawned first.
    for observer in subscription.observers() {
        commands.entity(observer).try_despawn();
    }
    true
}
