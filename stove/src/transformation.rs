//! Replacement of cooked and burnt items.
//!
//! A transformation runs in two halves. [`TransformationCoordinator::begin`]
//! captures the item, requests the transition effect and parks a
//! [`TransformationTask`] under the heat source. Once the task's delay has
//! elapsed, [`advance_transformations`] swaps the item for its replacement.

use {
    crate::subscriptions::{subscribe, unsubscribe},
    bevy::{ecs::system::SystemParam, prelude::*},
    cooking::{emit_signals, spawn_cookable},
    cooking_assets::CookingProfile,
    cooking_components::{CookState, Cookable},
    cooking_resources::CookingSettings,
    effect_events::SpawnEffectRequest,
    stove_components::{
        HeatSource, ItemsOnStove, PendingTransformations, StoveSubscriptions, TransitionEffects,
    },
    stove_events::ItemTransformed,
};

/// A replacement waiting for its delay to elapse.
///
/// Spawned as a child of the heat source, so tearing the heat source down
/// drops every pending replacement with it.
#[derive(Component, Debug)]
pub struct TransformationTask {
    pub stove: Entity,
    pub item: Entity,
    pub target: CookState,
    pub prefab: String,
    pub profile: Handle<CookingProfile>,
    pub transform: Transform,
    pub delay: Timer,
}

#[derive(SystemParam)]
pub struct TransformationCoordinator<'w, 's> {
    commands: Commands<'w, 's>,
    stoves: Query<
        'w,
        's,
        (
            &'static mut PendingTransformations,
            &'static mut StoveSubscriptions,
            Option<&'static TransitionEffects>,
        ),
        With<HeatSource>,
    >,
    items: Query<'w, 's, (&'static Cookable, &'static Transform)>,
    profiles: Res<'w, Assets<CookingProfile>>,
    settings: Res<'w, CookingSettings>,
}

impl TransformationCoordinator<'_, '_> {
    /// Starts replacing `item` with its `target` state prefab.
    ///
    /// Returns `false` when a replacement for the item is already running on
    /// any heat source or when the item cannot be replaced. Nothing is
    /// destroyed in either case.
    ///
    /// Once started, the heat source stops listening to the item until its
    /// replacement is spawned.
    pub fn begin(&mut self, stove: Entity, item: Entity, target: CookState) -> bool {
        if !self.stoves.contains(stove) {
            debug!(?stove, ?item, "Heat source is gone, ignoring finished item");
            return false;
        }
        // An item inside overlapping zones is subscribed by every heat source.
        if self
            .stoves
            .iter()
            .any(|(pending, ..)| pending.contains(item))
        {
            trace!(?stove, ?item, "Transformation already in flight");
            return false;
        }

        let Ok((mut pending, mut subscriptions, effects)) = self.stoves.get_mut(stove) else {
            return false;
        };
        pending.begin(item);

        let Ok((cookable, transform)) = self.items.get(item) else {
            pending.finish(item);
            return false;
        };
        let profile = cookable.profile.clone();
        let transform = *transform;

        let Some(prefab) = self
            .profiles
            .get(&profile)
            .and_then(|profile| replacement_prefab(profile, target))
        else {
            warn!(
                ?item,
                ?target,
                "No replacement prefab registered, item stays as it is"
            );
            pending.finish(item);
            return false;
        };

        if let Some(effect) = effects.and_then(|effects| effects.for_target(target)) {
            self.commands.trigger(SpawnEffectRequest {
                effect: effect.to_string(),
                position: transform.translation,
                rotation: transform.rotation,
                auto_expire_after: self.settings.effect_lifetime,
            });
        }

        unsubscribe(&mut self.commands, &mut subscriptions, item);

        self.commands.spawn((
            TransformationTask {
                stove,
                item,
                target,
                prefab,
                profile,
                transform,
                delay: Timer::from_seconds(self.settings.transformation_delay, TimerMode::Once),
            },
            ChildOf(stove),
        ));

        debug!(?stove, ?item, ?target, "Transformation started");
        true
    }
}

fn replacement_prefab(profile: &CookingProfile, target: CookState) -> Option<String> {
    match target {
        CookState::Cooked => profile.cooked_prefab.clone(),
        CookState::Burnt => profile.burnt_prefab.clone(),
        CookState::Raw | CookState::Cooking => None,
    }
}

/// Swaps items whose transformation delay has elapsed.
pub fn advance_transformations(
    time: Res<Time>,
    mut tasks: Query<(Entity, &mut TransformationTask)>,
    mut stoves: Query<
        (
            &mut ItemsOnStove,
            &mut StoveSubscriptions,
            &mut PendingTransformations,
        ),
        With<HeatSource>,
    >,
    items: Query<(), With<Cookable>>,
    mut commands: Commands,
) {
    for (task_entity, mut task) in &mut tasks {
        // The delay starts counting on the frame after the request.
        if task.is_added() {
            continue;
        }
        if !task.delay.tick(time.delta()).just_finished() {
            continue;
        }
        commands.entity(task_entity).try_despawn();

        let Ok((mut tracked, mut subscriptions, mut pending)) = stoves.get_mut(task.stove) else {
            debug!(stove = ?task.stove, item = ?task.item, "Heat source is gone, abandoning transformation");
            continue;
        };

        if items.get(task.item).is_err() {
            debug!(item = ?task.item, "Item vanished before it could be replaced");
            pending.finish(task.item);
            continue;
        }

        tracked.remove(task.item);
        commands.entity(task.item).try_despawn();

        let mut cookable = Cookable::new(task.profile.clone());
        let state_changed = cookable.force_state(task.target);
        cookable.set_progress(task.target.nominal_progress());
        let replacement = spawn_cookable(&mut commands, &task.prefab, task.transform, cookable);
        emit_signals(&mut commands, replacement, [state_changed]);

        tracked.insert(replacement);
        subscribe(&mut commands, &mut subscriptions, task.stove, replacement);

        pending.finish(task.item);

        commands.trigger(ItemTransformed {
            entity: task.stove,
            original: task.item,
            replacement,
            state: task.target,
        });
        info!(
            original = ?task.item,
            ?replacement,
            prefab = %task.prefab,
            "Item transformed"
        );
    }
}
