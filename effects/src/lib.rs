//! Short-lived visual effects requested by gameplay code.
//!
//! Effects are plain marker entities here. Rendering them is left to whoever
//! queries [`ActiveEffect`].

use {
    bevy::prelude::*,
    effect_events::SpawnEffectRequest,
    system_schedule::{GameSchedule, GameSchedulePlugin},
};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<GameSchedulePlugin>() {
            app.add_plugins(GameSchedulePlugin);
        }

        app.register_type::<ActiveEffect>()
            .add_observer(spawn_requested_effect)
            .add_systems(Update, expire_effects.in_set(GameSchedule::FrameEnd));
    }
}

/// A spawned effect and the time it has left.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct ActiveEffect {
    pub effect: String,
    pub lifetime: Timer,
}

pub fn spawn_requested_effect(trigger: On<SpawnEffectRequest>, mut commands: Commands) {
    let request = trigger.event();
    commands.spawn((
        Name::new(request.effect.clone()),
        ActiveEffect {
            effect: request.effect.clone(),
            lifetime: Timer::from_seconds(request.auto_expire_after, TimerMode::Once),
        },
        Transform::from_translation(request.position).with_rotation(request.rotation),
    ));
    trace!(effect = %request.effect, position = ?request.position, "Effect spawned");
}

pub fn expire_effects(
    time: Res<Time>,
    mut effects: Query<(Entity, &mut ActiveEffect)>,
    mut commands: Commands,
) {
    for (entity, mut effect) in &mut effects {
        if effect.lifetime.tick(time.delta()).is_finished() {
            commands.entity(entity).try_despawn();
        }
    }
}
