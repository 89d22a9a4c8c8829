//! Components for items that can be cooked.

use {bevy::prelude::*, cooking_assets::CookingProfile};

pub struct CookingComponentsPlugin;

impl Plugin for CookingComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CookState>()
            .register_type::<ManualHeat>()
            .register_type::<PrefabId>();
    }
}

/// Progress value at which an item counts as cooked.
pub const COOKED_PROGRESS: f32 = 1.0;
/// Progress value at which an item counts as burnt.
pub const BURNT_PROGRESS: f32 = 2.0;

#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookState {
    #[default]
    Raw,
    Cooking,
    Cooked,
    Burnt,
}

impl CookState {
    /// Progress an item is expected to hold when it is placed directly in this state.
    pub fn nominal_progress(self) -> f32 {
        match self {
            CookState::Raw | CookState::Cooking => 0.0,
            CookState::Cooked => COOKED_PROGRESS,
            CookState::Burnt => BURNT_PROGRESS,
        }
    }
}

/// Notification produced by a [`Cookable`] state change.
///
/// The component itself has no access to the world, so callers turn these into
/// entity events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookingSignal {
    Started,
    Completed,
    Burnt,
    StateChanged(CookState),
}

/// Per-item cooking state machine.
///
/// `progress` lives in `[0, 2]`: below 1 while cooking, exactly 1 once cooked,
/// between 1 and 2 while overcooking and 2 once burnt. It only goes down
/// through [`Cookable::reset`] or [`Cookable::set_progress`].
#[derive(Component, Debug, Clone)]
pub struct Cookable {
    pub profile: Handle<CookingProfile>,
    state: CookState,
    progress: f32,
    is_being_heated: bool,
}

impl Cookable {
    pub fn new(profile: Handle<CookingProfile>) -> Self {
        Self {
            profile,
            state: CookState::Raw,
            progress: 0.0,
            is_being_heated: false,
        }
    }

    /// Creates an item already in `state`, for scripted setups.
    pub fn with_state(profile: Handle<CookingProfile>, state: CookState) -> Self {
        Self {
            state,
            progress: state.nominal_progress(),
            ..Self::new(profile)
        }
    }

    pub fn state(&self) -> CookState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_being_heated(&self) -> bool {
        self.is_being_heated
    }

    /// Advances the state machine by `dt` seconds of `heat_level`.
    ///
    /// Does nothing for burnt items, when the profile is missing or invalid,
    /// or when the applied heat is not a positive finite amount. Raw items start cooking and accrue progress in the same call. Crossing
    /// a threshold clamps progress to it, so leftover heat is discarded.
    pub fn apply_heat(
        &mut self,
        profile: Option<&CookingProfile>,
        heat_level: f32,
        dt: f32,
    ) -> Vec<CookingSignal> {
        let mut signals = Vec::new();

        if self.state == CookState::Burnt {
            return signals;
        }
        let Some(profile) = profile.filter(|profile| profile.is_valid()) else {
            return signals;
        };

        let heat = dt * heat_level * profile.heat_sensitivity;
        // Progress only moves forward; zero, negative and NaN heat change nothing.
        if !(heat > 0.0 && heat.is_finite()) {
            return signals;
        }
        self.is_being_heated = true;

        if self.state == CookState::Raw {
            self.state = CookState::Cooking;
            signals.push(CookingSignal::Started);
        }

        match self.state {
            CookState::Cooking => {
                self.progress += heat / profile.cook_time;
                if self.progress >= COOKED_PROGRESS {
                    self.progress = COOKED_PROGRESS;
                    self.state = CookState::Cooked;
                    signals.push(CookingSignal::Completed);
                    signals.push(CookingSignal::StateChanged(CookState::Cooked));
                }
            }
            CookState::Cooked if profile.can_burn => {
                self.progress += heat / profile.burn_time;
                if self.progress >= BURNT_PROGRESS {
                    self.progress = BURNT_PROGRESS;
                    self.state = CookState::Burnt;
                    signals.push(CookingSignal::Burnt);
                    signals.push(CookingSignal::StateChanged(CookState::Burnt));
                }
            }
            _ => {}
        }

        signals
    }

    /// Clears the heating flag. State and progress are kept as they are.
    pub fn stop_heating(&mut self) {
        self.is_being_heated = false;
    }

    /// Sets the state without running the started/completed/burnt transitions.
    pub fn force_state(&mut self, state: CookState) -> CookingSignal {
        self.state = state;
        CookingSignal::StateChanged(state)
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, BURNT_PROGRESS);
    }

    /// Returns the item to raw with no progress.
    pub fn reset(&mut self) -> CookingSignal {
        self.progress = 0.0;
        self.is_being_heated = false;
        self.force_state(CookState::Raw)
    }

    pub fn progress_percent(&self) -> f32 {
        match self.state {
            CookState::Raw => 0.0,
            CookState::Cooking => self.progress * 100.0,
            CookState::Cooked | CookState::Burnt => 100.0,
        }
    }

    pub fn is_perfectly_cooked(&self) -> bool {
        self.state == CookState::Cooked
    }
}

/// Heat an item applies to itself while cooked outside of any heat source.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct ManualHeat(pub f32);

/// The prefab descriptor an item was spawned from (e.g., "cooked_steak").
#[derive(Component, Reflect, Debug, Clone, PartialEq, Eq, Deref)]
#[reflect(Component)]
pub struct PrefabId(pub String);
