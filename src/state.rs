//! Clap Interaction State
//!
//! Owns the clamped click counter and the click-derived flags, mutated
//! through a single transition. The transition always runs against the
//! latest committed state, so rapid consecutive claps can never be lost
//! or double-counted through a stale copy.

use serde::{Deserialize, Serialize};

/// Upper bound for a single user's claps.
pub const MAX_CLAPS: u32 = 20;

/// Seed value for the community total shown under the button.
pub const DEFAULT_COUNT_TOTAL: u32 = 49;

/// Committed interaction state of the clap control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClapState {
    /// This user's claps, clamped to `MAX_CLAPS`.
    pub count: u32,
    /// Combined total; only grows while `count` is below the cap.
    pub count_total: u32,
    /// Monotonic first-interaction flag: flips to true on the first clap
    /// and is never reset by this subsystem. Not a toggle.
    pub has_clapped: bool,
}

impl Default for ClapState {
    fn default() -> Self {
        Self {
            count: 0,
            count_total: DEFAULT_COUNT_TOTAL,
            has_clapped: false,
        }
    }
}

impl ClapState {
    /// Pure state transition for one clap.
    ///
    /// Clamping is idempotent: once `count == MAX_CLAPS`, further claps
    /// leave both counters unchanged (and `has_clapped` is already true).
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            count: (self.count + 1).min(MAX_CLAPS),
            count_total: if self.count < MAX_CLAPS {
                self.count_total + 1
            } else {
                self.count_total
            },
            has_clapped: true,
        }
    }
}

/// Props for the trigger element (the button itself).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TogglerProps {
    /// Pressed indicator, backed by the monotonic `has_clapped` flag.
    pub pressed: bool,
}

/// Bounded-range props for the counter element.
///
/// `min`, `max` and `current` mirror the accessible value contract of a
/// range widget and must stay bit-exact with the committed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterProps {
    pub count: u32,
    pub min: u32,
    pub max: u32,
    pub current: u32,
}

/// State machine owning the committed [`ClapState`].
#[derive(Debug)]
pub struct ClapStateMachine {
    state: ClapState,
}

impl ClapStateMachine {
    /// Create a machine from caller-supplied initial state.
    ///
    /// The initial state is accepted as-is: an out-of-range `count` is not
    /// clamped or rejected here. The transition clamps from the first clap
    /// onward.
    pub fn new(initial: ClapState) -> Self {
        Self { state: initial }
    }

    /// The latest committed state.
    pub fn state(&self) -> ClapState {
        self.state
    }

    /// Commit one clap against the latest committed state.
    pub fn clap(&mut self) -> ClapState {
        self.state = self.state.next();
        self.state
    }

    /// Sequencing combinator for the trigger handler: runs the internal
    /// transition first, then the caller-supplied hook. A missing hook is
    /// not an error.
    pub fn clap_then(&mut self, extra: Option<&mut dyn FnMut(&ClapState)>) -> ClapState {
        let state = self.clap();
        if let Some(hook) = extra {
            hook(&state);
        }
        state
    }

    /// Props for the trigger element.
    pub fn toggler_props(&self) -> TogglerProps {
        TogglerProps {
            pressed: self.state.has_clapped,
        }
    }

    /// Bounded-range props for the counter element.
    pub fn counter_props(&self) -> CounterProps {
        CounterProps {
            count: self.state.count,
            min: 0,
            max: MAX_CLAPS,
            current: self.state.count,
        }
    }
}

impl Default for ClapStateMachine {
    fn default() -> Self {
        Self::new(ClapState::default())
    }
}
