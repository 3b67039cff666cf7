//! Mount-Aware Effect Scheduler
//!
//! A change-detection gate that suppresses an effect's very first
//! evaluation after construction, so effects fire only on genuine state
//! changes and never against elements that are mid-construction. One
//! scheduler is owned per control instance; there is no shared state
//! between controls.

/// Lifecycle phase of the scheduler. `Active` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerPhase {
    /// Constructed, but not yet evaluated.
    JustInitialized,
    /// First evaluation has happened; change detection is live.
    Active,
}

/// Gates a callback on distinct changes of a watched value, skipping the
/// initial evaluation.
#[derive(Debug)]
pub struct AfterMountScheduler<T> {
    phase: SchedulerPhase,
    watched: Option<T>,
}

impl<T: PartialEq> AfterMountScheduler<T> {
    pub fn new() -> Self {
        Self {
            phase: SchedulerPhase::JustInitialized,
            watched: None,
        }
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    /// Evaluate against the current watched value.
    ///
    /// The first evaluation transitions to `Active`, records the value,
    /// and does not invoke `effect`. Every later evaluation invokes
    /// `effect` exactly once if the value differs from the last recorded
    /// one. Returns whether the effect fired.
    pub fn evaluate<F: FnOnce()>(&mut self, watched: T, effect: F) -> bool {
        match self.phase {
            SchedulerPhase::JustInitialized => {
                self.phase = SchedulerPhase::Active;
                self.watched = Some(watched);
                false
            }
            SchedulerPhase::Active => {
                if self.watched.as_ref() == Some(&watched) {
                    return false;
                }
                self.watched = Some(watched);
                effect();
                true
            }
        }
    }
}

impl<T: PartialEq> Default for AfterMountScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
