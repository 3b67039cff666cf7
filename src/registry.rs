//! Element Registry
//!
//! Collects opaque handles to the renderable elements the effects target,
//! keyed by logical role. Handles are used only for targeting, never for
//! ownership; a handle going stale because its element was destroyed is
//! the rendering layer's concern, not the registry's.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Logical role of a registered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRole {
    /// The clap button itself.
    Trigger,
    /// The floating "+N" counter badge.
    Counter,
    /// The community total line.
    Total,
}

/// Opaque reference to a renderable element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(u64);

impl ElementHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Role-keyed collection of element handles, built incrementally as
/// elements mount. Registering a role again overwrites its handle and
/// leaves every other entry untouched; entries are never removed.
#[derive(Clone, Debug, Default)]
pub struct ElementRegistry {
    entries: HashMap<ElementRole, ElementHandle>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incremental immutable update: the returned registry contains all
    /// previous entries plus the new (or overwritten) one.
    #[must_use]
    pub fn with(mut self, role: ElementRole, handle: ElementHandle) -> Self {
        self.entries.insert(role, handle);
        self
    }

    /// In-place registration, safe to call repeatedly per role.
    pub fn register(&mut self, role: ElementRole, handle: ElementHandle) {
        self.entries.insert(role, handle);
    }

    /// Lookup. `None` means the element has not mounted yet.
    pub fn get(&self, role: ElementRole) -> Option<ElementHandle> {
        self.entries.get(&role).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All three required handles, once every element has mounted.
    pub fn targets(&self) -> Option<AnimationTargets> {
        Some(AnimationTargets {
            trigger: self.get(ElementRole::Trigger)?,
            counter: self.get(ElementRole::Counter)?,
            total: self.get(ElementRole::Total)?,
        })
    }
}

/// The full set of handles the animation orchestrator needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTargets {
    pub trigger: ElementHandle,
    pub counter: ElementHandle,
    pub total: ElementHandle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_absent_role() {
        let registry = ElementRegistry::new();
        assert_eq!(registry.get(ElementRole::Trigger), None);
        assert!(registry.targets().is_none());
    }

    #[test]
    fn test_with_is_incremental() {
        let registry = ElementRegistry::new()
            .with(ElementRole::Trigger, ElementHandle::new(1))
            .with(ElementRole::Counter, ElementHandle::new(2));

        assert_eq!(registry.get(ElementRole::Trigger), Some(ElementHandle::new(1)));
        assert_eq!(registry.get(ElementRole::Counter), Some(ElementHandle::new(2)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reregistration_overwrites_only_that_role() {
        let registry = ElementRegistry::new()
            .with(ElementRole::Trigger, ElementHandle::new(1))
            .with(ElementRole::Counter, ElementHandle::new(2))
            .with(ElementRole::Trigger, ElementHandle::new(10));

        assert_eq!(
            registry.get(ElementRole::Trigger),
            Some(ElementHandle::new(10))
        );
        assert_eq!(
            registry.get(ElementRole::Counter),
            Some(ElementHandle::new(2))
        );
    }

    #[test]
    fn test_targets_requires_all_roles() {
        let mut registry = ElementRegistry::new();
        registry.register(ElementRole::Trigger, ElementHandle::new(1));
        registry.register(ElementRole::Counter, ElementHandle::new(2));
        assert!(registry.targets().is_none());

        registry.register(ElementRole::Total, ElementHandle::new(3));
        let targets = registry.targets().expect("all roles registered");
        assert_eq!(targets.trigger, ElementHandle::new(1));
        assert_eq!(targets.counter, ElementHandle::new(2));
        assert_eq!(targets.total, ElementHandle::new(3));
    }
}
