use std::cell::Cell;

use crate::store::ActivationStore;

/// Identifies the navigation that engaged the guard. Only the ticket of the
/// latest navigation can release it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardTicket(u64);

/// Suspends scroll-driven activation while a programmatic navigation is in
/// flight. The flag itself lives in the [`ActivationStore`].
pub struct TransitionGuard {
    store: ActivationStore,
    generation: Cell<u64>,
}

impl TransitionGuard {
    pub fn new(store: ActivationStore) -> Self {
        Self {
            store,
            generation: Cell::new(0),
        }
    }

    pub fn engage(&self) -> GuardTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        self.store.set_guarded(true);
        GuardTicket(next)
    }

    /// Returns `false` for a stale ticket; a newer navigation owns the guard.
    pub fn release(&self, ticket: GuardTicket) -> bool {
        if ticket.0 != self.generation.get() {
            return false;
        }
        self.store.set_guarded(false);
        true
    }

    /// Unconditional release, used on teardown.
    pub fn force_release(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.store.set_guarded(false);
    }

    pub fn is_engaged(&self) -> bool {
        self.store.is_guarded()
    }
}
