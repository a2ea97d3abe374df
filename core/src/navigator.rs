use std::cell::RefCell;
use std::rc::Rc;

use crate::guard::{GuardTicket, TransitionGuard};
use crate::resolver::{resolve_active, ReferencePoint};
use crate::sampler::{sample_sections, GeometrySource};
use crate::scheduler::Scheduler;
use crate::section::{SectionId, SectionIdError, SectionRegistry};
use crate::store::ActivationStore;

pub const DEFAULT_SETTLE_DELAY_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Activated(SectionId),
    Unchanged,
    /// A different section was resolved but the guard held it back.
    Suppressed(SectionId),
    /// Reference line outside every mounted section; previous kept.
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no section named '{0}' is registered")]
    UnknownSection(SectionId),
    #[error(transparent)]
    InvalidId(#[from] SectionIdError),
}

/// Maps sampled geometry onto the activation store.
#[derive(Clone)]
pub struct ScrollSpy {
    registry: Rc<SectionRegistry>,
    reference: ReferencePoint,
    store: ActivationStore,
}

impl ScrollSpy {
    pub fn new(registry: SectionRegistry, reference: ReferencePoint) -> Self {
        let store = ActivationStore::new(registry.first().clone());
        Self {
            registry: Rc::new(registry),
            reference,
            store,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ActivationStore {
        &self.store
    }

    /// Run on mount and on every scroll or resize notification.
    pub fn sync<G>(&self, source: &G) -> SyncOutcome
    where
        G: GeometrySource + ?Sized,
    {
        let samples = sample_sections(&self.registry, source);
        let Some(resolved) = resolve_active(&samples, source.viewport_height(), self.reference)
        else {
            return SyncOutcome::NoMatch;
        };
        if self.store.is_active(resolved) {
            return SyncOutcome::Unchanged;
        }
        if self.store.is_guarded() {
            return SyncOutcome::Suppressed(resolved.clone());
        }
        self.store.set_active(resolved.clone());
        SyncOutcome::Activated(resolved.clone())
    }
}

/// Click-initiated navigation: engages the guard, highlights the target at
/// once and releases the guard after the settle delay. The scroll itself is
/// left to the browser's anchor navigation.
pub struct Navigator<S: Scheduler> {
    spy: ScrollSpy,
    guard: Rc<TransitionGuard>,
    scheduler: S,
    settle_delay_ms: u32,
    settle_timer: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Navigator<S> {
    pub fn new(spy: ScrollSpy, scheduler: S, settle_delay_ms: u32) -> Self {
        let guard = Rc::new(TransitionGuard::new(spy.store().clone()));
        Self {
            spy,
            guard,
            scheduler,
            settle_delay_ms,
            settle_timer: RefCell::new(None),
        }
    }

    pub fn store(&self) -> &ActivationStore {
        self.spy.store()
    }

    pub fn sync<G>(&self, source: &G) -> SyncOutcome
    where
        G: GeometrySource + ?Sized,
    {
        self.spy.sync(source)
    }

    pub fn navigate(&self, target: &SectionId) -> Result<GuardTicket, NavigationError> {
        if !self.spy.registry().contains(target) {
            return Err(NavigationError::UnknownSection(target.clone()));
        }
        let ticket = self.guard.engage();
        self.store().set_active(target.clone());
        // the previous navigation's un-guard must never fire after this one
        let previous = self.settle_timer.borrow_mut().take();
        drop(previous);
        let guard = Rc::clone(&self.guard);
        let handle = self.scheduler.schedule(
            self.settle_delay_ms,
            Box::new(move || {
                guard.release(ticket);
            }),
        );
        *self.settle_timer.borrow_mut() = Some(handle);
        Ok(ticket)
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_engaged()
    }

    pub fn teardown(&self) {
        let pending = self.settle_timer.borrow_mut().take();
        drop(pending);
        self.guard.force_release();
    }
}
