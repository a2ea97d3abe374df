use std::cell::RefCell;
use std::rc::Rc;

use crate::section::SectionId;

pub type StoreSubscriber = Rc<dyn Fn(&ActivationState)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationState {
    pub active: SectionId,
    pub guarded: bool,
}

struct StoreInner {
    state: RefCell<ActivationState>,
    subscribers: Rc<RefCell<Vec<StoreSubscriber>>>,
}

/// Shared holder of the active section and the transition guard flag.
///
/// The store does not enforce who writes; the scroll spy only writes while
/// unguarded and navigation owns the guard flag. Clones share state.
#[derive(Clone)]
pub struct ActivationStore {
    inner: Rc<StoreInner>,
}

impl ActivationStore {
    pub fn new(initial: SectionId) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(ActivationState {
                    active: initial,
                    guarded: false,
                }),
                subscribers: Rc::new(RefCell::new(Vec::new())),
            }),
        }
    }

    pub fn active(&self) -> SectionId {
        self.inner.state.borrow().active.clone()
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        self.inner.state.borrow().active == *id
    }

    pub fn is_guarded(&self) -> bool {
        self.inner.state.borrow().guarded
    }

    /// Returns `true` if the value changed (and subscribers ran).
    pub fn set_active(&self, id: SectionId) -> bool {
        self.update(|state| {
            if state.active == id {
                return false;
            }
            state.active = id;
            true
        })
    }

    pub fn set_guarded(&self, guarded: bool) -> bool {
        self.update(|state| {
            if state.guarded == guarded {
                return false;
            }
            state.guarded = guarded;
            true
        })
    }

    pub fn subscribe(&self, subscriber: StoreSubscriber) -> Subscription {
        self.inner.subscribers.borrow_mut().push(subscriber.clone());
        Subscription {
            subscriber,
            subscribers: Rc::clone(&self.inner.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn update<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut ActivationState) -> bool,
    {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            if !mutate(&mut state) {
                return false;
            }
            state.clone()
        };
        let subscribers = self.inner.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
        true
    }
}

impl PartialEq for ActivationStore {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Unsubscribes on drop.
pub struct Subscription {
    subscriber: StoreSubscriber,
    subscribers: Rc<RefCell<Vec<StoreSubscriber>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
