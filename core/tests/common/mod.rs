#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use folio_core::{GeometrySource, Scheduler, SectionExtent, SectionId, SectionRegistry};

pub const PAGE: [(&str, f64); 5] = [
    ("hero", 800.0),
    ("about", 600.0),
    ("tech", 600.0),
    ("projects", 900.0),
    ("contact", 700.0),
];

pub fn registry() -> SectionRegistry {
    SectionRegistry::from_names(PAGE.iter().map(|(name, _)| *name)).unwrap()
}

pub fn section(name: &str) -> SectionId {
    SectionId::parse(name).unwrap()
}

/// Single-column page of stacked sections with a movable scroll position.
pub struct StackedPage {
    viewport: f64,
    scroll_y: Cell<f64>,
    mounted: RefCell<Vec<(&'static str, f64)>>,
}

impl StackedPage {
    pub fn new(viewport: f64) -> Self {
        Self {
            viewport,
            scroll_y: Cell::new(0.0),
            mounted: RefCell::new(PAGE.to_vec()),
        }
    }

    pub fn scroll_to(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    /// Scrolls so the viewport center sits at `absolute_y`.
    pub fn center_on(&self, absolute_y: f64) {
        self.scroll_y.set(absolute_y - self.viewport * 0.5);
    }

    pub fn unmount(&self, name: &str) {
        self.mounted.borrow_mut().retain(|(mounted, _)| *mounted != name);
    }
}

impl GeometrySource for StackedPage {
    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn section_extent(&self, id: &SectionId) -> Option<SectionExtent> {
        let mut top = 0.0;
        for (name, height) in PAGE {
            let mounted = self
                .mounted
                .borrow()
                .iter()
                .any(|(mounted, _)| *mounted == name);
            if name == id.as_str() {
                if !mounted {
                    return None;
                }
                return Some(SectionExtent::new(top - self.scroll_y.get(), height));
            }
            top += height;
        }
        None
    }
}

struct PendingTask {
    id: u64,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Virtual-time scheduler. Tasks run only inside [`ManualClock::advance`].
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct ManualTimer {
    id: u64,
    state: Weak<RefCell<ClockState>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().pending.retain(|task| task.id != self.id);
        }
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualTimer;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due_ms = state.now_ms + u64::from(delay_ms);
        state.pending.push(PendingTask { id, due_ms, task });
        ManualTimer {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

impl ManualClock {
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Moves time to `target_ms`, running every task due on the way in due
    /// order.
    pub fn advance_to(&self, target_ms: u64) {
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let index = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due_ms <= target_ms)
                    .min_by_key(|(_, task)| (task.due_ms, task.id))
                    .map(|(index, _)| index);
                match index {
                    Some(index) => {
                        let task = state.pending.remove(index);
                        state.now_ms = task.due_ms;
                        Some(task.task)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now_ms = target_ms;
    }

    pub fn advance(&self, delta_ms: u64) {
        let target = self.now_ms() + delta_ms;
        self.advance_to(target);
    }
}
