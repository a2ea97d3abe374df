use gloo::timers::callback::Timeout;

use folio_core::Scheduler;

/// Browser timers. The `Timeout` handle clears the timer when dropped.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}
