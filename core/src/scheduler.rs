/// Deferred one-shot callbacks on the UI thread.
///
/// Dropping the returned handle cancels the callback, the same contract as
/// `gloo::timers::callback::Timeout`.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}
