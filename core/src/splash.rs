use std::cell::RefCell;
use std::rc::Rc;

use crate::scheduler::Scheduler;

pub const DEFAULT_SPLASH_MIN_MS: u32 = 2_000;
pub const DEFAULT_SPLASH_MAX_WAIT_MS: u32 = 8_000;
pub const DEFAULT_CROSSFADE_MS: u32 = 500;
pub const PROGRESS_STEP: u8 = 5;
/// Progress never shows 100 while the load signal is still outstanding.
const PROGRESS_WAITING_CAP: u8 = 95;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SplashPhase {
    Idle,
    Counting,
    Settled,
    HandedOff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashStep {
    Waiting,
    /// Entered `Settled` with this event; call [`SplashSequencer::hand_off`].
    Settled,
    Done,
}

/// One-shot gate in front of the main content: settles once the minimum
/// duration has elapsed and the page has loaded, then hands off exactly once.
#[derive(Clone, Debug)]
pub struct SplashSequencer {
    phase: SplashPhase,
    elapsed_ready: bool,
    load_ready: bool,
    fallback_used: bool,
    started_at_ms: f64,
    min_duration_ms: u32,
    max_wait_ms: u32,
}

impl SplashSequencer {
    pub fn new(min_duration_ms: u32, max_wait_ms: u32) -> Self {
        Self {
            phase: SplashPhase::Idle,
            elapsed_ready: false,
            load_ready: false,
            fallback_used: false,
            started_at_ms: 0.0,
            min_duration_ms,
            max_wait_ms: max_wait_ms.max(min_duration_ms),
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn min_duration_ms(&self) -> u32 {
        self.min_duration_ms
    }

    pub fn max_wait_ms(&self) -> u32 {
        self.max_wait_ms
    }

    /// True when the load signal was substituted by the max-wait fallback.
    pub fn fallback_used(&self) -> bool {
        self.fallback_used
    }

    /// `already_loaded` is the synchronous readiness poll taken before the
    /// load listener is wired, so a load that completed earlier is not lost.
    pub fn start(&mut self, now_ms: f64, already_loaded: bool) -> SplashStep {
        if self.phase != SplashPhase::Idle {
            return self.step_for_repeat();
        }
        self.phase = SplashPhase::Counting;
        self.started_at_ms = now_ms;
        if already_loaded {
            self.load_ready = true;
        }
        self.advance()
    }

    /// Timer events only count once counting has started.
    pub fn min_duration_elapsed(&mut self) -> SplashStep {
        if self.phase == SplashPhase::Idle {
            return SplashStep::Waiting;
        }
        self.elapsed_ready = true;
        self.advance()
    }

    pub fn load_signal(&mut self) -> SplashStep {
        self.load_ready = true;
        self.advance()
    }

    pub fn max_wait_elapsed(&mut self) -> SplashStep {
        if self.phase == SplashPhase::Idle {
            return SplashStep::Waiting;
        }
        if !self.load_ready {
            self.load_ready = true;
            self.fallback_used = true;
        }
        self.advance()
    }

    /// `Settled -> HandedOff`. Returns `true` exactly once per sequencer.
    pub fn hand_off(&mut self) -> bool {
        if self.phase != SplashPhase::Settled {
            return false;
        }
        self.phase = SplashPhase::HandedOff;
        true
    }

    pub fn progress_percent(&self, now_ms: f64) -> u8 {
        match self.phase {
            SplashPhase::Idle => 0,
            SplashPhase::Settled | SplashPhase::HandedOff => 100,
            SplashPhase::Counting => {
                if self.min_duration_ms == 0 {
                    return PROGRESS_WAITING_CAP;
                }
                let elapsed = (now_ms - self.started_at_ms).max(0.0);
                let ratio = (elapsed / self.min_duration_ms as f64).min(1.0);
                let percent = (ratio * 100.0).floor() as u8;
                let stepped = percent - percent % PROGRESS_STEP;
                stepped.min(PROGRESS_WAITING_CAP)
            }
        }
    }

    fn advance(&mut self) -> SplashStep {
        match self.phase {
            SplashPhase::Idle => SplashStep::Waiting,
            SplashPhase::Counting => {
                if self.elapsed_ready && self.load_ready {
                    self.phase = SplashPhase::Settled;
                    SplashStep::Settled
                } else {
                    SplashStep::Waiting
                }
            }
            SplashPhase::Settled | SplashPhase::HandedOff => self.step_for_repeat(),
        }
    }

    fn step_for_repeat(&self) -> SplashStep {
        match self.phase {
            SplashPhase::HandedOff => SplashStep::Done,
            _ => SplashStep::Waiting,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handoff {
    pub fallback_used: bool,
}

pub type HandoffCallback = Box<dyn FnOnce(Handoff)>;

/// Wires a [`SplashSequencer`] to the minimum-duration and max-wait timers
/// and invokes the completion callback at most once. The load signal is fed
/// in by the host through [`SplashDriver::load_signal`].
pub struct SplashDriver<S: Scheduler> {
    sequencer: Rc<RefCell<SplashSequencer>>,
    on_complete: Rc<RefCell<Option<HandoffCallback>>>,
    scheduler: S,
    timers: RefCell<Vec<S::Handle>>,
}

impl<S: Scheduler> SplashDriver<S> {
    pub fn new(sequencer: SplashSequencer, scheduler: S, on_complete: HandoffCallback) -> Self {
        Self {
            sequencer: Rc::new(RefCell::new(sequencer)),
            on_complete: Rc::new(RefCell::new(Some(on_complete))),
            scheduler,
            timers: RefCell::new(Vec::new()),
        }
    }

    pub fn start(&self, now_ms: f64, already_loaded: bool) {
        let (step, min_ms, max_ms) = {
            let mut sequencer = self.sequencer.borrow_mut();
            if sequencer.phase() != SplashPhase::Idle {
                return;
            }
            let step = sequencer.start(now_ms, already_loaded);
            (step, sequencer.min_duration_ms(), sequencer.max_wait_ms())
        };
        let mut timers = Vec::with_capacity(2);
        let sequencer = Rc::clone(&self.sequencer);
        let on_complete = Rc::clone(&self.on_complete);
        timers.push(self.scheduler.schedule(
            min_ms,
            Box::new(move || {
                let step = sequencer.borrow_mut().min_duration_elapsed();
                deliver(&sequencer, &on_complete, step);
            }),
        ));
        if !already_loaded {
            let sequencer = Rc::clone(&self.sequencer);
            let on_complete = Rc::clone(&self.on_complete);
            timers.push(self.scheduler.schedule(
                max_ms,
                Box::new(move || {
                    let step = sequencer.borrow_mut().max_wait_elapsed();
                    deliver(&sequencer, &on_complete, step);
                }),
            ));
        }
        *self.timers.borrow_mut() = timers;
        deliver(&self.sequencer, &self.on_complete, step);
    }

    pub fn load_signal(&self) {
        let step = self.sequencer.borrow_mut().load_signal();
        deliver(&self.sequencer, &self.on_complete, step);
    }

    pub fn phase(&self) -> SplashPhase {
        self.sequencer.borrow().phase()
    }

    pub fn progress_percent(&self, now_ms: f64) -> u8 {
        self.sequencer.borrow().progress_percent(now_ms)
    }

    /// Drops pending timers; the callback will not run afterwards.
    pub fn cancel(&self) {
        let timers = std::mem::take(&mut *self.timers.borrow_mut());
        drop(timers);
        self.on_complete.borrow_mut().take();
    }
}

fn deliver(
    sequencer: &RefCell<SplashSequencer>,
    on_complete: &RefCell<Option<HandoffCallback>>,
    step: SplashStep,
) {
    if step != SplashStep::Settled {
        return;
    }
    let handoff = {
        let mut sequencer = sequencer.borrow_mut();
        if !sequencer.hand_off() {
            return;
        }
        Handoff {
            fallback_used: sequencer.fallback_used(),
        }
    };
    let callback = on_complete.borrow_mut().take();
    if let Some(callback) = callback {
        callback(handoff);
    }
}

/// Which top-level view is mounted. Only moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViewStage {
    Splash,
    /// Splash exiting while the content enters.
    CrossFade,
    Content,
}

impl ViewStage {
    pub fn initial(skip_splash: bool) -> Self {
        if skip_splash {
            ViewStage::Content
        } else {
            ViewStage::Splash
        }
    }

    pub fn next(self) -> Self {
        match self {
            ViewStage::Splash => ViewStage::CrossFade,
            ViewStage::CrossFade | ViewStage::Content => ViewStage::Content,
        }
    }

    pub fn shows_splash(self) -> bool {
        matches!(self, ViewStage::Splash | ViewStage::CrossFade)
    }

    pub fn shows_content(self) -> bool {
        matches!(self, ViewStage::CrossFade | ViewStage::Content)
    }
}
