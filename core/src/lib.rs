pub mod config;
pub mod contact;
pub mod guard;
pub mod menu;
pub mod navigator;
pub mod resolver;
pub mod sampler;
pub mod scheduler;
pub mod section;
pub mod splash;
pub mod store;
pub mod theme;

pub use config::{ConfigError, SiteConfig};
pub use contact::{
    ContactDraft, ContactError, ContactField, ContactMessage, ContactRelay, ContactSubmission,
    SubmitStatus,
};
pub use guard::{GuardTicket, TransitionGuard};
pub use menu::{MenuEvent, MenuState};
pub use navigator::{
    NavigationError, Navigator, ScrollSpy, SyncOutcome, DEFAULT_SETTLE_DELAY_MS,
};
pub use resolver::{resolve_active, ReferencePoint};
pub use sampler::{sample_sections, GeometrySource, SectionSample};
pub use scheduler::Scheduler;
pub use section::{
    RegistryError, SectionExtent, SectionId, SectionIdError, SectionRegistry, SECTION_ID_MAX_LEN,
};
pub use splash::{
    Handoff, HandoffCallback, SplashDriver, SplashPhase, SplashSequencer, SplashStep, ViewStage,
    DEFAULT_CROSSFADE_MS, DEFAULT_SPLASH_MAX_WAIT_MS, DEFAULT_SPLASH_MIN_MS,
};
pub use store::{ActivationState, ActivationStore, Subscription};
pub use theme::{ThemeMode, THEME_STORAGE_KEY};
