use std::rc::Rc;

use folio_core::{
    ActivationStore, GeometrySource, NavigationError, Navigator, RegistryError, ScrollSpy,
    SectionId, SiteConfig, SyncOutcome,
};

use crate::content;
use crate::timers::GlooScheduler;

/// Section tracking state shared through the component tree.
#[derive(Clone)]
pub(crate) struct PageRuntime {
    navigator: Rc<Navigator<GlooScheduler>>,
}

impl PartialEq for PageRuntime {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.navigator, &other.navigator)
    }
}

impl PageRuntime {
    pub(crate) fn new(config: &SiteConfig) -> Result<Self, RegistryError> {
        let registry = content::section_registry()?;
        let spy = ScrollSpy::new(registry, config.reference);
        let navigator = Navigator::new(spy, GlooScheduler, config.settle_delay_ms);
        Ok(Self {
            navigator: Rc::new(navigator),
        })
    }

    pub(crate) fn store(&self) -> &ActivationStore {
        self.navigator.store()
    }

    pub(crate) fn sync<G>(&self, geometry: &G)
    where
        G: GeometrySource + ?Sized,
    {
        match self.navigator.sync(geometry) {
            SyncOutcome::Activated(id) => {
                gloo::console::log!("section in view:", id.as_str());
            }
            SyncOutcome::Unchanged | SyncOutcome::Suppressed(_) | SyncOutcome::NoMatch => {}
        }
    }

    pub(crate) fn navigate(&self, section: &str) -> Result<(), NavigationError> {
        let target = SectionId::from_fragment(section)?;
        self.navigator.navigate(&target)?;
        Ok(())
    }

    pub(crate) fn teardown(&self) {
        self.navigator.teardown();
    }
}
