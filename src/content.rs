use folio_core::{RegistryError, SectionRegistry};

pub(crate) const SITE_TITLE: &str = "Portfolio";
pub(crate) const CONTACT_EMAIL: &str = "hello@example.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NavItem {
    pub(crate) section: &'static str,
    pub(crate) label: &'static str,
}

/// Page order, top to bottom. Also the registration order for section
/// tracking.
pub(crate) const NAV_ITEMS: &[NavItem] = &[
    NavItem { section: "hero", label: "Home" },
    NavItem { section: "about", label: "About" },
    NavItem { section: "tech", label: "Tech" },
    NavItem { section: "projects", label: "Projects" },
    NavItem { section: "contact", label: "Contact" },
];

pub(crate) const SKILLS: &[&str] = &[
    "Frontend development",
    "Backend services",
    "UI design",
    "Testing",
];

pub(crate) const TECHNOLOGIES: &[&str] = &["Rust", "WebAssembly", "TypeScript", "PostgreSQL", "Docker"];

#[derive(Clone, Copy, Debug)]
pub(crate) struct Project {
    pub(crate) title: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) tags: &'static [&'static str],
    pub(crate) url: &'static str,
}

pub(crate) const PROJECTS: &[Project] = &[
    Project {
        title: "Realtime dashboard",
        summary: "Live metrics view fed over websockets.",
        tags: &["Rust", "WebAssembly"],
        url: "https://example.com/dashboard",
    },
    Project {
        title: "Storefront",
        summary: "Small shop with cart, checkout and an admin area.",
        tags: &["TypeScript", "PostgreSQL"],
        url: "https://example.com/store",
    },
];

pub(crate) fn section_registry() -> Result<SectionRegistry, RegistryError> {
    SectionRegistry::from_names(NAV_ITEMS.iter().map(|item| item.section))
}
