use std::fmt;

pub const SECTION_ID_MAX_LEN: usize = 64;

fn is_section_id_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

/// Identifier of a page section, doubling as the DOM `id` and the `#fragment`
/// of its navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    pub fn parse(value: &str) -> Result<Self, SectionIdError> {
        if value.is_empty() {
            return Err(SectionIdError::Empty);
        }
        if value.len() > SECTION_ID_MAX_LEN {
            return Err(SectionIdError::TooLong {
                max: SECTION_ID_MAX_LEN,
                found: value.len(),
            });
        }
        for (index, ch) in value.chars().enumerate() {
            if !is_section_id_char(ch) {
                return Err(SectionIdError::InvalidCharacter { ch, index });
            }
        }
        Ok(Self(value.to_string()))
    }

    /// Accepts `#about` as well as `about`.
    pub fn from_fragment(fragment: &str) -> Result<Self, SectionIdError> {
        Self::parse(fragment.trim().trim_start_matches('#'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for SectionId {
    type Err = SectionIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionIdError {
    #[error("section id must not be empty")]
    Empty,
    #[error("section id must be at most {max} chars, got {found}")]
    TooLong { max: usize, found: usize },
    #[error("invalid character '{ch}' at position {index}")]
    InvalidCharacter { ch: char, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("section registry must contain at least one section")]
    Empty,
    #[error("section '{0}' registered twice")]
    Duplicate(SectionId),
    #[error(transparent)]
    InvalidId(#[from] SectionIdError),
}

/// Viewport-relative vertical span of a section, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub bottom: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Half-open: a point on the boundary belongs to the lower section.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom
    }
}

/// Sections in page order, top to bottom. The first entry is the default
/// active section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<SectionId>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<SectionId>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (index, id) in sections.iter().enumerate() {
            if sections[..index].contains(id) {
                return Err(RegistryError::Duplicate(id.clone()));
            }
        }
        Ok(Self { sections })
    }

    pub fn from_names<'a, I>(names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sections = names
            .into_iter()
            .map(SectionId::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sections)
    }

    pub fn first(&self) -> &SectionId {
        &self.sections[0]
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.sections.contains(id)
    }

    pub fn get(&self, name: &str) -> Option<&SectionId> {
        self.sections.iter().find(|id| id.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_bad_ids() {
        assert_eq!(SectionId::parse(""), Err(SectionIdError::Empty));
        assert_eq!(
            SectionId::parse("tech stack"),
            Err(SectionIdError::InvalidCharacter { ch: ' ', index: 4 })
        );
        let long = "a".repeat(SECTION_ID_MAX_LEN + 1);
        assert!(matches!(
            SectionId::parse(&long),
            Err(SectionIdError::TooLong { .. })
        ));
    }

    #[test]
    fn fragment_strips_hash() {
        let id = SectionId::from_fragment("#projects").unwrap();
        assert_eq!(id.as_str(), "projects");
        assert_eq!(id.href(), "#projects");
    }

    #[test]
    fn registry_rejects_duplicates_and_empty() {
        assert_eq!(
            SectionRegistry::from_names(["hero", "about", "hero"]),
            Err(RegistryError::Duplicate(SectionId::parse("hero").unwrap()))
        );
        assert_eq!(
            SectionRegistry::from_names(std::iter::empty()),
            Err(RegistryError::Empty)
        );
    }

    #[test]
    fn registry_keeps_page_order() {
        let registry = SectionRegistry::from_names(["hero", "about", "tech"]).unwrap();
        assert_eq!(registry.first().as_str(), "hero");
        let names: Vec<&str> = registry.iter().map(SectionId::as_str).collect();
        assert_eq!(names, ["hero", "about", "tech"]);
        assert!(registry.get("tech").is_some());
        assert!(registry.get("contact").is_none());
    }

    #[test]
    fn extent_is_half_open() {
        let extent = SectionExtent::new(800.0, 600.0);
        assert!(extent.contains(800.0));
        assert!(extent.contains(1399.9));
        assert!(!extent.contains(1400.0));
        assert_eq!(extent.height(), 600.0);
    }
}
