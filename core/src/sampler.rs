use crate::section::{SectionExtent, SectionId, SectionRegistry};

/// Live layout geometry. Implementations must re-read the layout on every
/// call; extents are never cached across scrolls or resizes.
pub trait GeometrySource {
    fn viewport_height(&self) -> f64;

    /// `None` when the section is not mounted.
    fn section_extent(&self, id: &SectionId) -> Option<SectionExtent>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionSample {
    pub id: SectionId,
    pub extent: SectionExtent,
}

/// Samples every registered section in page order, skipping the ones the
/// source cannot find.
pub fn sample_sections<G>(registry: &SectionRegistry, source: &G) -> Vec<SectionSample>
where
    G: GeometrySource + ?Sized,
{
    registry
        .iter()
        .filter_map(|id| {
            source.section_extent(id).map(|extent| SectionSample {
                id: id.clone(),
                extent,
            })
        })
        .collect()
}
