use serde::{Deserialize, Serialize};

use crate::sampler::SectionSample;
use crate::section::SectionId;

pub const SCROLL_HANDLER_OFFSET_PX: f64 = 300.0;

/// Viewport-relative line a section has to cover to become active.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferencePoint {
    /// Vertical center of the viewport, raised by `lead` pixels so a section
    /// activates slightly before it reaches dead center.
    ViewportCenter {
        #[serde(default)]
        lead: f64,
    },
    /// Fixed distance from the top of the viewport.
    FromTop { offset: f64 },
}

impl Default for ReferencePoint {
    fn default() -> Self {
        ReferencePoint::ViewportCenter { lead: 0.0 }
    }
}

impl ReferencePoint {
    pub fn scroll_handler() -> Self {
        ReferencePoint::FromTop {
            offset: SCROLL_HANDLER_OFFSET_PX,
        }
    }

    pub fn resolve(&self, viewport_height: f64) -> f64 {
        match *self {
            ReferencePoint::ViewportCenter { lead } => viewport_height * 0.5 - lead,
            ReferencePoint::FromTop { offset } => offset,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            ReferencePoint::ViewportCenter { lead } => lead.is_finite(),
            ReferencePoint::FromTop { offset } => offset.is_finite(),
        }
    }
}

/// First sample in page order whose extent contains the reference line.
/// `None` means the caller keeps whatever was active before.
pub fn resolve_active(
    samples: &[SectionSample],
    viewport_height: f64,
    reference: ReferencePoint,
) -> Option<&SectionId> {
    let line = reference.resolve(viewport_height);
    samples
        .iter()
        .find(|sample| sample.extent.contains(line))
        .map(|sample| &sample.id)
}
