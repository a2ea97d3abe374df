use web_sys::{Document, Window};

use folio_core::{GeometrySource, SectionExtent, SectionId};

/// Live DOM geometry. Every call re-reads layout.
pub(crate) struct DomGeometry {
    window: Window,
    document: Document,
}

impl DomGeometry {
    pub(crate) fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl GeometrySource for DomGeometry {
    fn viewport_height(&self) -> f64 {
        let client = self
            .document
            .document_element()
            .map(|root| root.client_height() as f64)
            .unwrap_or(0.0);
        let inner = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        client.max(inner)
    }

    fn section_extent(&self, id: &SectionId) -> Option<SectionExtent> {
        let element = self.document.get_element_by_id(id.as_str())?;
        let rect = element.get_bounding_client_rect();
        Some(SectionExtent::new(rect.top(), rect.height()))
    }
}

pub(crate) fn document_loaded() -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    document.ready_state() == "complete"
}

pub(crate) fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let classes = body.class_list();
    let _ = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}
