//! Presenter backed by [`OverlayFrame`] layout.

use tracing::debug;

use blueprint_core::Presenter;
use blueprint_types::{ElementId, ElementRef, ViewportSize};

use crate::frame::OverlayFrame;

/// Computes and holds the frame for the currently inspected element.
///
/// `show` is deduplicated by element identity, so redundant requests from
/// the tracker are safe; `hide` while hidden is inert.
#[derive(Debug)]
pub struct OverlayPresenter {
    viewport: ViewportSize,
    active: Option<ElementId>,
    frame: Option<OverlayFrame>,
}

impl OverlayPresenter {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            active: None,
            frame: None,
        }
    }

    /// Track a viewport resize. Applies from the next `show`; a resize
    /// generally invalidates element bounds too, so hosts re-dispatch the
    /// hover after relayout.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    pub fn is_visible(&self) -> bool {
        self.frame.is_some()
    }

    /// The frame to paint, when visible.
    pub fn frame(&self) -> Option<&OverlayFrame> {
        self.frame.as_ref()
    }
}

impl Presenter for OverlayPresenter {
    fn show(&mut self, element: &ElementRef) {
        if self.active == Some(element.id) {
            return;
        }
        debug!(element = element.id.0, "lay out overlay frame");
        self.frame = Some(OverlayFrame::for_element(element, self.viewport));
        self.active = Some(element.id);
    }

    fn hide(&mut self) {
        self.frame = None;
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_types::{ElementBounds, TagKind};

    fn presenter() -> OverlayPresenter {
        OverlayPresenter::new(ViewportSize::new(800.0, 600.0))
    }

    fn el(id: u64) -> ElementRef {
        ElementRef::new(ElementId(id), TagKind::from_name("div"))
            .with_bounds(ElementBounds::new(10.0, 10.0, 50.0, 20.0))
    }

    #[test]
    fn test_show_and_hide() {
        let mut presenter = presenter();
        assert!(!presenter.is_visible());

        presenter.show(&el(1));
        assert!(presenter.is_visible());
        assert!(presenter.frame().is_some());

        presenter.hide();
        assert!(!presenter.is_visible());
        assert!(presenter.frame().is_none());

        // Redundant hide stays inert
        presenter.hide();
        assert!(!presenter.is_visible());
    }

    #[test]
    fn test_redundant_show_is_noop() {
        let mut presenter = presenter();
        presenter.show(&el(1));
        let first = presenter.frame().cloned();

        presenter.show(&el(1));
        assert_eq!(presenter.frame().cloned(), first);
    }

    #[test]
    fn test_show_after_hide_rebuilds_frame() {
        let mut presenter = presenter();
        presenter.show(&el(1));
        presenter.hide();

        presenter.show(&el(1));
        assert!(presenter.is_visible());
    }
}
