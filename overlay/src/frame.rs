//! Placed overlay artifacts for one inspected element.
//!
//! Text formatting is delegated to `blueprint_types::formatting` for
//! consistency with any host-side mirror.

use blueprint_types::formatting::{element_label, format_metrics};
use blueprint_types::{ElementBounds, ElementRef, ViewportSize};

/// Vertical offset of the label row above the highlight box, pixels.
pub const LABEL_OFFSET: f32 = 20.0;

/// Gap between the box bottom and the metrics readout, pixels.
pub const METRICS_GAP: f32 = 4.0;

/// A positioned text artifact, anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextArtifact {
    pub text: String,
    pub left: f32,
    pub top: f32,
}

/// Viewport-centered hairlines shown alongside the highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    /// x position of the vertical hairline.
    pub center_x: f32,
    /// y position of the horizontal hairline.
    pub center_y: f32,
}

/// Everything the host needs to paint the overlay for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    /// Highlight box, matching the element bounds.
    pub box_rect: ElementBounds,
    /// Label row above the box, left-aligned with it.
    pub label: TextArtifact,
    /// Size readout below the box.
    pub metrics: TextArtifact,
    pub crosshair: Crosshair,
}

impl OverlayFrame {
    /// Lay out all artifacts around `element` for the given viewport.
    pub fn for_element(element: &ElementRef, viewport: ViewportSize) -> Self {
        let bounds = element.bounds;
        Self {
            box_rect: bounds,
            label: TextArtifact {
                text: element_label(element),
                left: bounds.left,
                top: bounds.top - LABEL_OFFSET,
            },
            metrics: TextArtifact {
                text: format_metrics(bounds.width, bounds.height),
                left: bounds.left,
                top: bounds.bottom() + METRICS_GAP,
            },
            crosshair: Crosshair {
                center_x: viewport.width / 2.0,
                center_y: viewport.height / 2.0,
            },
        }
    }
}
