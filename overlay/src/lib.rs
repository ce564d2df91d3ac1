//! Overlay presentation for the blueprint inspector.
//!
//! Pure geometry: turns the inspected element into the placed artifacts a
//! host renderer paints (highlight box, label row, metrics readout,
//! crosshair). No drawing happens here; the host owns the surface and
//! repaints whenever the presenter's frame changes.

pub mod frame;
pub mod presenter;

pub use frame::{Crosshair, OverlayFrame, TextArtifact};
pub use presenter::OverlayPresenter;
