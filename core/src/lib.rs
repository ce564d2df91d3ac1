//! Core targeting logic for the blueprint inspection overlay.
//!
//! Consumes pointer signals from a host event binding, decides which
//! single element is currently inspected, and drives a render sink. The
//! overlay geometry itself lives in `blueprint-overlay`; this crate is the
//! decision layer: the ignore-filter, the hover/tap disambiguation, and
//! the verbose-mode flag.

pub mod events;
pub mod filter;
pub mod mode;
pub mod presenter;
pub mod tracker;


// Re-exports for convenience
pub use events::{ClickAction, PointerSignal, SignalHandler};
pub use filter::IgnoreFilter;
pub use mode::{ModeError, ModeSignal};
pub use presenter::Presenter;
pub use tracker::{DEFAULT_TAP_WINDOW, TargetTracker, TrackerState};
