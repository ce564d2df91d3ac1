pub mod handler;
pub mod signal;

pub use handler::{ClickAction, SignalHandler};
pub use signal::PointerSignal;
