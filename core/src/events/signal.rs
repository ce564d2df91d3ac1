//! Pointer signals delivered by the host event binding.

use blueprint_types::ElementRef;

/// One signal per host event, in dispatch order.
///
/// The host binding must deliver the hover of a gesture before its click
/// (hover handlers registered in the bubble phase, click in the capture
/// phase guarantees this even across nested elements); the tap/click
/// disambiguation measures the gap between exactly those two signals.
#[derive(Debug, Clone)]
pub enum PointerSignal {
    /// Pointer moved onto an element, including the synthetic hover a
    /// touch tap fires immediately before its click.
    Hover {
        element: ElementRef,
        /// Host monotonic clock, milliseconds.
        timestamp_ms: u64,
    },

    /// Click or tap on an element.
    Click {
        element: ElementRef,
        timestamp_ms: u64,
    },

    /// Verbose mode flipped; carries the new state.
    ModeChanged { active: bool },
}
