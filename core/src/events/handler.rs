//! Signal handler seam between the host binding and the tracker.

use super::PointerSignal;

/// What the host binding should do with the native click it just delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Let the click through to the page: default action and any other
    /// listeners run normally.
    PassThrough,
    /// Cancel the default action and stop propagation, including to
    /// remaining handlers on the same element (link navigation and
    /// sibling listeners must not fire).
    Suppress,
}

/// Consumer of pointer signals.
///
/// Handling is synchronous and single-threaded: each call completes its
/// full transition before returning. The returned [`ClickAction`] applies
/// to the click signal just handled; non-click signals always report
/// [`ClickAction::PassThrough`].
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &PointerSignal) -> ClickAction;

    /// Handle a batch in dispatch order, discarding click dispositions.
    /// Useful for replay in tests; live hosts handle one signal per event
    /// and act on the returned disposition.
    fn handle_signals(&mut self, signals: &[PointerSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
