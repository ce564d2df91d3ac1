//! Render sink seam between the tracker and the overlay.

use blueprint_types::ElementRef;

/// Receives render requests from the target tracker.
///
/// `show` positions the overlay artifacts around `element` and makes them
/// visible; `hide` hides everything and is otherwise inert.
///
/// Implementations must tolerate redundant calls: `show` for the element
/// already on display and `hide` while hidden are both no-ops. The
/// tracker deduplicates repeated hovers, but lock acquisition and mode
/// flips can still double up requests.
pub trait Presenter {
    fn show(&mut self, element: &ElementRef);
    fn hide(&mut self);
}
