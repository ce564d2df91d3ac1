//! Target-tracking state machine.
//!
//! Consumes pointer signals, decides which single element is inspected,
//! and drives a [`Presenter`]. Three states:
//! - `Idle`: nothing shown, nothing locked
//! - `Hovering`: an element is shown, none locked
//! - `Locked`: a click/tap confirmed the shown element
//!
//! The machine reconciles desktop hover-then-click inspection with touch
//! taps, where the synthetic hover and the click arrive nearly
//! simultaneously for the same target: a click within the tap window of
//! the most recent hover is a first tap meant to inspect, not to
//! activate.

use std::time::Duration;

use tracing::debug;

use blueprint_types::{ElementId, ElementRef};

use crate::events::{ClickAction, PointerSignal, SignalHandler};
use crate::filter::IgnoreFilter;
use crate::presenter::Presenter;

/// Default classification window separating a touch tap (synthetic hover
/// immediately before the click) from a deliberate pointer click.
pub const DEFAULT_TAP_WINDOW: Duration = Duration::from_millis(100);

/// Observable state of the tracker, derived from the target fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Hovering,
    Locked,
}

/// The element-targeting state machine.
///
/// One instance per page/session, owned by the host binding. All handling
/// runs synchronously inside the host's event dispatch. The host must
/// deliver the hover of a gesture before its click (see
/// [`PointerSignal`]) and honor the returned [`ClickAction`] by
/// cancelling the native click when told to.
#[derive(Debug)]
pub struct TargetTracker<P> {
    presenter: P,
    filter: IgnoreFilter,
    tap_window: Duration,

    /// Whether verbose mode is on; updated by `ModeChanged` signals.
    mode_active: bool,

    /// Mirrors the presenter: the last element passed to `show`, or none
    /// while hidden.
    active_target: Option<ElementId>,
    /// Element locked by a click/tap. Cleared only by a dismissing click
    /// or mode-off, never by hovering away.
    confirmed_target: Option<ElementId>,
    /// Most recent hover, host milliseconds. Recorded even for ignored
    /// elements: the tap heuristic measures against whatever hover the
    /// host fired for the same gesture.
    last_hover_ms: Option<u64>,
}

impl<P: Presenter> TargetTracker<P> {
    pub fn new(presenter: P, mode_active: bool) -> Self {
        Self::with_filter(presenter, mode_active, IgnoreFilter::new())
    }

    pub fn with_filter(presenter: P, mode_active: bool, filter: IgnoreFilter) -> Self {
        Self {
            presenter,
            filter,
            tap_window: DEFAULT_TAP_WINDOW,
            mode_active,
            active_target: None,
            confirmed_target: None,
            last_hover_ms: None,
        }
    }

    /// Override the tap classification window (deterministic tests,
    /// unusual hosts).
    pub fn with_tap_window(mut self, window: Duration) -> Self {
        self.tap_window = window;
        self
    }

    /// Display state. A lock can briefly outlive the display after a
    /// hover onto the root or body; it still blocks until dismissed.
    pub fn state(&self) -> TrackerState {
        match (self.active_target, self.confirmed_target) {
            (Some(active), Some(confirmed)) if active == confirmed => TrackerState::Locked,
            (Some(_), _) => TrackerState::Hovering,
            (None, _) => TrackerState::Idle,
        }
    }

    /// The element currently rendered, if any.
    pub fn active_target(&self) -> Option<ElementId> {
        self.active_target
    }

    /// The element locked by a click/tap, if any.
    pub fn confirmed_target(&self) -> Option<ElementId> {
        self.confirmed_target
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn handle_hover(&mut self, element: &ElementRef, timestamp_ms: u64) {
        if !self.mode_active {
            return;
        }

        // Recorded before filtering: the next click measures its tap gap
        // against this hover even when the hover landed on an ignored
        // element.
        self.last_hover_ms = Some(timestamp_ms);

        if self.filter.is_ignored(element) {
            if self.filter.is_void(element) {
                // Pointer left every real target. Drop the display; any
                // lock stays until a click dismisses it.
                self.hide_display();
            }
            // Filtered wrappers keep the current display, so crossing
            // from a target onto its container does not flicker.
            return;
        }

        if self.active_target == Some(element.id) {
            return;
        }

        debug!(element = element.id.0, "hover target");
        self.presenter.show(element);
        self.active_target = Some(element.id);
    }

    fn handle_click(&mut self, element: &ElementRef, timestamp_ms: u64) -> ClickAction {
        if !self.mode_active {
            return ClickAction::PassThrough;
        }

        // Re-tap on the locked element: let its native behavior through.
        if self.confirmed_target == Some(element.id) {
            return ClickAction::PassThrough;
        }

        // A click on a filtered element dismisses the inspection.
        if self.filter.is_ignored(element) {
            debug!("dismiss inspection");
            self.hide_display();
            self.confirmed_target = None;
            return ClickAction::PassThrough;
        }

        let tap_gap_ms = self
            .last_hover_ms
            .map(|hover_ms| timestamp_ms.saturating_sub(hover_ms));
        let is_tap = tap_gap_ms.is_some_and(|gap| gap < self.tap_window.as_millis() as u64);

        // A quick hover-then-click pair is a touch tap meant to inspect,
        // and a click elsewhere while locked moves the lock. A plain
        // desktop click on a merely hovered element stays native.
        if is_tap || self.confirmed_target.is_some() {
            debug!(element = element.id.0, gap_ms = ?tap_gap_ms, "lock target");
            self.presenter.show(element);
            self.active_target = Some(element.id);
            self.confirmed_target = Some(element.id);
            return ClickAction::Suppress;
        }

        ClickAction::PassThrough
    }

    fn handle_mode_changed(&mut self, active: bool) {
        self.mode_active = active;
        if !active {
            debug!("mode off, clearing inspection");
            self.hide_display();
            // Re-enabling starts clean
            self.confirmed_target = None;
        }
    }

    fn hide_display(&mut self) {
        self.presenter.hide();
        self.active_target = None;
    }
}

impl<P: Presenter> SignalHandler for TargetTracker<P> {
    fn handle_signal(&mut self, signal: &PointerSignal) -> ClickAction {
        match signal {
            PointerSignal::Hover {
                element,
                timestamp_ms,
            } => {
                self.handle_hover(element, *timestamp_ms);
                ClickAction::PassThrough
            }
            PointerSignal::Click {
                element,
                timestamp_ms,
            } => self.handle_click(element, *timestamp_ms),
            PointerSignal::ModeChanged { active } => {
                self.handle_mode_changed(*active);
                ClickAction::PassThrough
            }
        }
    }
}
