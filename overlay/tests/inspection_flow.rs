//! End-to-end flow: mode signal → target tracker → overlay presenter.
//!
//! Wires the pieces together the way a host binding does: the tracker
//! owns the presenter, and the mode signal feeds it `ModeChanged` through
//! a subscription.

use std::cell::RefCell;
use std::rc::Rc;

use blueprint_core::{ClickAction, ModeSignal, PointerSignal, SignalHandler, TargetTracker};
use blueprint_overlay::OverlayPresenter;
use blueprint_types::{ElementBounds, ElementId, ElementRef, TagKind, ViewportSize};

type SharedTracker = Rc<RefCell<TargetTracker<OverlayPresenter>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Build the full pipeline: an off-mode signal wired to a fresh tracker.
fn pipeline() -> (ModeSignal, SharedTracker) {
    init_tracing();

    let presenter = OverlayPresenter::new(ViewportSize::new(1280.0, 720.0));
    let mut mode = ModeSignal::ephemeral(false);
    let tracker = Rc::new(RefCell::new(TargetTracker::new(presenter, mode.is_active())));

    let sink = Rc::clone(&tracker);
    mode.subscribe(move |active| {
        sink.borrow_mut()
            .handle_signal(&PointerSignal::ModeChanged { active });
    });

    (mode, tracker)
}

fn save_button() -> ElementRef {
    ElementRef::new(ElementId(7), TagKind::from_name("button"))
        .with_dom_id("save")
        .with_bounds(ElementBounds::new(100.0, 40.0, 320.0, 48.0))
}

fn hover(tracker: &SharedTracker, element: &ElementRef, ts: u64) {
    tracker.borrow_mut().handle_signal(&PointerSignal::Hover {
        element: element.clone(),
        timestamp_ms: ts,
    });
}

fn click(tracker: &SharedTracker, element: &ElementRef, ts: u64) -> ClickAction {
    tracker.borrow_mut().handle_signal(&PointerSignal::Click {
        element: element.clone(),
        timestamp_ms: ts,
    })
}

#[test]
fn inspection_renders_frame_only_while_mode_on() {
    let (mut mode, tracker) = pipeline();
    let target = save_button();

    // Off: hover renders nothing
    hover(&tracker, &target, 1000);
    assert!(!tracker.borrow().presenter().is_visible());

    mode.set_active(true).unwrap();
    hover(&tracker, &target, 2000);
    {
        let tracker = tracker.borrow();
        let frame = tracker.presenter().frame().cloned().expect("frame visible");
        assert_eq!(frame.label.text, "button#save");
        assert_eq!(frame.metrics.text, "320px × 48px");
        assert_eq!(frame.crosshair.center_x, 640.0);
    }

    // Flipping mode off tears the overlay down
    mode.set_active(false).unwrap();
    assert!(!tracker.borrow().presenter().is_visible());
}

#[test]
fn tap_locks_then_second_tap_reaches_page() {
    let (mut mode, tracker) = pipeline();
    let target = save_button();
    mode.set_active(true).unwrap();

    // Touch gesture: synthetic hover then click 40ms later
    hover(&tracker, &target, 1000);
    assert_eq!(click(&tracker, &target, 1040), ClickAction::Suppress);
    assert!(tracker.borrow().presenter().is_visible());

    // Second tap interacts with the page natively
    assert_eq!(click(&tracker, &target, 2500), ClickAction::PassThrough);
}

#[test]
fn body_click_dismisses_inspection() {
    let (mut mode, tracker) = pipeline();
    let target = save_button();
    let body = ElementRef::new(ElementId(2), TagKind::from_name("body"))
        .with_bounds(ElementBounds::new(0.0, 0.0, 1280.0, 720.0));
    mode.set_active(true).unwrap();

    hover(&tracker, &target, 1000);
    click(&tracker, &target, 1040);
    assert!(tracker.borrow().presenter().is_visible());

    assert_eq!(click(&tracker, &body, 3000), ClickAction::PassThrough);
    assert!(!tracker.borrow().presenter().is_visible());
    assert_eq!(tracker.borrow().confirmed_target(), None);
}
