//! Drag, release, interception and key handling driven through the mock
//! drag controller.

use std::cell::RefCell;
use std::rc::Rc;

use slideout::{
    ChildId, ChildSpec, DisallowInterceptPolicy, Dimension, DragState, DrawerEvent, HostEvent, Key,
    MeasureSpec, OpenState, PanelConfig, PanelContainer, PointerEvent, Subscription,
};
use slideout_test_utils::gestures::{drag, drag_and_hold, feed, pump_frames, relay_layout, tap};
use slideout_test_utils::{DragCall, MockDragController};

const PANEL: &str = "menu";
const CONTENT: &str = "main";

fn setup_with(config: PanelConfig) -> (PanelContainer, MockDragController) {
    let mock = MockDragController::new();
    let mut container = PanelContainer::new(config, Box::new(mock.clone()));
    container
        .add_child(ChildSpec::new(PANEL).panel().width(Dimension::Px(300)))
        .unwrap();
    container.add_child(ChildSpec::new(CONTENT).content()).unwrap();
    container
        .measure(MeasureSpec::exactly(1080), MeasureSpec::exactly(1920))
        .unwrap();
    container.layout();
    container.pop_events();
    (container, mock)
}

fn setup() -> (PanelContainer, MockDragController) {
    setup_with(PanelConfig::default())
}

fn record_states(container: &mut PanelContainer) -> Rc<RefCell<Vec<DragState>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    container.add_listener(Box::new(move |event: DrawerEvent| {
        if let DrawerEvent::StateChanged { state } = event {
            sink.borrow_mut().push(state);
        }
        Subscription::Keep
    }));
    log
}

#[test]
fn test_controller_configured_on_creation() {
    let (_container, mock) = setup_with(PanelConfig::default().with_density(2.0));
    assert_eq!(mock.tracked_edges(), slideout::EdgeFlags::LEFT);
    assert_eq!(mock.min_fling_velocity(), 800.0);
}

#[test]
fn test_slow_drag_past_threshold_settles_open() {
    let (mut container, _mock) = setup();

    feed(&mut container, &drag_and_hold((10.0, 500.0), (260.0, 500.0), 10, 0));
    assert_eq!(container.drawer_state(), DragState::Settling);
    let offset = container.panel_offset();
    assert!(offset > 0.9 && offset < 0.92, "offset was {offset}");

    pump_frames(&mut container, 100);
    container.layout();

    assert!(container.is_open());
    assert_eq!(container.drawer_state(), DragState::Idle);
    assert_eq!(container.find_content().unwrap().left(), 300);
    assert_eq!(container.find_panel().unwrap().left(), 0);
}

#[test]
fn test_slow_drag_below_threshold_settles_closed() {
    let (mut container, _mock) = setup();

    feed(&mut container, &drag_and_hold((10.0, 500.0), (110.0, 500.0), 4, 0));
    assert!(container.is_visible());

    pump_frames(&mut container, 100);
    container.layout();

    assert!(!container.is_visible());
    assert!(!container.is_open());
    assert_eq!(container.find_content().unwrap().left(), 0);
}

#[test]
fn test_fling_opens_from_short_drag() {
    let (mut container, mock) = setup();

    // 25px per 16ms is well above the minimum fling velocity.
    feed(&mut container, &drag((10.0, 500.0), (110.0, 500.0), 4, 0));
    assert_eq!(mock.count_settles(), 1);
    assert!(mock.calls().contains(&DragCall::SettleCapturedAt { left: 300, top: 0 }));

    pump_frames(&mut container, 100);
    assert!(container.is_open());
}

#[test]
fn test_drag_is_clamped_to_panel_width() {
    let (mut container, _mock) = setup();

    let mut events = drag_and_hold((10.0, 500.0), (900.0, 500.0), 10, 0);
    // Inspect before the release.
    events.truncate(events.len() - 1);
    feed(&mut container, &events);

    assert_eq!(container.find_content().unwrap().left(), 300);
    assert_eq!(container.panel_offset(), 1.0);
    assert_eq!(container.drawer_state(), DragState::Dragging);
}

#[test]
fn test_drag_state_sequence() {
    let (mut container, _mock) = setup();
    let states = record_states(&mut container);

    feed(&mut container, &drag_and_hold((10.0, 500.0), (260.0, 500.0), 10, 0));
    pump_frames(&mut container, 100);

    assert_eq!(
        *states.borrow(),
        vec![DragState::Dragging, DragState::Settling, DragState::Idle]
    );
}

#[test]
fn test_capture_mid_settle_takes_over() {
    let (mut container, _mock) = setup();
    let states = record_states(&mut container);
    let opened = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&opened);
    container.add_listener(Box::new(move |event: DrawerEvent| {
        if let DrawerEvent::Opened { .. } = event {
            *sink.borrow_mut() += 1;
        }
        Subscription::Keep
    }));

    container.open(true).unwrap();
    container.on_frame();
    relay_layout(&mut container);
    let left = container.find_content().unwrap().left();
    assert_eq!(left, 50);

    // Grab the moving content and pull it back towards closed.
    let from = (left as f32 + 10.0, 500.0);
    let to = (left as f32 - 20.0, 500.0);
    feed(&mut container, &drag_and_hold(from, to, 3, 100));
    assert_eq!(container.drawer_state(), DragState::Settling);
    assert_eq!(container.find_content().unwrap().left(), 20);

    pump_frames(&mut container, 100);
    container.layout();

    assert_eq!(
        *states.borrow(),
        vec![
            DragState::Settling,
            DragState::Dragging,
            DragState::Settling,
            DragState::Idle
        ]
    );
    assert_eq!(*opened.borrow(), 0);
    assert!(!container.is_open());
    assert_eq!(container.panel_offset(), 0.5);
    assert_eq!(container.find_content().unwrap().left(), 0);
    assert!(
        !container
            .find_panel()
            .unwrap()
            .slide()
            .open_state()
            .contains(OpenState::OPENING)
    );
}

#[test]
fn test_drag_cancels_child_touches_once() {
    let (mut container, _mock) = setup();

    let events = drag((10.0, 500.0), (110.0, 500.0), 4, 0);
    let mut cancels = 0;
    for event in &events {
        container.on_pointer_event(event);
        cancels += relay_layout(&mut container)
            .iter()
            .filter(|event| **event == HostEvent::CancelChildTouches)
            .count();
    }
    assert_eq!(cancels, 1);
}

#[test]
fn test_intercept_after_touch_slop() {
    let (mut container, _mock) = setup();

    assert!(!container.on_intercept_pointer(&PointerEvent::down(500.0, 500.0, 0)));
    // Within slop.
    assert!(!container.on_intercept_pointer(&PointerEvent::moved(505.0, 500.0, 16)));
    assert!(container.on_intercept_pointer(&PointerEvent::moved(530.0, 500.0, 32)));
    assert_eq!(container.drawer_state(), DragState::Dragging);
}

#[test]
fn test_vertical_move_is_not_intercepted() {
    let (mut container, _mock) = setup();

    assert!(!container.on_intercept_pointer(&PointerEvent::down(500.0, 500.0, 0)));
    assert!(!container.on_intercept_pointer(&PointerEvent::moved(505.0, 600.0, 16)));
    assert_eq!(container.drawer_state(), DragState::Idle);
}

#[test]
fn test_back_key_closes_visible_panel() {
    let (mut container, _mock) = setup();
    container
        .set_panel_offset(ChildId::new(PANEL), 0.6)
        .unwrap();
    container.layout();

    assert!(container.on_key_down(Key::Back).is_consumed());
    assert!(container.on_key_up(Key::Back).is_consumed());
    assert_eq!(container.drawer_state(), DragState::Settling);

    pump_frames(&mut container, 100);
    assert!(!container.is_visible());
}

#[test]
fn test_back_key_ignored_when_collapsed() {
    let (mut container, mock) = setup();
    mock.clear_calls();

    assert!(!container.on_key_down(Key::Back).is_consumed());
    assert!(!container.on_key_up(Key::Back).is_consumed());
    assert_eq!(mock.count_smooth_slides(), 0);
}

#[test]
fn test_other_keys_ignored() {
    let (mut container, _mock) = setup();
    container.open(false).unwrap();

    assert!(!container.on_key_down(Key::Other(42)).is_consumed());
    assert!(!container.on_key_up(Key::Other(42)).is_consumed());
    assert!(container.is_open());
}

#[test]
fn test_disallow_intercept_closes_panel() {
    let (mut container, _mock) = setup();
    container.open(false).unwrap();
    container.layout();
    container.pop_events();

    container.request_disallow_intercept(true);

    assert!(!container.is_open());
    assert!(container.is_intercept_disallowed());
    assert!(
        container
            .pop_events()
            .contains(&HostEvent::DisallowParentIntercept(true))
    );
}

#[test]
fn test_disallow_intercept_ignored_during_edge_touch() {
    let (mut container, _mock) = setup_with(
        PanelConfig::default().with_disallow_intercept(DisallowInterceptPolicy::UnlessEdgeTouched),
    );
    container.open(false).unwrap();
    container.layout();
    container.pop_events();

    container.on_intercept_pointer(&PointerEvent::down(5.0, 500.0, 0));
    container.request_disallow_intercept(true);

    assert!(container.is_open());
    assert!(
        !container
            .pop_events()
            .contains(&HostEvent::DisallowParentIntercept(true))
    );
}

#[test]
fn test_disallow_intercept_honored_away_from_edge() {
    let (mut container, _mock) = setup_with(
        PanelConfig::default().with_disallow_intercept(DisallowInterceptPolicy::UnlessEdgeTouched),
    );
    container.open(false).unwrap();
    container.layout();

    container.on_intercept_pointer(&PointerEvent::down(600.0, 500.0, 0));
    container.request_disallow_intercept(true);
    assert!(!container.is_open());
}

#[test]
fn test_tap_on_content_closes_when_enabled() {
    let (mut container, _mock) = setup_with(PanelConfig::default().with_tap_to_close(true));
    // Collapsed: nothing to close, the tap goes to the content.
    assert!(!container.on_intercept_pointer(&PointerEvent::down(600.0, 500.0, 0)));
    container.on_intercept_pointer(&PointerEvent::up(600.0, 500.0, 16));

    // No frame runs between the open and the tap.
    container.open(false).unwrap();
    container.layout();

    assert!(container.on_intercept_pointer(&PointerEvent::down(600.0, 500.0, 100)));
    feed(&mut container, &tap(600.0, 500.0, 100));
    pump_frames(&mut container, 100);

    assert!(!container.is_visible());
}

#[test]
fn test_tap_on_content_ignored_by_default() {
    let (mut container, _mock) = setup();
    container.open(false).unwrap();
    container.layout();
    container.on_frame();

    feed(&mut container, &tap(600.0, 500.0, 0));
    pump_frames(&mut container, 100);

    assert!(container.is_open());
}
