use yew_img_viewer::{
    GestureMode, GestureOutcome, Navigation, TouchSample, ViewerConfig, ViewerState, Viewport,
};

fn viewer(width: f64) -> ViewerState {
    let mut v = ViewerState::new(ViewerConfig::default());
    v.set_viewport(Viewport::new(width, 800.0));
    v
}

fn gesture(
    v: &mut ViewerState,
    from: (f64, f64),
    to: (f64, f64),
    start_ms: f64,
    end_ms: f64,
) -> GestureOutcome {
    v.touch_start(&[TouchSample::new(from.0, from.1, start_ms)]);
    if from != to {
        v.touch_move(TouchSample::new(to.0, to.1, end_ms));
    }
    v.touch_end(end_ms)
}

#[test]
fn small_quick_touches_never_navigate() {
    let mut v = viewer(400.0);
    let cases = [
        ((0.0, 0.0), 0.0),
        ((15.0, 15.0), 50.0),
        ((-15.0, 10.0), 30.0),
        ((8.0, -15.0), 49.0),
    ];
    let mut t = 0.0;
    for ((dx, dy), dt) in cases {
        t += 1000.0;
        let out = gesture(&mut v, (100.0, 100.0), (100.0 + dx, 100.0 + dy), t, t + dt);
        assert!(matches!(out, GestureOutcome::Tap), "{dx},{dy},{dt}: {out:?}");
        assert!(v.ledger().is_settled());
        assert_eq!(v.ledger().committed(), 0);
        assert!(!v.is_carousel_animating);
        assert_eq!(v.carousel_transition_end(), None);
    }
}

#[test]
fn double_tap_toggles_once_then_rearms() {
    let mut v = viewer(400.0);
    assert_eq!(gesture(&mut v, (50.0, 50.0), (50.0, 50.0), 0.0, 0.0), GestureOutcome::Tap);
    assert_eq!(gesture(&mut v, (50.0, 50.0), (50.0, 50.0), 150.0, 150.0), GestureOutcome::DoubleTap);
    assert_eq!(v.zoom_level, 5.0);
    assert_eq!(gesture(&mut v, (50.0, 50.0), (50.0, 50.0), 300.0, 300.0), GestureOutcome::Tap);
    assert_eq!(v.zoom_level, 5.0);
    assert_eq!(gesture(&mut v, (50.0, 50.0), (50.0, 50.0), 450.0, 450.0), GestureOutcome::DoubleTap);
    assert_eq!(v.zoom_level, 1.0);
    assert_eq!((v.pan_offset_x, v.pan_offset_y), (0.0, 0.0));
}

#[test]
fn flick_right_reveals_previous_at_any_width() {
    for width in [320.0, 400.0, 4000.0] {
        let mut v = viewer(width);
        let out = gesture(&mut v, (100.0, 100.0), (130.0, 100.0), 0.0, 100.0);
        assert_eq!(out, GestureOutcome::SwipeCommitted(Some(Navigation::Prev)));
        assert_eq!(v.ledger().pending(), v.ledger().committed() - 1);
    }
}

#[test]
fn drag_distance_threshold_is_half_the_viewport() {
    let mut v = viewer(400.0);
    let out = gesture(&mut v, (50.0, 100.0), (300.0, 100.0), 0.0, 800.0);
    assert_eq!(out, GestureOutcome::SwipeCommitted(Some(Navigation::Prev)));
    assert_eq!(v.ledger().pending(), -1);

    let mut v = viewer(400.0);
    let out = gesture(&mut v, (50.0, 100.0), (200.0, 100.0), 0.0, 800.0);
    assert_eq!(out, GestureOutcome::SwipeCommitted(None));
    assert_eq!(v.ledger().pending(), v.ledger().committed());
}

#[test]
fn reconciliation_notifies_exactly_once() {
    let mut v = viewer(400.0);
    gesture(&mut v, (300.0, 100.0), (50.0, 100.0), 0.0, 800.0);
    assert_eq!(v.ledger().pending(), 1);
    assert!(v.is_carousel_animating);

    let mut next_calls = 0;
    let mut prev_calls = 0;
    for _ in 0..3 {
        match v.carousel_transition_end() {
            Some(Navigation::Next) => next_calls += 1,
            Some(Navigation::Prev) => prev_calls += 1,
            None => {}
        }
    }
    assert_eq!((next_calls, prev_calls), (1, 0));
    assert_eq!(v.ledger().committed(), v.ledger().pending());
    assert!(!v.is_carousel_animating);
    assert_eq!(v.carousel_transform().x, -400.0);
}

#[test]
fn snap_back_fires_nothing() {
    let mut v = viewer(400.0);
    gesture(&mut v, (100.0, 100.0), (160.0, 100.0), 0.0, 900.0);
    assert!(v.is_carousel_animating);
    assert_eq!(v.carousel_transition_end(), None);
    assert_eq!(v.ledger().committed(), 0);
}

#[test]
fn pan_clamp_is_idempotent() {
    let mut v = viewer(400.0);
    // 800x800 natural fits as 400x400 with 200px bands top and bottom
    v.set_natural_size(800.0, 800.0);
    gesture(&mut v, (0.0, 0.0), (0.0, 0.0), 0.0, 0.0);
    gesture(&mut v, (0.0, 0.0), (0.0, 0.0), 100.0, 100.0);
    assert!(v.is_zoomed());
    v.image_transition_end();

    // max x = 400 * 4 / 2 = 800, max y = 400 * 4 / 2 - 200 = 600
    assert_eq!(v.touch_start(&[TouchSample::new(0.0, 0.0, 1000.0)]), GestureMode::Panning);
    v.touch_move(TouchSample::new(2000.0, -2000.0, 1200.0));
    assert_eq!(v.pan_offset_x, 2000.0);
    assert_eq!(v.touch_end(1300.0), GestureOutcome::PanEnded);
    assert_eq!((v.pan_offset_x, v.pan_offset_y), (800.0, -600.0));

    gesture(&mut v, (10.0, 10.0), (10.0, 10.0), 5000.0, 5000.0);
    assert_eq!((v.pan_offset_x, v.pan_offset_y), (800.0, -600.0));
    assert!(v.is_zoomed());
}
