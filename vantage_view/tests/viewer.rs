// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests for the `vantage_view` crate.
//!
//! These drive the [`Viewer`] through whole interactions — gesture begin to
//! gesture end, with animated corrections ticked to completion — and check
//! the transform state and the notification log against the behavior the
//! viewer promises.

use kurbo::{Point, Rect, Size, Vec2};
use vantage_bounds::Margins;
use vantage_gesture::{PointerId, PointerSample};
use vantage_view::{DisplayMode, SnapshotValue, ViewEvent, Viewer};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

fn viewer_with_content(size: Size) -> Viewer {
    let mut viewer = Viewer::new(VIEWPORT);
    viewer.set_content_size(size);
    viewer
}

/// Ticks every in-flight animation to completion, in the recommended order.
fn finish_animations(viewer: &mut Viewer) {
    let animations: Vec<_> = viewer.animations().collect();
    for anim in animations {
        viewer.animation_tick(anim.id, 0.5);
        viewer.animation_tick(anim.id, 1.0);
    }
}

fn count(events: &[ViewEvent], needle: ViewEvent) -> usize {
    events.iter().filter(|e| **e == needle).count()
}

#[test]
fn double_tap_ladder_climbs_and_returns_home() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));
    assert!(viewer.config_mut().set_min_scale(1.0));
    assert!(viewer.config_mut().set_max_scale(10.0));
    assert!(viewer.config_mut().set_scale_jump(3.0));

    let mut scales = Vec::new();
    for _ in 0..3 {
        viewer.on_double_tap(None);
        finish_animations(&mut viewer);
        scales.push(viewer.delta().scale);
    }
    assert_eq!(scales, vec![4.0, 7.0, 10.0]);

    // Rough the pose up so the return leg has something to undo: drag the
    // (now overflowing) content and rotate it with two fingers.
    viewer.on_scroll(Vec2::new(40.0, -25.0), 1);
    viewer.on_pointer_down(PointerId(1), Point::new(300.0, 300.0));
    viewer.on_pointer_down(PointerId(2), Point::new(500.0, 300.0));
    viewer.on_pointer_move(&[
        PointerSample::new(PointerId(1), Point::new(300.0, 300.0)),
        PointerSample::new(PointerId(2), Point::new(500.0, 80.0)),
    ]);
    viewer.on_pointer_up(PointerId(1));
    viewer.on_pointer_up(PointerId(2));
    assert!(viewer.delta().angle != 0.0);
    assert!(viewer.delta().translation != Vec2::ZERO);

    // Fourth tap returns to the minimum and resets rotation/translation.
    viewer.on_double_tap(None);
    finish_animations(&mut viewer);
    assert_eq!(viewer.delta().scale, 1.0);
    assert_eq!(viewer.delta().angle, 0.0);
    assert_eq!(viewer.delta().translation, Vec2::ZERO);

    let events = viewer.take_events();
    assert_eq!(count(&events, ViewEvent::DoubleTap), 4);
    assert_eq!(count(&events, ViewEvent::ScaleAnimationCompleted), 4);
    assert_eq!(count(&events, ViewEvent::RotateTranslateAnimationCompleted), 1);
}

#[test]
fn double_tap_pivots_on_the_tap_location() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));
    let pivot = Point::new(250.0, 180.0);

    // The content point currently under the pivot must still be under it
    // after the animated zoom lands.
    let probe = viewer.base().inverse().apply(pivot);
    let before = viewer.display().apply(probe);

    viewer.on_double_tap(Some(pivot));
    finish_animations(&mut viewer);
    let after = viewer.display().apply(probe);

    assert!((after - before).hypot() < 1e-9);
    assert!(viewer.delta().scale > 1.0);
}

#[test]
fn gesture_end_clamps_scale_with_one_notification() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));
    assert!(viewer.config_mut().set_min_scale(1.0));
    assert!(viewer.config_mut().set_min_scale_margin(0.6));

    viewer.on_scale_begin(Point::new(400.0, 300.0));
    viewer.on_scale(Point::new(400.0, 300.0), 0.5);
    assert_eq!(viewer.delta().scale, 0.5);
    viewer.on_scale_end();
    viewer.on_gesture_end();

    finish_animations(&mut viewer);
    assert!((viewer.delta().scale - 1.0).abs() < 1e-12);

    let events = viewer.take_events();
    assert_eq!(count(&events, ViewEvent::MinScaleReached), 1);
    assert_eq!(count(&events, ViewEvent::ScaleAnimationCompleted), 1);
    assert_eq!(count(&events, ViewEvent::MaxScaleReached), 0);
}

#[test]
fn live_pinch_overshoot_is_limited_by_the_elastic_range() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));
    assert!(viewer.config_mut().set_max_scale(4.0));
    assert!(viewer.config_mut().set_max_scale_margin(0.25));

    viewer.on_scale_begin(Point::new(400.0, 300.0));
    viewer.on_scale(Point::new(400.0, 300.0), 100.0);
    assert_eq!(viewer.delta().scale, 4.25);
}

#[test]
fn scroll_across_the_top_margin_stops_on_the_line_once() {
    let mut viewer = Viewer::new(VIEWPORT);
    viewer.set_display_mode(DisplayMode::Original);
    viewer.set_content_size(Size::new(800.0, 1200.0));
    assert!(viewer.config_mut().set_scroll_margins(Margins::uniform(20.0)));

    viewer.on_gesture_begin();
    let rect = viewer.display_rect().unwrap();
    assert_eq!(rect.y0, -300.0);

    viewer.on_scroll(Vec2::new(0.0, 340.0), 1);
    let rect = viewer.display_rect().unwrap();
    assert!((rect.y0 - 20.0).abs() < 1e-9);

    let events = viewer.take_events();
    assert_eq!(count(&events, ViewEvent::TopBoundReached), 1);
    assert_eq!(count(&events, ViewEvent::BottomBoundReached), 0);

    // Beyond the line the drag is elastic: no further clamping or events.
    viewer.on_scroll(Vec2::new(0.0, 15.0), 1);
    let rect = viewer.display_rect().unwrap();
    assert!((rect.y0 - 35.0).abs() < 1e-9);
    assert!(viewer.take_events().is_empty());
}

#[test]
fn fitting_content_stays_near_the_center() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));
    assert!(viewer.config_mut().set_scroll_margins(Margins::uniform(10.0)));

    viewer.on_gesture_begin();
    viewer.on_scroll(Vec2::new(5000.0, 0.0), 1);

    // The content fit at gesture start, so it may drift at most one margin
    // from centered.
    let rect = viewer.display_rect().unwrap();
    assert!((rect.center().x - (VIEWPORT.center().x + 10.0)).abs() < 1e-9);
    assert!(viewer.take_events().is_empty());
}

#[test]
fn fling_translates_through_an_animation() {
    let mut viewer = Viewer::new(VIEWPORT);
    viewer.set_display_mode(DisplayMode::Original);
    viewer.set_content_size(Size::new(1600.0, 1200.0));
    viewer.config_mut().set_animation_duration_ms(250);

    viewer.on_gesture_begin();
    viewer.on_fling(Vec2::new(100.0, 0.0), 1);

    // Nothing moves until the host ticks the animation.
    assert_eq!(viewer.delta().translation, Vec2::ZERO);
    finish_animations(&mut viewer);
    // 100 px/s over 250 ms.
    assert_eq!(viewer.delta().translation, Vec2::new(25.0, 0.0));
    assert_eq!(
        count(&viewer.take_events(), ViewEvent::TranslateAnimationCompleted),
        1
    );
}

#[test]
fn release_settle_closes_the_elastic_gap() {
    let mut viewer = Viewer::new(VIEWPORT);
    viewer.set_display_mode(DisplayMode::Original);
    viewer.set_content_size(Size::new(1600.0, 1200.0));
    assert!(viewer.config_mut().set_scroll_margins(Margins::uniform(100.0)));

    viewer.on_gesture_begin();
    // One large step leaves a 50 px gap at the left, inside the elastic
    // allowance.
    viewer.on_scroll(Vec2::new(450.0, 0.0), 1);
    assert_eq!(viewer.display_rect().unwrap().x0, 50.0);

    viewer.on_gesture_end();
    finish_animations(&mut viewer);
    assert_eq!(viewer.display_rect().unwrap().x0, 0.0);
    assert_eq!(
        count(&viewer.take_events(), ViewEvent::TranslateAnimationCompleted),
        1
    );
}

#[test]
fn two_finger_rotation_turns_the_delta_about_the_finger_midpoint() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));

    viewer.on_pointer_down(PointerId(1), Point::new(300.0, 300.0));
    viewer.on_pointer_down(PointerId(2), Point::new(500.0, 300.0));

    // Second finger sweeps 60° around the first; the midpoint at the step
    // is (350, 386.6).
    viewer.on_pointer_move(&[
        PointerSample::new(PointerId(1), Point::new(300.0, 300.0)),
        PointerSample::new(PointerId(2), Point::new(400.0, 473.2)),
    ]);

    let expected = (473.2_f64 - 300.0).atan2(100.0);
    assert!((viewer.delta().angle - expected).abs() < 1e-9);

    // The delta was identity before the step, so pivot preservation means
    // the step's midpoint still maps to itself through the delta.
    let mid = Point::new(350.0, 386.6);
    assert!((viewer.delta().apply(mid) - mid).hypot() < 1e-9);

    viewer.on_pointer_up(PointerId(1));
    viewer.on_pointer_up(PointerId(2));
    assert!(!viewer.debug_info().rotating);
}

#[test]
fn replaced_animations_go_stale() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));

    viewer.on_double_tap(None);
    let first: Vec<_> = viewer.animations().collect();
    assert_eq!(first.len(), 1);

    // A second tap before any tick cancels and restarts the correction.
    viewer.on_double_tap(None);
    let second: Vec<_> = viewer.animations().collect();
    assert_eq!(second.len(), 1);
    assert_ne!(first[0].id, second[0].id);

    assert!(!viewer.animation_tick(first[0].id, 1.0));
    assert!(viewer.animation_tick(second[0].id, 1.0));
}

#[test]
fn touch_down_cancels_in_flight_animations() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));

    viewer.on_double_tap(None);
    assert_eq!(viewer.animations().count(), 1);

    viewer.on_pointer_down(PointerId(1), Point::new(100.0, 100.0));
    assert_eq!(viewer.animations().count(), 0);
}

#[test]
fn snapshot_restore_round_trips_the_pose() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));
    assert!(viewer.config_mut().set_max_scale(12.0));
    assert!(viewer.config_mut().set_scroll_margins(Margins::uniform(16.0)));
    viewer.config_mut().rotation_enabled = false;
    viewer.set_display_mode(DisplayMode::Fill);

    viewer.on_scale(Point::new(250.0, 180.0), 2.5);
    viewer.on_scroll(Vec2::new(-30.0, 12.0), 1);
    let saved = viewer.snapshot();

    let mut restored = viewer_with_content(Size::new(400.0, 300.0));
    restored.restore(&saved).unwrap();

    assert_eq!(restored.display_mode(), DisplayMode::Fill);
    assert_eq!(restored.config().max_scale(), 12.0);
    assert_eq!(restored.config().scroll_margins(), Margins::uniform(16.0));
    assert!(!restored.config().rotation_enabled);

    let a = viewer.display();
    let b = restored.display();
    assert!((a.scale - b.scale).abs() < 1e-9);
    assert!((a.angle - b.angle).abs() < 1e-9);
    assert!((a.translation - b.translation).hypot() < 1e-9);
}

#[test]
fn restore_rejects_a_corrupt_matrix_and_leaves_state_alone() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));
    viewer.on_scale(Point::new(250.0, 180.0), 2.0);
    let before = viewer.display();

    let mut saved = viewer.snapshot();
    // Break the antisymmetry of the delta matrix: shear is not a similarity.
    saved.insert("delta.1".to_string(), SnapshotValue::Float(0.5));

    assert!(viewer.restore(&saved).is_err());
    assert_eq!(viewer.display(), before);

    // Missing keys abort too.
    let mut truncated = viewer.snapshot();
    truncated.remove("base.4");
    assert!(viewer.restore(&truncated).is_err());
    assert_eq!(viewer.display(), before);
}

#[test]
fn restore_rejects_unknown_display_modes() {
    let mut viewer = viewer_with_content(Size::new(400.0, 300.0));
    let mut saved = viewer.snapshot();
    saved.insert(
        "display_mode".to_string(),
        SnapshotValue::Str("stretch".to_string()),
    );
    assert!(viewer.restore(&saved).is_err());
}
