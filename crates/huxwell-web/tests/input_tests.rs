// Host-side tests for pure input mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use huxwell_core::{ScrollInput, ScrollKey, WheelMode};
use input::*;

#[test]
fn touch_tracker_needs_a_start_before_moves_count() {
    let mut t = TouchTracker::default();
    assert!(!t.is_active());
    // A move with no prior position only records it
    assert_eq!(t.move_to(300.0), None);
    assert!(t.is_active());
    assert_eq!(t.move_to(280.0), Some(ScrollInput::Touch { delta_y: 20.0 }));
}

#[test]
fn touch_swipe_up_scrolls_forward_and_down_scrolls_back() {
    let mut t = TouchTracker::default();
    t.start(500.0);
    match t.move_to(450.0) {
        Some(ScrollInput::Touch { delta_y }) => assert!(delta_y > 0.0),
        other => panic!("unexpected {:?}", other),
    }
    match t.move_to(470.0) {
        Some(ScrollInput::Touch { delta_y }) => assert!((delta_y + 20.0).abs() < 1e-6),
        other => panic!("unexpected {:?}", other),
    }
    // Stationary finger produces nothing
    assert_eq!(t.move_to(470.0), None);
    t.end();
    assert!(!t.is_active());
    assert_eq!(t.move_to(100.0), None);
}

#[test]
fn wheel_input_ignores_empty_and_non_finite_deltas() {
    assert_eq!(wheel_input(0.0, 0), None);
    assert_eq!(wheel_input(f64::NAN, 0), None);
    assert_eq!(wheel_input(f64::INFINITY, 1), None);
    assert_eq!(
        wheel_input(120.0, 0),
        Some(ScrollInput::Wheel {
            delta_y: 120.0,
            mode: WheelMode::Pixel
        })
    );
    assert_eq!(
        wheel_input(-3.0, 1),
        Some(ScrollInput::Wheel {
            delta_y: -3.0,
            mode: WheelMode::Line
        })
    );
}

#[test]
fn key_input_respects_modifiers() {
    assert_eq!(
        key_input("ArrowDown", false, false),
        Some(ScrollInput::Key(ScrollKey::LineDown))
    );
    assert_eq!(
        key_input(" ", true, false),
        Some(ScrollInput::Key(ScrollKey::PageUp))
    );
    assert_eq!(key_input("ArrowDown", false, true), None);
    assert_eq!(key_input("a", false, false), None);
}

#[test]
fn form_fields_keep_their_keys() {
    assert!(is_editable_tag("INPUT"));
    assert!(is_editable_tag("textarea"));
    assert!(is_editable_tag("Select"));
    assert!(!is_editable_tag("DIV"));
    assert!(!is_editable_tag("BUTTON"));
}
