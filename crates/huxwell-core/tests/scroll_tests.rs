use glam::Vec2;
use huxwell_core::constants::*;
use huxwell_core::*;

#[test]
fn target_clamps_for_every_magnitude() {
    for m in [1e-6_f32, 0.01, 0.5, 1.0, 10.0, 1e6, f32::MAX] {
        let mut s = ScrollState::new();
        for _ in 0..200 {
            s.apply(m);
        }
        assert!(s.target() <= 1.0);
        if m >= 0.01 {
            assert_eq!(s.target(), 1.0, "m={}", m);
        }
        for _ in 0..400 {
            s.apply(-m);
        }
        assert!(s.target() >= 0.0);
        if m >= 0.01 {
            assert_eq!(s.target(), 0.0, "m={}", m);
        }
    }
}

#[test]
fn non_finite_deltas_are_ignored() {
    let mut s = ScrollState::new();
    s.apply(0.3);
    s.apply(f32::NAN);
    s.apply(f32::INFINITY);
    s.jump_to(f32::NAN);
    assert!((s.target() - 0.3).abs() < 1e-6);
}

#[test]
fn current_converges_geometrically_and_settles() {
    let mut s = ScrollState::new();
    s.jump_to(1.0);
    let mut gap = (s.target() - s.current()).abs();
    let mut frames = 0;
    while s.current() != s.target() {
        s.step(SCROLL_SMOOTHING);
        let next = (s.target() - s.current()).abs();
        assert!(next <= gap * (1.0 - SCROLL_SMOOTHING) + 1e-6);
        gap = next;
        frames += 1;
        assert!(frames < 1000, "did not settle");
    }
    // Idempotent once settled.
    assert_eq!(s.step(SCROLL_SMOOTHING), 1.0);
}

#[test]
fn reduced_motion_pins_progress() {
    let mut s = ScrollState::reduced_motion();
    s.apply(0.5);
    s.jump_to(1.0);
    for _ in 0..10 {
        s.step(SCROLL_SMOOTHING);
    }
    assert!(s.is_reduced_motion());
    assert_eq!(s.target(), REDUCED_MOTION_PROGRESS);
    assert_eq!(s.current(), REDUCED_MOTION_PROGRESS);
}

#[test]
fn wheel_modes_scale_to_pixels() {
    let by = |input: ScrollInput| match input.to_delta(800.0) {
        ScrollDelta::By(d) => d,
        ScrollDelta::To(_) => panic!("expected relative delta"),
    };
    let px = by(ScrollInput::Wheel { delta_y: 100.0, mode: WheelMode::Pixel });
    assert!((px - 0.08).abs() < 1e-6);
    let lines = by(ScrollInput::Wheel { delta_y: 3.0, mode: WheelMode::from_dom(1) });
    assert!((lines - 3.0 * 16.0 * WHEEL_STEP_PER_PX).abs() < 1e-6);
    let page = by(ScrollInput::Wheel { delta_y: 1.0, mode: WheelMode::from_dom(2) });
    assert!((page - 800.0 * WHEEL_STEP_PER_PX).abs() < 1e-6);
    let touch = by(ScrollInput::Touch { delta_y: 40.0 });
    assert!((touch - 0.1).abs() < 1e-6);
}

#[test]
fn keys_map_to_steps_and_jumps() {
    assert_eq!(scroll_key("ArrowDown", false), Some(ScrollKey::LineDown));
    assert_eq!(scroll_key(" ", false), Some(ScrollKey::PageDown));
    assert_eq!(scroll_key(" ", true), Some(ScrollKey::PageUp));
    assert_eq!(scroll_key("Tab", false), None);
    assert_eq!(
        ScrollInput::Key(ScrollKey::PageUp).to_delta(600.0),
        ScrollDelta::By(-KEY_PAGE_STEP)
    );
    assert_eq!(ScrollInput::Key(ScrollKey::End).to_delta(600.0), ScrollDelta::To(1.0));
    assert_eq!(ScrollInput::Key(ScrollKey::Start).to_delta(600.0), ScrollDelta::To(0.0));
}

#[test]
fn client_positions_map_to_ndc() {
    let origin = Vec2::new(10.0, 20.0);
    let size = Vec2::new(200.0, 100.0);
    let centre = client_to_ndc(Vec2::new(110.0, 70.0), origin, size).unwrap();
    assert!(centre.length() < 1e-6);
    let top_left = client_to_ndc(origin, origin, size).unwrap();
    assert_eq!(top_left, Vec2::new(-1.0, 1.0));
    assert!(client_to_ndc(Vec2::ZERO, origin, Vec2::ZERO).is_none());
}

#[test]
fn pointer_stays_inside_ndc() {
    let mut p = PointerState::default();
    p.set_ndc(Vec2::new(3.0, -2.0));
    assert_eq!(p.ndc, Vec2::new(1.0, -1.0));
    p.set_ndc(Vec2::new(f32::NAN, 0.0));
    assert_eq!(p.ndc, Vec2::new(1.0, -1.0));
}
