use glam::Vec2;
use huxwell_core::constants::*;
use huxwell_core::*;

#[test]
fn milestone_fires_on_crossing_in_both_directions() {
    let mut glow = MilestoneGlow::default();
    assert_eq!(glow.update(0.2, 0.3, 0.016).as_slice(), &[0]);
    assert_eq!(glow.level(0), 1.0);

    // Linear decay over the glow duration.
    glow.update(0.3, 0.3, MILESTONE_GLOW_SECONDS / 2.0);
    assert!((glow.level(0) - 0.5).abs() < 1e-5);
    glow.update(0.3, 0.3, MILESTONE_GLOW_SECONDS);
    assert_eq!(glow.level(0), 0.0);

    // Scrolling back re-fires.
    assert_eq!(glow.update(0.3, 0.2, 0.016).as_slice(), &[0]);
    assert_eq!(glow.intensity(), 1.0);
}

#[test]
fn one_large_jump_fires_every_checkpoint_passed() {
    let mut glow = MilestoneGlow::default();
    assert_eq!(glow.update(0.0, 1.0, 0.016).as_slice(), &[0, 1, 2]);
    assert!(glow.update(1.0, 1.0, 0.016).is_empty());
    assert_eq!(glow.level(7), 0.0);
}

#[test]
fn zoom_and_shrink_start_at_mid_scroll() {
    assert_eq!(zoom_for(0.2), 0.0);
    assert_eq!(zoom_for(0.5), 0.0);
    assert!((zoom_for(0.75) + 0.5).abs() < 1e-6);
    assert!((zoom_for(1.0) + 1.0).abs() < 1e-6);
    assert_eq!(shrink_for(0.5), 1.0);
    assert!((shrink_for(1.0) - SHRINK_MIN_SCALE).abs() < 1e-6);
}

#[test]
fn driver_clamps_long_frames() {
    let mut driver = AnimationDriver::new();
    let mut scroll = ScrollState::new();
    let pointer = PointerState::default();
    driver.advance(5.0, &mut scroll, &pointer);
    assert!((driver.time() - MAX_FRAME_DT_SEC).abs() < 1e-6);
    driver.advance(-1.0, &mut scroll, &pointer);
    assert!((driver.time() - MAX_FRAME_DT_SEC).abs() < 1e-6);
}

#[test]
fn rotation_follows_spin_and_pointer() {
    let mut driver = AnimationDriver::new();
    let mut scroll = ScrollState::new();
    let mut pointer = PointerState::default();
    let mut frame = driver.advance(0.016, &mut scroll, &pointer);
    for _ in 0..600 {
        frame = driver.advance(0.016, &mut scroll, &pointer);
    }
    assert!(frame.globe_rotation.y > 0.0);
    let calm_x = frame.globe_rotation.x;

    pointer.set_ndc(Vec2::new(0.0, 1.0));
    for _ in 0..600 {
        frame = driver.advance(0.016, &mut scroll, &pointer);
    }
    assert!(frame.globe_rotation.x > calm_x + 0.1);
}

#[test]
fn composer_cross_fades_between_modes() {
    let mut composer = SceneComposer::new(Mode::World);
    assert_eq!((composer.world_scale(), composer.mind_scale()), (1.0, 0.0));
    assert!(!composer.mind_visible());

    let mut last_world = composer.world_scale();
    let mut last_mind = composer.mind_scale();
    for _ in 0..200 {
        composer.step(Mode::Mind);
        assert!(composer.world_scale() <= last_world);
        assert!(composer.mind_scale() >= last_mind);
        last_world = composer.world_scale();
        last_mind = composer.mind_scale();
    }
    assert!(!composer.world_visible());
    assert!(composer.mind_scale() > 0.99);
    assert_eq!(SceneComposer::new(Mode::Mind).mind_scale(), 1.0);
}

#[test]
fn mode_toggles_and_labels() {
    assert_eq!(Mode::World.toggled(), Mode::Mind);
    assert_eq!(Mode::Mind.toggled(), Mode::World);
    assert_eq!(Mode::default().label(), "world");
}

#[test]
fn overlay_counter_is_zero_padded() {
    let start = OverlayModel::new(0.0, Mode::World);
    assert_eq!(start.counter, "000");
    assert!(start.intro_visible);
    assert_eq!(start.tagline, "The Connected World");

    let mid = OverlayModel::new(0.07, Mode::World);
    assert_eq!(mid.counter, "007");
    assert!(!mid.intro_visible);

    let end = OverlayModel::new(1.0, Mode::Mind);
    assert_eq!(end.counter, "100");
    assert_eq!(end.tagline, "The Synthesized Mind");
}

#[test]
fn context_routes_input_into_frames() {
    let mut ctx = AnimationContext::new(Mode::World, false);
    ctx.handle_input(ScrollInput::Key(ScrollKey::End), 800.0);
    assert_eq!(ctx.scroll.target(), 1.0);
    let first = ctx.frame(0.016);
    assert!(first.state.progress > 0.0 && first.state.progress < 1.0);
    assert!(first.world_visible);

    ctx.set_pointer_ndc(Vec2::new(0.5, 0.5));
    assert_eq!(ctx.toggle_mode(), Mode::Mind);
    let next = ctx.frame(0.016);
    assert_eq!(next.state.pointer, Vec2::new(0.5, 0.5));
    assert_eq!(next.overlay.mode, Mode::Mind);
    assert!(next.mind_scale > first.mind_scale);
}

#[test]
fn reduced_motion_context_ignores_scroll_input() {
    let mut ctx = AnimationContext::new(Mode::World, true);
    ctx.handle_input(ScrollInput::Wheel { delta_y: 500.0, mode: WheelMode::Pixel }, 800.0);
    let out = ctx.frame(0.016);
    assert_eq!(out.state.progress, REDUCED_MOTION_PROGRESS);
}
