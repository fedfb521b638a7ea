// Host-side tests for the renderer recovery policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod recovery {
    include!("../src/recovery.rs");
}

use recovery::*;

#[test]
fn stale_surface_with_a_live_device_is_reconfigured() {
    let mut r = GpuRecovery::default();
    assert_eq!(r.on_context_lost(false), RecoveryAction::Reconfigure);
    assert!(!r.needs_rebuild());
}

#[test]
fn lost_device_starts_exactly_one_rebuild() {
    let mut r = GpuRecovery::default();
    assert_eq!(r.on_context_lost(true), RecoveryAction::Rebuild);
    assert!(r.is_rebuilding());
    // Frames keep polling while the rebuild future runs
    assert_eq!(r.poll(), RecoveryAction::Wait);
    assert_eq!(r.on_context_lost(true), RecoveryAction::Wait);

    r.rebuild_finished(true);
    assert!(!r.needs_rebuild());
    assert_eq!(r.poll(), RecoveryAction::Wait);
}

#[test]
fn lost_webgl_context_waits_for_restore() {
    let mut r = GpuRecovery::default();
    r.suspend();
    assert!(r.needs_rebuild());
    for _ in 0..10 {
        assert_eq!(r.poll(), RecoveryAction::Wait);
    }
    r.resume();
    assert_eq!(r.poll(), RecoveryAction::Rebuild);
}

#[test]
fn repeated_failures_give_up() {
    let mut r = GpuRecovery::default();
    r.suspend();
    r.resume();
    for _ in 0..MAX_REBUILD_ATTEMPTS {
        assert_eq!(r.poll(), RecoveryAction::Rebuild);
        r.rebuild_finished(false);
    }
    assert!(r.gave_up());
    assert_eq!(r.poll(), RecoveryAction::Wait);
}

#[test]
fn success_clears_earlier_failures() {
    let mut r = GpuRecovery::default();
    assert_eq!(r.on_context_lost(true), RecoveryAction::Rebuild);
    r.rebuild_finished(false);
    assert_eq!(r.poll(), RecoveryAction::Rebuild);
    r.rebuild_finished(true);

    // A later loss gets the full allowance again
    assert_eq!(r.on_context_lost(true), RecoveryAction::Rebuild);
    for _ in 1..MAX_REBUILD_ATTEMPTS {
        r.rebuild_finished(false);
        assert_eq!(r.poll(), RecoveryAction::Rebuild);
    }
    r.rebuild_finished(false);
    assert!(r.gave_up());
}
