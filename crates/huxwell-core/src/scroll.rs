//! Scroll progress and pointer state shared by input handlers and the frame loop.

use crate::constants::{REDUCED_MOTION_PROGRESS, SCROLL_SNAP_EPSILON};
use glam::Vec2;

/// Virtual scroll progress.
///
/// `target` is written by input handlers; `current` chases it once per frame.
/// Both stay in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    target: f32,
    current: f32,
    reduced_motion: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            reduced_motion: false,
        }
    }

    /// Pinned progress for users who prefer reduced motion; input is ignored.
    pub fn reduced_motion() -> Self {
        Self {
            target: REDUCED_MOTION_PROGRESS,
            current: REDUCED_MOTION_PROGRESS,
            reduced_motion: true,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn is_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Accumulate into the target, clamped to [0, 1].
    pub fn apply(&mut self, delta: f32) {
        if self.reduced_motion || !delta.is_finite() {
            return;
        }
        self.target = (self.target + delta).clamp(0.0, 1.0);
    }

    pub fn jump_to(&mut self, value: f32) {
        if self.reduced_motion || !value.is_finite() {
            return;
        }
        self.target = value.clamp(0.0, 1.0);
    }

    /// One frame of exponential smoothing toward the target.
    ///
    /// The factor is applied per frame, not per second, so the perceived
    /// speed follows the display refresh rate.
    pub fn step(&mut self, smoothing: f32) -> f32 {
        let k = smoothing.clamp(0.0, 1.0);
        self.current += (self.target - self.current) * k;
        if (self.target - self.current).abs() < SCROLL_SNAP_EPSILON {
            self.current = self.target;
        }
        self.current = self.current.clamp(0.0, 1.0);
        self.current
    }
}

/// Pointer position in normalized device coordinates (x right, y up).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    pub fn set_ndc(&mut self, ndc: Vec2) {
        if ndc.is_finite() {
            self.ndc = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        }
    }
}
