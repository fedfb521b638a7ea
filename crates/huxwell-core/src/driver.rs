//! Per-frame animation: time, scroll smoothing, rotation, zoom and milestone glow.

use crate::constants::*;
use crate::scroll::{PointerState, ScrollState};
use crate::shading::smoothstep;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// Rotation behaviour of one visualization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    /// Continuous yaw in radians per second.
    pub auto_speed: f32,
    pub sway_amplitude: f32,
    pub sway_speed: f32,
    pub pointer_tilt_x: f32,
    pub pointer_tilt_y: f32,
    /// Per-frame lerp factor toward the target angles.
    pub follow: f32,
}

impl Spin {
    pub fn globe() -> Self {
        Self {
            auto_speed: GLOBE_SPIN_SPEED,
            sway_amplitude: 0.0,
            sway_speed: 0.0,
            pointer_tilt_x: POINTER_TILT_X,
            pointer_tilt_y: POINTER_TILT_Y,
            follow: ROTATION_FOLLOW,
        }
    }

    pub fn brain() -> Self {
        Self {
            auto_speed: BRAIN_SPIN_SPEED,
            sway_amplitude: BRAIN_SWAY_AMPLITUDE,
            sway_speed: BRAIN_SWAY_SPEED,
            pointer_tilt_x: POINTER_TILT_X,
            pointer_tilt_y: POINTER_TILT_Y,
            follow: ROTATION_FOLLOW,
        }
    }
}

/// Smoothed pitch/yaw of one visualization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// Lerp toward the spin target; the pointer tilts the object toward itself.
    pub fn step(&mut self, spin: &Spin, time: f32, pointer: Vec2) {
        let target_x =
            (time * spin.sway_speed).sin() * spin.sway_amplitude + pointer.y * spin.pointer_tilt_x;
        let target_y = time * spin.auto_speed + pointer.x * spin.pointer_tilt_y;
        self.x += (target_x - self.x) * spin.follow;
        self.y += (target_y - self.y) * spin.follow;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.x) * Mat4::from_rotation_y(self.y)
    }
}

/// Brightness pulses fired when progress crosses fixed checkpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct MilestoneGlow {
    checkpoints: Vec<f32>,
    levels: Vec<f32>,
    duration: f32,
}

impl Default for MilestoneGlow {
    fn default() -> Self {
        Self::new(&MILESTONES, MILESTONE_GLOW_SECONDS)
    }
}

impl MilestoneGlow {
    pub fn new(checkpoints: &[f32], duration: f32) -> Self {
        Self {
            checkpoints: checkpoints.to_vec(),
            levels: vec![0.0; checkpoints.len()],
            duration: duration.max(1e-3),
        }
    }

    /// Decay existing glows linearly, then re-fire any checkpoint crossed
    /// between `prev` and `current` in either direction. Returns the indices
    /// that fired.
    pub fn update(&mut self, prev: f32, current: f32, dt_sec: f32) -> SmallVec<[usize; 4]> {
        let decay = dt_sec.max(0.0) / self.duration;
        for level in &mut self.levels {
            *level = (*level - decay).max(0.0);
        }
        let mut fired = SmallVec::new();
        for (i, &c) in self.checkpoints.iter().enumerate() {
            let up = prev < c && current >= c;
            let down = prev >= c && current < c;
            if up || down {
                self.levels[i] = 1.0;
                fired.push(i);
            }
        }
        fired
    }

    pub fn level(&self, index: usize) -> f32 {
        self.levels.get(index).copied().unwrap_or(0.0)
    }

    /// Strongest active glow.
    pub fn intensity(&self) -> f32 {
        self.levels.iter().copied().fold(0.0, f32::max)
    }
}

/// Everything the renderer needs from one frame of animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub time: f32,
    pub progress: f32,
    pub pointer: Vec2,
    pub globe_rotation: Rotation,
    pub brain_rotation: Rotation,
    /// Camera-space push-back of the primary visualization.
    pub zoom: f32,
    /// Scale multiplier that shrinks the primary visualization late in the scroll.
    pub shrink: f32,
    pub milestone_glow: f32,
}

impl FrameState {
    /// Model matrix for a visualization given its composer scale.
    pub fn model(&self, rotation: &Rotation, base_scale: f32, blend_scale: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.zoom))
            * Mat4::from_scale(Vec3::splat(base_scale * blend_scale * self.shrink))
            * rotation.matrix()
    }
}

#[inline]
pub fn zoom_for(progress: f32) -> f32 {
    let t = ((progress - ZOOM_START) * 2.0).max(0.0).min(1.0);
    -ZOOM_DEPTH * t
}

#[inline]
pub fn shrink_for(progress: f32) -> f32 {
    1.0 - (1.0 - SHRINK_MIN_SCALE) * smoothstep(SHRINK_START, SHRINK_END, progress)
}

#[derive(Clone, Debug)]
pub struct AnimationDriver {
    time: f32,
    globe_spin: Spin,
    brain_spin: Spin,
    globe_rotation: Rotation,
    brain_rotation: Rotation,
    glow: MilestoneGlow,
    smoothing: f32,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            globe_spin: Spin::globe(),
            brain_spin: Spin::brain(),
            globe_rotation: Rotation::default(),
            brain_rotation: Rotation::default(),
            glow: MilestoneGlow::default(),
            smoothing: SCROLL_SMOOTHING,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance one frame. `dt_sec` drives the clock and glow decay; scroll and
    /// rotation smoothing are fixed per-frame factors.
    pub fn advance(
        &mut self,
        dt_sec: f32,
        scroll: &mut ScrollState,
        pointer: &PointerState,
    ) -> FrameState {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        self.time += dt;

        let prev = scroll.current();
        let progress = scroll.step(self.smoothing);
        for i in self.glow.update(prev, progress, dt) {
            log::debug!("[scene] milestone {} crossed at {:.3}", i, progress);
        }

        self.globe_rotation
            .step(&self.globe_spin, self.time, pointer.ndc);
        self.brain_rotation
            .step(&self.brain_spin, self.time, pointer.ndc);

        FrameState {
            time: self.time,
            progress,
            pointer: pointer.ndc,
            globe_rotation: self.globe_rotation,
            brain_rotation: self.brain_rotation,
            zoom: zoom_for(progress),
            shrink: shrink_for(progress),
            milestone_glow: self.glow.intensity(),
        }
    }
}
