//! Cross-fade between the globe and the organic form.

use crate::constants::{MODE_BLEND_FOLLOW, VISIBLE_SCALE_EPSILON};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    World,
    Mind,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::World => Mode::Mind,
            Mode::Mind => Mode::World,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::World => "world",
            Mode::Mind => "mind",
        }
    }
}

/// Blend scales of the two visualizations.
///
/// Scales chase 1 (active) or 0 (inactive) each frame; a visualization below
/// the visibility epsilon is skipped by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneComposer {
    world: f32,
    mind: f32,
    follow: f32,
}

impl SceneComposer {
    pub fn new(mode: Mode) -> Self {
        let (world, mind) = match mode {
            Mode::World => (1.0, 0.0),
            Mode::Mind => (0.0, 1.0),
        };
        Self {
            world,
            mind,
            follow: MODE_BLEND_FOLLOW,
        }
    }

    pub fn step(&mut self, mode: Mode) {
        let (world_target, mind_target) = match mode {
            Mode::World => (1.0, 0.0),
            Mode::Mind => (0.0, 1.0),
        };
        self.world = (self.world + (world_target - self.world) * self.follow).clamp(0.0, 1.0);
        self.mind = (self.mind + (mind_target - self.mind) * self.follow).clamp(0.0, 1.0);
    }

    pub fn world_scale(&self) -> f32 {
        self.world
    }

    pub fn mind_scale(&self) -> f32 {
        self.mind
    }

    pub fn world_visible(&self) -> bool {
        self.world > VISIBLE_SCALE_EPSILON
    }

    pub fn mind_visible(&self) -> bool {
        self.mind > VISIBLE_SCALE_EPSILON
    }
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
