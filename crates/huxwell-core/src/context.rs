//! The single owner of all mutable scene state.
//!
//! Input handlers and the frame loop share one `AnimationContext` behind
//! `Rc<RefCell<_>>`. The platform never runs them concurrently, so each borrow
//! is short and uncontended.

use crate::composer::{Mode, SceneComposer};
use crate::driver::{AnimationDriver, FrameState};
use crate::input::{ScrollDelta, ScrollInput};
use crate::overlay::OverlayModel;
use crate::scroll::{PointerState, ScrollState};
use glam::Vec2;

/// Result of one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub state: FrameState,
    pub world_scale: f32,
    pub mind_scale: f32,
    pub world_visible: bool,
    pub mind_visible: bool,
    pub overlay: OverlayModel,
}

#[derive(Clone, Debug)]
pub struct AnimationContext {
    pub scroll: ScrollState,
    pub pointer: PointerState,
    mode: Mode,
    composer: SceneComposer,
    driver: AnimationDriver,
}

impl AnimationContext {
    pub fn new(mode: Mode, reduced_motion: bool) -> Self {
        Self {
            scroll: if reduced_motion {
                ScrollState::reduced_motion()
            } else {
                ScrollState::new()
            },
            pointer: PointerState::default(),
            mode,
            composer: SceneComposer::new(mode),
            driver: AnimationDriver::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    pub fn handle_input(&mut self, input: ScrollInput, viewport_height: f32) {
        match input.to_delta(viewport_height) {
            ScrollDelta::By(d) => self.scroll.apply(d),
            ScrollDelta::To(v) => self.scroll.jump_to(v),
        }
    }

    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        self.pointer.set_ndc(ndc);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::debug!("[scene] mode {} -> {}", self.mode.label(), mode.label());
            self.mode = mode;
        }
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn frame(&mut self, dt_sec: f32) -> FrameOutput {
        let state = self.driver.advance(dt_sec, &mut self.scroll, &self.pointer);
        self.composer.step(self.mode);
        FrameOutput {
            state,
            world_scale: self.composer.world_scale(),
            mind_scale: self.composer.mind_scale(),
            world_visible: self.composer.world_visible(),
            mind_visible: self.composer.mind_visible(),
            overlay: OverlayModel::new(state.progress, self.mode),
        }
    }
}
