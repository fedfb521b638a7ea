use crate::dom;
use crate::events::Listeners;
use crate::overlay::OverlayView;
use crate::recovery::{GpuRecovery, RecoveryAction};
use crate::render::GpuState;
use huxwell_core::{AnimationContext, BrainGeometry, GlobeGeometry};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub ctx: Rc<RefCell<AnimationContext>>,
    pub canvas: web::HtmlCanvasElement,
    pub globe: Rc<GlobeGeometry>,
    pub brain: Rc<BrainGeometry>,
    /// `None` when no GPU backend came up or while it is being rebuilt; the
    /// overlay keeps running either way.
    pub gpu: Option<GpuState>,
    /// A rebuilt renderer waiting to be picked up by the next frame.
    pub rebuilt: Rc<RefCell<Option<GpuState>>>,
    pub recovery: Rc<RefCell<GpuRecovery>>,
    pub overlay: OverlayView,
    pub last_instant: Instant,
    pub _listeners: Listeners,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let out = self.ctx.borrow_mut().frame(dt_sec);
        self.overlay.apply(&out.overlay);

        if let Some(gpu) = self.rebuilt.borrow_mut().take() {
            log::info!("[render] renderer rebuilt");
            self.gpu = Some(gpu);
        }
        if self.recovery.borrow().needs_rebuild() && self.gpu.take().is_some() {
            log::warn!("[render] context lost; dropping GPU resources");
        }

        let Some(gpu) = self.gpu.as_mut() else {
            if self.recovery.borrow_mut().poll() == RecoveryAction::Rebuild {
                self.spawn_rebuild();
            }
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&out, dom::pixel_ratio() as f32) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                log::warn!("[render] {}", e);
                let device_lost = gpu.is_device_lost();
                let action = self.recovery.borrow_mut().on_context_lost(device_lost);
                match action {
                    RecoveryAction::Reconfigure => gpu.recover(),
                    RecoveryAction::Rebuild => {
                        self.gpu = None;
                        self.spawn_rebuild();
                    }
                    RecoveryAction::Wait => self.gpu = None,
                }
            }
            Err(e) => log::error!("[render] {}", e),
        }
    }

    /// Build a fresh renderer from the retained geometry in the background.
    fn spawn_rebuild(&self) {
        let canvas = self.canvas.clone();
        let globe = self.globe.clone();
        let brain = self.brain.clone();
        let rebuilt = self.rebuilt.clone();
        let recovery = self.recovery.clone();
        spawn_local(async move {
            let gpu = init_gpu(&canvas, &globe, &brain).await;
            let ok = gpu.is_some();
            *rebuilt.borrow_mut() = gpu;
            let mut recovery = recovery.borrow_mut();
            recovery.rebuild_finished(ok);
            if recovery.gave_up() {
                log::error!("[render] giving up on the renderer after repeated failures");
            }
        });
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    globe: &GlobeGeometry,
    brain: &BrainGeometry,
) -> Option<GpuState> {
    match GpuState::new(canvas, globe, brain).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[render] GPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
///
/// The loop closure keeps itself alive through `tick`; `stop` breaks that
/// cycle so everything the step owns is dropped.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    /// Cancel the scheduled frame and drop the step closure.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

/// Call `step` once per animation frame until the returned loop is stopped.
pub fn start_loop(mut step: impl FnMut() + 'static) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        step();
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);
    FrameLoop { tick, pending }
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    let slot = tick.borrow();
    if let Some(cb) = slot.as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}
