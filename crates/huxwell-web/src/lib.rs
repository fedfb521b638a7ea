#![cfg(target_arch = "wasm32")]
mod constants;
mod dom;
mod events;
mod frame;
pub mod input;
mod overlay;
pub mod recovery;
mod render;

pub use events::Listeners;
pub use frame::{start_loop, FrameLoop};

use constants::{CANVAS_ID, LOADING_REVEAL_MS, MODE_TOGGLE_ID};
use huxwell_core::{AnimationContext, BrainGeometry, GlobeGeometry, Mode};
use instant::Instant;
use recovery::GpuRecovery;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("huxwell-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    dom::sync_canvas_backing_size(&canvas);

    let reduced_motion = dom::prefers_reduced_motion(&window);
    if reduced_motion {
        log::info!("[scene] reduced motion requested; scroll input disabled");
    }

    let globe = Rc::new(GlobeGeometry::build(random_seed())?);
    let brain = Rc::new(BrainGeometry::build(random_seed())?);
    let gpu = frame::init_gpu(&canvas, &globe, &brain).await;
    if gpu.is_none() {
        log::warn!("[render] continuing without a canvas renderer");
    }

    let ctx = Rc::new(RefCell::new(AnimationContext::new(
        Mode::default(),
        reduced_motion,
    )));

    let mut listeners = events::Listeners::default();
    let recovery = Rc::new(RefCell::new(GpuRecovery::default()));
    events::wire_resize(&mut listeners, &window, &canvas);
    events::wire_context_loss(&mut listeners, &canvas, recovery.clone());
    if !reduced_motion {
        events::wire_scroll_input(&mut listeners, &window, ctx.clone());
        events::wire_pointer(&mut listeners, &window, &canvas, ctx.clone());
    }
    events::wire_mode_toggle(&mut listeners, &document, MODE_TOGGLE_ID, ctx.clone());
    log::info!("[input] {} listeners registered", listeners.len());

    let mut frame_ctx = frame::FrameContext {
        ctx,
        canvas,
        globe,
        brain,
        gpu,
        rebuilt: Rc::new(RefCell::new(None)),
        recovery,
        overlay: overlay::OverlayView::new(document.clone()),
        last_instant: Instant::now(),
        _listeners: listeners,
    };
    overlay::reveal_after_loading(&window, &document, LOADING_REVEAL_MS);
    let running = start_loop(move || frame_ctx.frame());
    RUNNING.with(|slot| *slot.borrow_mut() = Some(running));
    Ok(())
}

thread_local! {
    static RUNNING: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
}

/// Stop the animation loop and remove every event listener the page added.
#[wasm_bindgen]
pub fn stop() {
    if let Some(running) = RUNNING.with(|slot| slot.borrow_mut().take()) {
        running.stop();
        log::info!("huxwell-web stopped");
    }
}
