mod pointer;
mod scroll;

pub use pointer::wire_pointer;
pub use scroll::wire_scroll_input;

use crate::dom;
use crate::recovery::GpuRecovery;
use huxwell_core::AnimationContext;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Registered {
    target: web::EventTarget,
    event: &'static str,
    function: js_sys::Function,
    // Keeps the closure alive until it is unregistered.
    _closure: Box<dyn Any>,
}

/// Owns every registered DOM listener and removes them all on drop.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Registered>,
}

impl Listeners {
    /// Register `handler` for `event` on `target`.
    ///
    /// Handlers that call `prevent_default` must pass `passive = false`.
    pub fn listen<E>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(E) + 'static,
    ) where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event, &function, &opts,
        ) {
            Ok(()) => self.entries.push(Registered {
                target: target.clone(),
                event,
                function,
                _closure: Box::new(closure),
            }),
            Err(e) => log::warn!("[input] could not listen for {}: {:?}", event, e),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for r in self.entries.drain(..) {
            let _ = r
                .target
                .remove_event_listener_with_callback(r.event, &r.function);
        }
    }
}

pub fn wire_resize(
    listeners: &mut Listeners,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) {
    let canvas = canvas.clone();
    listeners.listen(window, "resize", true, move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
    });
}

/// Track the WebGL2 context going away and coming back. Cancelling the loss
/// event tells the browser the page wants the context restored.
pub fn wire_context_loss(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    recovery: Rc<RefCell<GpuRecovery>>,
) {
    let lost = recovery.clone();
    listeners.listen(canvas, "webglcontextlost", false, move |ev: web::Event| {
        ev.prevent_default();
        lost.borrow_mut().suspend();
        log::warn!("[render] webgl context lost");
    });
    listeners.listen(canvas, "webglcontextrestored", true, move |_: web::Event| {
        recovery.borrow_mut().resume();
        log::info!("[render] webgl context restored");
    });
}

pub fn wire_mode_toggle(
    listeners: &mut Listeners,
    document: &web::Document,
    toggle_id: &str,
    ctx: Rc<RefCell<AnimationContext>>,
) {
    let Some(button) = document.get_element_by_id(toggle_id) else {
        log::warn!("[input] no #{} element; mode toggle disabled", toggle_id);
        return;
    };
    listeners.listen(&button, "click", true, move |_: web::MouseEvent| {
        let mode = ctx.borrow_mut().toggle_mode();
        log::info!("[input] mode -> {}", mode.label());
    });
}
