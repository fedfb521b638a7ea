use super::Listeners;
use crate::dom;
use crate::input::{is_editable_tag, key_input, wheel_input, TouchTracker};
use huxwell_core::{AnimationContext, ScrollInput};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel, touch and keyboard scrolling all feed the virtual scroll target.
/// The page itself never scrolls, so each handled event is cancelled.
pub fn wire_scroll_input(
    listeners: &mut Listeners,
    window: &web::Window,
    ctx: Rc<RefCell<AnimationContext>>,
) {
    let apply = {
        let window = window.clone();
        let ctx = ctx.clone();
        move |input: ScrollInput| {
            let vh = dom::viewport_height(&window);
            ctx.borrow_mut().handle_input(input, vh);
        }
    };

    {
        let apply = apply.clone();
        listeners.listen(window, "wheel", false, move |ev: web::WheelEvent| {
            ev.prevent_default();
            if let Some(input) = wheel_input(ev.delta_y(), ev.delta_mode()) {
                apply(input);
            }
        });
    }

    let touch = Rc::new(RefCell::new(TouchTracker::default()));
    {
        let touch = touch.clone();
        listeners.listen(window, "touchstart", true, move |ev: web::TouchEvent| {
            if let Some(t) = ev.touches().get(0) {
                touch.borrow_mut().start(t.client_y() as f32);
            }
        });
    }
    {
        let touch = touch.clone();
        let apply = apply.clone();
        listeners.listen(window, "touchmove", false, move |ev: web::TouchEvent| {
            let Some(t) = ev.touches().get(0) else {
                return;
            };
            ev.prevent_default();
            let input = touch.borrow_mut().move_to(t.client_y() as f32);
            if let Some(input) = input {
                apply(input);
            }
        });
    }
    for event in ["touchend", "touchcancel"] {
        let touch = touch.clone();
        listeners.listen(window, event, true, move |_: web::TouchEvent| {
            touch.borrow_mut().end();
        });
    }

    listeners.listen(window, "keydown", false, move |ev: web::KeyboardEvent| {
        let in_field = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| is_editable_tag(&el.tag_name()))
            .unwrap_or(false);
        if in_field {
            return;
        }
        let modifier = ev.alt_key() || ev.ctrl_key() || ev.meta_key();
        if let Some(input) = key_input(&ev.key(), ev.shift_key(), modifier) {
            ev.prevent_default();
            apply(input);
        }
    });
    log::info!("[input] scroll listeners ready ({} total)", listeners.len());
}
