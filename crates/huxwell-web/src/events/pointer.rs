use super::Listeners;
use glam::Vec2;
use huxwell_core::{client_to_ndc, AnimationContext};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the pointer over the whole window, expressed in canvas NDC.
pub fn wire_pointer(
    listeners: &mut Listeners,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: Rc<RefCell<AnimationContext>>,
) {
    let canvas = canvas.clone();
    listeners.listen(window, "pointermove", true, move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        let ndc = client_to_ndc(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        );
        if let Some(ndc) = ndc {
            ctx.borrow_mut().set_pointer_ndc(ndc);
        }
    });
}
