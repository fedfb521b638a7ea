use crate::constants::{
    ACTIVE_CLASS, HIDDEN_CLASS, INTRO_ID, LOADING_ID, MIND_CLASS, MIND_LABEL_ID, MODE_TOGGLE_ID,
    PROGRESS_COUNTER_ID, PROGRESS_FILL_ID, TAGLINE_ID, WORLD_LABEL_ID,
};
use crate::dom;
use huxwell_core::{Mode, OverlayModel};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page chrome over the canvas. Remembers the last model it applied so
/// unchanged frames leave the DOM alone.
pub struct OverlayView {
    document: web::Document,
    last: Option<OverlayModel>,
}

impl OverlayView {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            last: None,
        }
    }

    pub fn apply(&mut self, model: &OverlayModel) {
        let prev = self.last.as_ref();
        let doc = &self.document;
        if prev.map(|p| p.percent) != Some(model.percent) {
            dom::set_style(doc, PROGRESS_FILL_ID, &format!("width:{}%", model.percent));
            dom::set_text(doc, PROGRESS_COUNTER_ID, &model.counter);
        }
        if prev.map(|p| p.intro_visible) != Some(model.intro_visible) {
            dom::set_class(doc, INTRO_ID, HIDDEN_CLASS, !model.intro_visible);
        }
        if prev.map(|p| p.mode) != Some(model.mode) {
            let mind = model.mode == Mode::Mind;
            dom::set_text(doc, TAGLINE_ID, model.tagline);
            dom::set_class(doc, MODE_TOGGLE_ID, MIND_CLASS, mind);
            dom::set_class(doc, WORLD_LABEL_ID, ACTIVE_CLASS, !mind);
            dom::set_class(doc, MIND_LABEL_ID, ACTIVE_CLASS, mind);
        }
        self.last = Some(model.clone());
    }
}

/// Hide the loading screen once `delay_ms` has passed.
pub fn reveal_after_loading(window: &web::Window, document: &web::Document, delay_ms: i32) {
    let doc = document.clone();
    let hide = Closure::once(move || {
        dom::set_class(&doc, LOADING_ID, HIDDEN_CLASS, true);
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        log::warn!("[overlay] timer failed ({:?}); hiding loader now", e);
        dom::set_class(document, LOADING_ID, HIDDEN_CLASS, true);
    }
    hide.forget();
}
