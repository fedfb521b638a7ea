// Browser tests: run with `wasm-pack test --headless --firefox crates/huxwell-web`.
#![cfg(target_arch = "wasm32")]

use huxwell_web::{start_loop, Listeners};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn dropping_listeners_unregisters_them() {
    let target = document().create_element("div").unwrap();
    let hits = Rc::new(Cell::new(0));
    let mut listeners = Listeners::default();
    let counter = hits.clone();
    listeners.listen(&target, "ping", true, move |_: web_sys::Event| {
        counter.set(counter.get() + 1);
    });
    assert_eq!(listeners.len(), 1);

    let ping = web_sys::Event::new("ping").unwrap();
    target.dispatch_event(&ping).unwrap();
    assert_eq!(hits.get(), 1);

    drop(listeners);
    target.dispatch_event(&ping).unwrap();
    assert_eq!(hits.get(), 1);
    // The handler's captures went with it
    assert_eq!(Rc::strong_count(&hits), 1);
}

#[wasm_bindgen_test]
fn stopping_the_loop_releases_its_state() {
    let owned = Rc::new(());
    let held = owned.clone();
    let running = start_loop(move || {
        let _ = &held;
    });
    assert!(running.is_running());
    assert_eq!(Rc::strong_count(&owned), 2);

    running.stop();
    assert!(!running.is_running());
    assert_eq!(Rc::strong_count(&owned), 1);
}
