// Host-side checks that index.html carries every element the front end
// looks up, plus the brand marks.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

const PAGE: &str = include_str!("../index.html");

#[test]
fn page_provides_every_element_id() {
    for id in [
        CANVAS_ID,
        LOADING_ID,
        INTRO_ID,
        TAGLINE_ID,
        PROGRESS_FILL_ID,
        PROGRESS_COUNTER_ID,
        MODE_TOGGLE_ID,
        WORLD_LABEL_ID,
        MIND_LABEL_ID,
    ] {
        assert!(PAGE.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
    }
}

#[test]
fn page_shows_brand_and_contact() {
    assert!(PAGE.contains("<h1>huXwell</h1>"));
    assert!(PAGE.contains("Humanity &times; Technology"));
    assert!(PAGE.contains("href=\"mailto:info@huxwell.co.uk\""));
}

#[test]
fn world_label_starts_active() {
    assert!(PAGE.contains(&format!(
        "id=\"{}\" class=\"{}\"",
        WORLD_LABEL_ID, ACTIVE_CLASS
    )));
}
