// Pure DOM-event to scroll-input mapping; no web-sys types so it tests on the host.

use huxwell_core::{scroll_key, ScrollInput, WheelMode};

/// Turns successive `touchmove` positions into scroll deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTracker {
    last_y: Option<f32>,
}

impl TouchTracker {
    pub fn start(&mut self, client_y: f32) {
        self.last_y = Some(client_y);
    }

    /// Finger travel since the previous event; moving up scrolls forward.
    pub fn move_to(&mut self, client_y: f32) -> Option<ScrollInput> {
        let last = self.last_y.replace(client_y)?;
        let delta_y = last - client_y;
        (delta_y != 0.0 && delta_y.is_finite()).then_some(ScrollInput::Touch { delta_y })
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }

    pub fn is_active(&self) -> bool {
        self.last_y.is_some()
    }
}

#[inline]
pub fn wheel_input(delta_y: f64, delta_mode: u32) -> Option<ScrollInput> {
    let delta_y = delta_y as f32;
    (delta_y != 0.0 && delta_y.is_finite()).then_some(ScrollInput::Wheel {
        delta_y,
        mode: WheelMode::from_dom(delta_mode),
    })
}

/// Scrolling keys, ignored while a modifier other than shift is held.
#[inline]
pub fn key_input(key: &str, shift: bool, other_modifier: bool) -> Option<ScrollInput> {
    if other_modifier {
        return None;
    }
    scroll_key(key, shift).map(ScrollInput::Key)
}

/// Keys typed into form fields belong to the field.
#[inline]
pub fn is_editable_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
