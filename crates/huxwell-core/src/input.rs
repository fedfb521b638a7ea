//! Platform-free mapping from raw scroll input to progress changes.

use crate::constants::*;
use glam::Vec2;

/// How a wheel delta is measured, mirroring `WheelEvent.deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelMode {
    Pixel,
    Line,
    Page,
}

impl WheelMode {
    pub fn from_dom(delta_mode: u32) -> Self {
        match delta_mode {
            1 => WheelMode::Line,
            2 => WheelMode::Page,
            _ => WheelMode::Pixel,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollKey {
    LineDown,
    LineUp,
    PageDown,
    PageUp,
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollInput {
    Wheel { delta_y: f32, mode: WheelMode },
    /// Finger travel since the previous touch event; positive when the finger
    /// moves up the screen.
    Touch { delta_y: f32 },
    Key(ScrollKey),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    By(f32),
    To(f32),
}

impl ScrollInput {
    pub fn to_delta(self, viewport_height: f32) -> ScrollDelta {
        match self {
            ScrollInput::Wheel { delta_y, mode } => {
                let px = match mode {
                    WheelMode::Pixel => delta_y,
                    WheelMode::Line => delta_y * WHEEL_LINE_PX,
                    WheelMode::Page => delta_y * viewport_height.max(1.0),
                };
                ScrollDelta::By(px * WHEEL_STEP_PER_PX)
            }
            ScrollInput::Touch { delta_y } => ScrollDelta::By(delta_y * TOUCH_STEP_PER_PX),
            ScrollInput::Key(key) => match key {
                ScrollKey::LineDown => ScrollDelta::By(KEY_ARROW_STEP),
                ScrollKey::LineUp => ScrollDelta::By(-KEY_ARROW_STEP),
                ScrollKey::PageDown => ScrollDelta::By(KEY_PAGE_STEP),
                ScrollKey::PageUp => ScrollDelta::By(-KEY_PAGE_STEP),
                ScrollKey::Start => ScrollDelta::To(0.0),
                ScrollKey::End => ScrollDelta::To(1.0),
            },
        }
    }
}

/// Keyboard scrolling keys; shift reverses the space bar like a browser does.
#[inline]
pub fn scroll_key(key: &str, shift: bool) -> Option<ScrollKey> {
    match key {
        "ArrowDown" => Some(ScrollKey::LineDown),
        "ArrowUp" => Some(ScrollKey::LineUp),
        "PageDown" => Some(ScrollKey::PageDown),
        "PageUp" => Some(ScrollKey::PageUp),
        " " | "Spacebar" if shift => Some(ScrollKey::PageUp),
        " " | "Spacebar" => Some(ScrollKey::PageDown),
        "Home" => Some(ScrollKey::Start),
        "End" => Some(ScrollKey::End),
        _ => None,
    }
}

/// Client-space pointer position to NDC relative to an element's rectangle.
///
/// Returns `None` for an empty rectangle.
#[inline]
pub fn client_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let uv = (client - rect_origin) / rect_size;
    Some(Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0))
}
