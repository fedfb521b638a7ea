//! View-model for the page chrome drawn over the canvas.

use crate::composer::Mode;
use crate::constants::INTRO_HIDE_PERCENT;

/// Snapshot of what the overlay should show; the front-end diffs successive
/// snapshots and only touches the DOM on change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayModel {
    pub percent: u8,
    /// Zero-padded three digit counter, e.g. `"007"`.
    pub counter: String,
    pub intro_visible: bool,
    pub tagline: &'static str,
    pub mode: Mode,
}

impl OverlayModel {
    pub fn new(progress: f32, mode: Mode) -> Self {
        let percent = (progress.clamp(0.0, 1.0) * 100.0).round() as u8;
        Self {
            percent,
            counter: format!("{:03}", percent),
            intro_visible: percent < INTRO_HIDE_PERCENT,
            tagline: tagline(mode),
            mode,
        }
    }
}

#[inline]
pub fn tagline(mode: Mode) -> &'static str {
    match mode {
        Mode::World => "The Connected World",
        Mode::Mind => "The Synthesized Mind",
    }
}
