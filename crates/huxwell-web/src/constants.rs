// Front-end constants: DOM ids the page must provide, and page timing.

// Element ids looked up at start-up
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_ID: &str = "loading";
pub const INTRO_ID: &str = "intro";
pub const TAGLINE_ID: &str = "tagline";
pub const PROGRESS_FILL_ID: &str = "progress-fill";
pub const PROGRESS_COUNTER_ID: &str = "progress-counter";
pub const MODE_TOGGLE_ID: &str = "mode-toggle";
pub const WORLD_LABEL_ID: &str = "label-world";
pub const MIND_LABEL_ID: &str = "label-mind";

// Class names toggled on overlay elements
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const MIND_CLASS: &str = "mind";

// Loading screen fades out this long after the first frame is scheduled
pub const LOADING_REVEAL_MS: i32 = 600;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// devicePixelRatio is capped to keep fill-rate sane on dense displays
pub const MAX_PIXEL_RATIO: f64 = 2.0;
