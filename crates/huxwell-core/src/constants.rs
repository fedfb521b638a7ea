/// Scene tuning constants.
///
/// Every number that shapes the visuals lives here under a name, so the globe
/// and the organic form are one parameterised implementation rather than
/// hand-tuned copies.

// ---------------- Globe (network) ----------------
pub const GLOBE_NODE_COUNT: usize = 800;
pub const GLOBE_RADIUS: f32 = 2.0;

// Network edges between surface nodes (exclusive distance bounds)
pub const GLOBE_EDGE_MIN: f32 = 0.2;
pub const GLOBE_EDGE_MAX: f32 = 0.55;
pub const GLOBE_EDGE_CAP: usize = 350;

// Secondary "orbital" shell revealed late in the scroll
pub const ORBITAL_NODE_COUNT: usize = 160;
pub const ORBITAL_RADIUS: f32 = 2.9;
pub const ORBITAL_RADIAL_JITTER: f32 = 0.25;
pub const ORBITAL_EDGE_MIN: f32 = 0.3;
pub const ORBITAL_EDGE_MAX: f32 = 0.9;
pub const ORBITAL_EDGE_CAP: usize = 120;

// Faint wireframe shells that stay visible from the first frame
pub const SHELL_OUTER_DETAIL: u32 = 3;
pub const SHELL_INNER_DETAIL: u32 = 2;
pub const SHELL_INNER_RATIO: f32 = 0.97;

// ---------------- Organic form (mind) ----------------
pub const ORGANIC_POINT_COUNT: usize = 1800;
pub const STRUCTURAL_POINT_COUNT: usize = 600;
pub const ORGANIC_SURFACE_SHARE: f32 = 0.7;
pub const ORGANIC_BASE_SCALE: f32 = 1.5;

// Radius fractions for the three radial fills
pub const SHELL_FILL_MIN: f32 = 0.85;
pub const SHELL_FILL_SPAN: f32 = 0.15;
pub const VOLUME_FILL_MAX: f32 = 0.85;
pub const PROTRUDE_FILL_MIN: f32 = 0.88;
pub const PROTRUDE_FILL_SPAN: f32 = 0.2;

// ---------------- Scroll / pointer ----------------
pub const WHEEL_STEP_PER_PX: f32 = 0.0008;
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const TOUCH_STEP_PER_PX: f32 = 0.0025;
pub const KEY_ARROW_STEP: f32 = 0.05;
pub const KEY_PAGE_STEP: f32 = 0.2;

// Per-frame exponential smoothing (not scaled by frame time)
pub const SCROLL_SMOOTHING: f32 = 0.075;
pub const SCROLL_SNAP_EPSILON: f32 = 1e-5;

// Progress pinned under a reduced-motion preference
pub const REDUCED_MOTION_PROGRESS: f32 = 0.35;

// ---------------- Animation driver ----------------
pub const ROTATION_FOLLOW: f32 = 0.03;
pub const POINTER_TILT_X: f32 = 0.15;
pub const POINTER_TILT_Y: f32 = 0.25;
pub const GLOBE_SPIN_SPEED: f32 = 0.04;
pub const BRAIN_SPIN_SPEED: f32 = 0.06;
pub const BRAIN_SWAY_AMPLITUDE: f32 = 0.08;
pub const BRAIN_SWAY_SPEED: f32 = 0.2;

pub const ZOOM_START: f32 = 0.5;
pub const ZOOM_DEPTH: f32 = 1.0;
pub const SHRINK_START: f32 = 0.5;
pub const SHRINK_END: f32 = 1.0;
pub const SHRINK_MIN_SCALE: f32 = 0.8;

pub const MILESTONES: [f32; 3] = [0.25, 0.5, 0.75];
pub const MILESTONE_GLOW_SECONDS: f32 = 0.8;

// Large frame gaps (tab in background) are clamped to this
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// ---------------- Scene composer ----------------
pub const MODE_BLEND_FOLLOW: f32 = 0.04;
pub const VISIBLE_SCALE_EPSILON: f32 = 0.01;

// ---------------- Overlay ----------------
pub const INTRO_HIDE_PERCENT: u8 = 5;
