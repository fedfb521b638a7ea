pub mod camera;
pub mod composer;
pub mod constants;
pub mod context;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod input;
pub mod overlay;
pub mod points;
pub mod scroll;
pub mod shading;

pub use camera::*;
pub use composer::*;
pub use context::*;
pub use driver::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use overlay::*;
pub use points::*;
pub use scroll::*;
pub use shading::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../../shaders/points.wgsl");
pub static LINES_WGSL: &str = include_str!("../../../shaders/lines.wgsl");
