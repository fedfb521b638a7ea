//! Fixed perspective camera shared by the renderer and the shading mirror.

use glam::{Mat4, Vec3};

pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            aspect: width.max(1) as f32 / height.max(1) as f32,
            ..Self::default()
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_lands_at_screen_centre_one_camera_distance_away() {
        let cam = Camera::with_viewport(1280, 720);
        let clip = cam.view_proj() * Vec3::ZERO.extend(1.0);
        assert!((clip.w - CAMERA_Z).abs() < 1e-5);
        assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
    }

    #[test]
    fn wide_viewport_squeezes_x() {
        let cam = Camera::with_viewport(2000, 1000);
        let right = cam.view_proj() * Vec3::X.extend(1.0);
        let up = cam.view_proj() * Vec3::Y.extend(1.0);
        assert!(((right.x / right.w) * 2.0 - up.y / up.w).abs() < 1e-5);
    }
}
