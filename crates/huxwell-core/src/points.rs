//! Procedural point generation.
//!
//! Two generators feed the scene: an evenly spaced Fibonacci sphere for the
//! networked globe, and an organic blob built by distorting random unit
//! directions for the mind visualization.

use crate::constants::*;
use crate::error::{SceneError, SceneResult};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Evenly distribute `count` points over a sphere of `radius`.
///
/// Walks the golden angle in longitude while stepping latitude linearly from
/// the north pole to the south pole, which gives equal-area spacing with no
/// coincident points. Needs at least two points because the latitude step
/// divides by `count - 1`.
pub fn fibonacci_sphere(count: usize, radius: f32) -> SceneResult<Vec<Vec3>> {
    if count < 2 {
        return Err(SceneError::InvalidPointCount { count, min: 2 });
    }
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    let last = (count - 1) as f32;
    let points = (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 / last) * 2.0;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f32;
            Vec3::new(theta.cos() * r, y, theta.sin() * r) * radius
        })
        .collect();
    Ok(points)
}

/// Uniformly distributed direction on the unit sphere.
pub fn unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// A localised Gaussian swelling: `1 + gain * exp(-(v - centre)^2 * falloff)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bulge {
    pub gain: f32,
    pub centre: f32,
    pub falloff: f32,
}

impl Bulge {
    #[inline]
    pub fn factor(&self, v: f32) -> f32 {
        let d = v - self.centre;
        1.0 + self.gain * (-d * d * self.falloff).exp()
    }
}

/// Two-axis swelling for the rear-lower lobe, multiplied by `squash`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RearLobe {
    pub gain: f32,
    pub centre_z: f32,
    pub centre_y: f32,
    pub falloff_z: f32,
    pub falloff_y: f32,
    pub squash: f32,
}

impl RearLobe {
    #[inline]
    pub fn factor(&self, z: f32, y: f32) -> f32 {
        let dz = z - self.centre_z;
        let dy = y - self.centre_y;
        let swell = 1.0 + self.gain * (-dz * dz * self.falloff_z - dy * dy * self.falloff_y).exp();
        swell * self.squash
    }
}

/// Tuning for the organic blob.
///
/// Transforms are applied in field order. Region gates are plain thresholds on
/// the already-transformed coordinates, so the order matters.
#[derive(Clone, Debug, PartialEq)]
pub struct OrganicShape {
    pub proportions: Vec3,
    /// Pushes the two x halves apart to suggest hemispheres.
    pub hemisphere_gap: f32,
    pub flatten_above: f32,
    pub flatten_factor: f32,
    /// Widens x near the front (z > `frontal_gate`).
    pub frontal_gate: f32,
    pub frontal: Bulge,
    /// Deepens z low on the sides (y < `temporal_gate_y`, |x| > `temporal_gate_x`).
    pub temporal_gate_y: f32,
    pub temporal_gate_x: f32,
    pub temporal: Bulge,
    /// Rear-lower lobe (z < `rear_gate_z`, y < `rear_gate_y`).
    pub rear_gate_z: f32,
    pub rear_gate_y: f32,
    pub rear: RearLobe,
    pub ripple_frequency: Vec3,
    pub ripple_amplitude: f32,
}

impl Default for OrganicShape {
    fn default() -> Self {
        Self {
            proportions: Vec3::new(1.35, 1.05, 1.15),
            hemisphere_gap: 0.07,
            flatten_above: 0.7,
            flatten_factor: 0.85,
            frontal_gate: 0.4,
            frontal: Bulge {
                gain: 0.2,
                centre: 0.7,
                falloff: 5.0,
            },
            temporal_gate_y: -0.3,
            temporal_gate_x: 0.5,
            temporal: Bulge {
                gain: 0.15,
                centre: -0.5,
                falloff: 4.0,
            },
            rear_gate_z: -0.5,
            rear_gate_y: -0.2,
            rear: RearLobe {
                gain: 0.2,
                centre_z: -0.7,
                centre_y: -0.4,
                falloff_z: 4.0,
                falloff_y: 3.0,
                squash: 0.8,
            },
            ripple_frequency: Vec3::new(8.0, 6.0, 7.0),
            ripple_amplitude: 0.08,
        }
    }
}

impl OrganicShape {
    /// Deform a unit direction into a point on the blob surface.
    pub fn deform(&self, dir: Vec3) -> Vec3 {
        let mut p = dir * self.proportions;

        p.x += if p.x > 0.0 {
            self.hemisphere_gap
        } else {
            -self.hemisphere_gap
        };

        if p.y > self.flatten_above {
            p.y *= self.flatten_factor;
        }

        if p.z > self.frontal_gate {
            p.x *= self.frontal.factor(p.z);
        }

        if p.y < self.temporal_gate_y && p.x.abs() > self.temporal_gate_x {
            p.z *= self.temporal.factor(p.y);
        }

        if p.z < self.rear_gate_z && p.y < self.rear_gate_y {
            p.x *= self.rear.factor(p.z, p.y);
        }

        let r = p.length();
        let f = self.ripple_frequency;
        let ripple = (p.x * f.x).sin() * (p.y * f.y).cos() * (p.z * f.z).sin() * self.ripple_amplitude;
        let divisor = if r > 0.0 { r } else { 1.0 };
        p * ((r + ripple) / divisor)
    }
}

/// One random point on the organic blob surface.
pub fn organic_point<R: Rng + ?Sized>(rng: &mut R, shape: &OrganicShape) -> Vec3 {
    shape.deform(unit_direction(rng))
}

/// How far from the centre a blob point is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadialFill {
    /// Thin band just under the surface; gives the silhouette.
    Shell,
    /// Cube-root sampled so the interior fills by volume, not by radius.
    Volume,
    /// Slightly outside the surface; used by structural points.
    Protrude,
}

impl RadialFill {
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        let u: f32 = rng.gen();
        match self {
            RadialFill::Shell => SHELL_FILL_MIN + u * SHELL_FILL_SPAN,
            RadialFill::Volume => u.cbrt() * VOLUME_FILL_MAX,
            RadialFill::Protrude => PROTRUDE_FILL_MIN + u * PROTRUDE_FILL_SPAN,
        }
    }
}
