//! Host-side mirror of the point and line device programs.
//!
//! `shaders/points.wgsl` and `shaders/lines.wgsl` evaluate exactly these
//! formulas from [`SceneUniforms`] and [`ShadingParams`]. Keeping a software
//! copy here lets the reveal choreography and pointer response be unit tested;
//! any change to one side must be made to the other.

use crate::geometry::{GpuLineVertex, LineKind, Point, PointCategory};
use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

/// GLSL/WGSL `smoothstep`; reversed edges give a falling curve.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-frame uniforms, binding 0 of both programs (160 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// Pointer in normalized device coordinates.
    pub pointer: [f32; 2],
    /// Surface size in physical pixels.
    pub resolution: [f32; 2],
    pub time: f32,
    pub progress: f32,
    pub pixel_ratio: f32,
    pub milestone_glow: f32,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            pointer: [0.0, 0.0],
            resolution: [1.0, 1.0],
            time: 0.0,
            progress: 0.0,
            pixel_ratio: 1.0,
            milestone_glow: 0.0,
        }
    }
}

impl SceneUniforms {
    pub fn view_proj_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view_proj)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    /// Clip-space position of an object-space point.
    fn clip(&self, object: Vec3) -> glam::Vec4 {
        self.view_proj_matrix() * self.model_matrix() * object.extend(1.0)
    }

    /// Pointer falloff in [0, 1] for an object-space point; 0 behind the eye.
    pub fn pointer_influence(&self, object: Vec3, radius: f32) -> f32 {
        let clip = self.clip(object);
        if clip.w <= 1e-6 {
            return 0.0;
        }
        let ndc = clip.xy() / clip.w;
        let d = ndc.distance(Vec2::from_array(self.pointer));
        1.0 - smoothstep(0.0, radius, d)
    }
}

/// Static per-visualization tuning, binding 1 of both programs (160 bytes).
///
/// Field order is the WGSL struct order. Reveal thresholds are
/// `start + order * stagger`; edges add `edge_reveal_delay` on top of their
/// endpoints' threshold.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadingParams {
    pub breathe_speed: f32,
    pub breathe_amount: f32,
    pub twinkle_amount: f32,
    pub orbit_drift: f32,

    pub alpha_idle: f32,
    pub alpha_full: f32,
    pub alpha_ramp_end: f32,
    pub structural_alpha: f32,

    pub lift_start: f32,
    pub lift_end: f32,
    pub lift_amount: f32,
    pub lift_fade: f32,

    pub grow_start: f32,
    pub grow_end: f32,
    pub grow_amount: f32,
    pub secondary_reveal_start: f32,

    pub point_reveal_start: f32,
    pub point_reveal_stagger: f32,
    pub point_reveal_fade: f32,
    pub secondary_reveal_stagger: f32,

    pub secondary_reveal_fade: f32,
    pub edge_reveal_delay: f32,
    pub edge_reveal_fade: f32,
    pub edge_alpha: f32,

    pub shell_alpha: f32,
    pub pointer_radius: f32,
    pub pointer_push: f32,
    pub pointer_size_boost: f32,

    pub pointer_glow: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub structural_size: f32,

    pub size_attenuation: f32,
    pub pulse_speed: f32,
    pub pulse_width: f32,
    pub pulse_intensity: f32,

    pub milestone_gain: f32,
    pub _pad: [f32; 3],
}

impl ShadingParams {
    /// Networked globe: points fade in by order, edges follow, surface nodes
    /// lift off past the midpoint while the orbital shell appears.
    pub fn globe() -> Self {
        Self {
            breathe_speed: 0.5,
            breathe_amount: 0.01,
            twinkle_amount: 0.0,
            orbit_drift: 0.06,

            alpha_idle: 0.4,
            alpha_full: 1.0,
            alpha_ramp_end: 0.5,
            structural_alpha: 0.9,

            lift_start: 0.5,
            lift_end: 1.0,
            lift_amount: 1.8,
            lift_fade: 0.15,

            grow_start: 0.1,
            grow_end: 0.9,
            grow_amount: 0.0,
            secondary_reveal_start: 0.55,

            point_reveal_start: 0.0,
            point_reveal_stagger: 0.15,
            point_reveal_fade: 0.05,
            secondary_reveal_stagger: 0.25,

            secondary_reveal_fade: 0.08,
            edge_reveal_delay: 0.08,
            edge_reveal_fade: 0.1,
            edge_alpha: 0.12,

            shell_alpha: 0.035,
            pointer_radius: 0.35,
            pointer_push: 0.25,
            pointer_size_boost: 0.8,

            pointer_glow: 0.35,
            size_min: 1.5,
            size_max: 3.0,
            structural_size: 2.5,

            size_attenuation: 300.0,
            pulse_speed: 0.35,
            pulse_width: 0.06,
            pulse_intensity: 2.5,

            milestone_gain: 0.6,
            _pad: [0.0; 3],
        }
    }

    /// Organic form: always visible, breathing interior with a twinkle;
    /// structural points fade in and grow outward with scroll.
    pub fn brain() -> Self {
        Self {
            breathe_speed: 0.8,
            breathe_amount: 0.03,
            twinkle_amount: 0.3,
            orbit_drift: 0.0,

            alpha_idle: 0.5,
            alpha_full: 0.5,
            alpha_ramp_end: 0.5,
            structural_alpha: 0.9,

            lift_start: 0.5,
            lift_end: 1.0,
            lift_amount: 0.0,
            lift_fade: 0.0,

            grow_start: 0.1,
            grow_end: 0.9,
            grow_amount: 0.6,
            secondary_reveal_start: 0.1,

            point_reveal_start: -1.0,
            point_reveal_stagger: 0.0,
            point_reveal_fade: 0.05,
            secondary_reveal_stagger: 0.0,

            secondary_reveal_fade: 0.3,
            edge_reveal_delay: 0.08,
            edge_reveal_fade: 0.1,
            edge_alpha: 0.0,

            shell_alpha: 0.0,
            pointer_radius: 0.35,
            pointer_push: 0.15,
            pointer_size_boost: 0.8,

            pointer_glow: 0.3,
            size_min: 1.8,
            size_max: 1.8,
            structural_size: 2.5,

            size_attenuation: 300.0,
            pulse_speed: 0.35,
            pulse_width: 0.06,
            pulse_intensity: 0.0,

            milestone_gain: 0.6,
            _pad: [0.0; 3],
        }
    }

    /// Scroll progress at which an element of `order` begins to appear.
    pub fn reveal_threshold(&self, order: f32, secondary: bool) -> f32 {
        if secondary {
            self.secondary_reveal_start + order * self.secondary_reveal_stagger
        } else {
            self.point_reveal_start + order * self.point_reveal_stagger
        }
    }

    pub fn point_reveal(&self, order: f32, secondary: bool, progress: f32) -> f32 {
        let th = self.reveal_threshold(order, secondary);
        let fade = if secondary {
            self.secondary_reveal_fade
        } else {
            self.point_reveal_fade
        };
        smoothstep(th, th + fade, progress)
    }

    pub fn edge_threshold(&self, order: f32, secondary: bool) -> f32 {
        self.reveal_threshold(order, secondary) + self.edge_reveal_delay
    }

    pub fn edge_reveal(&self, order: f32, secondary: bool, progress: f32) -> f32 {
        let th = self.edge_threshold(order, secondary);
        smoothstep(th, th + self.edge_reveal_fade, progress)
    }

    /// Progress past which nothing is still fading in.
    pub fn steady_from(&self) -> f32 {
        let primary_edges = self.edge_threshold(1.0, false) + self.edge_reveal_fade;
        let secondary_points = self.reveal_threshold(1.0, true) + self.secondary_reveal_fade;
        let secondary_edges = self.edge_threshold(1.0, true) + self.edge_reveal_fade;
        primary_edges.max(secondary_points).max(secondary_edges)
    }
}

/// Output of the point vertex stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadedPoint {
    /// Displaced object-space position.
    pub position: Vec3,
    /// Footprint diameter in physical pixels.
    pub size_px: f32,
    pub alpha: f32,
}

/// Point vertex stage.
pub fn shade_point(point: &Point, u: &SceneUniforms, params: &ShadingParams) -> ShadedPoint {
    let p = u.progress;
    let t = u.time;
    let category = point.category;
    let mut pos = point.position;

    // Breathing
    let wave = (t * params.breathe_speed + point.phase).sin();
    if category != PointCategory::Structural {
        pos *= 1.0 + wave * params.breathe_amount;
    }
    if category == PointCategory::Orbital {
        pos += point.tangent * wave * params.orbit_drift;
    }

    // Lift-off of globe surface nodes
    let lift = if category == PointCategory::Surface {
        smoothstep(params.lift_start, params.lift_end, p) * point.seed * params.lift_amount
    } else {
        0.0
    };
    pos += point.normal * lift;

    // Structural growth
    if category == PointCategory::Structural {
        let grow = smoothstep(params.grow_start, params.grow_end, p) * point.seed;
        pos *= 1.0 + grow * params.grow_amount;
    }

    let reveal = params.point_reveal(point.order, category.is_secondary(), p);

    let mut alpha = if category == PointCategory::Structural {
        params.structural_alpha
    } else {
        mix(
            params.alpha_idle,
            params.alpha_full,
            smoothstep(0.0, params.alpha_ramp_end, p),
        ) + params.twinkle_amount * (t + point.phase).sin()
    };
    alpha -= lift * params.lift_fade;

    // Pointer attraction
    let influence = u.pointer_influence(pos, params.pointer_radius);
    pos += point.normal * influence * params.pointer_push;
    alpha += influence * params.pointer_glow;
    alpha *= 1.0 + u.milestone_glow * params.milestone_gain;

    let base = if category.is_square() {
        params.structural_size
    } else {
        mix(params.size_min, params.size_max, point.seed)
    };
    let depth = u.clip(pos).w.max(1e-3);
    let size_px = base * (1.0 + influence * params.pointer_size_boost) * params.size_attenuation
        / depth
        * u.pixel_ratio;

    ShadedPoint {
        position: pos,
        size_px,
        alpha: (alpha * reveal).clamp(0.0, 1.0),
    }
}

/// Point fragment stage: alpha inside the footprint, `None` where discarded.
///
/// `uv` is the offset from the footprint centre in [-0.5, 0.5]².
pub fn footprint_alpha(category: PointCategory, uv: Vec2) -> Option<f32> {
    if category.is_square() {
        let edge = uv.x.abs().max(uv.y.abs());
        (edge <= 0.45).then(|| smoothstep(0.45, 0.3, edge))
    } else {
        let d = uv.length();
        (d <= 0.5).then(|| smoothstep(0.5, 0.1, d))
    }
}

fn line_kind(flag: f32) -> LineKind {
    if flag < 0.5 {
        LineKind::Network
    } else if flag < 1.5 {
        LineKind::Orbital
    } else {
        LineKind::Shell
    }
}

/// Line vertex stage: vertex alpha before the travelling pulse.
pub fn shade_edge_vertex(v: &GpuLineVertex, u: &SceneUniforms, params: &ShadingParams) -> f32 {
    let p = u.progress;
    let pos = Vec3::from_array(v.position);
    let kind = line_kind(v.kind);

    let (base, reveal) = match kind {
        LineKind::Shell => (params.shell_alpha, 1.0),
        LineKind::Network => {
            let lifting = smoothstep(params.lift_start, params.lift_end, p);
            (
                params.edge_alpha * (1.0 - lifting * params.lift_fade),
                params.edge_reveal(v.order, false, p),
            )
        }
        LineKind::Orbital => (params.edge_alpha, params.edge_reveal(v.order, true, p)),
    };

    let influence = u.pointer_influence(pos, params.pointer_radius);
    let mut alpha = base * reveal + influence * params.pointer_glow * params.edge_alpha * reveal;
    alpha *= 1.0 + u.milestone_glow * params.milestone_gain;
    alpha.clamp(0.0, 1.0)
}

/// Travelling highlight along an edge; `t` is the interpolated edge parameter.
pub fn edge_pulse(t: f32, time: f32, seed: f32, params: &ShadingParams) -> f32 {
    let head = (time * params.pulse_speed + seed).fract();
    let d = t - head;
    let w = params.pulse_width.max(1e-4);
    (-(d * d) / (2.0 * w * w)).exp()
}

/// Line fragment stage.
pub fn edge_fragment_alpha(
    vertex_alpha: f32,
    t: f32,
    kind: LineKind,
    time: f32,
    seed: f32,
    params: &ShadingParams,
) -> f32 {
    let pulse = match kind {
        LineKind::Shell => 0.0,
        _ => edge_pulse(t, time, seed, params),
    };
    (vertex_alpha * (1.0 + pulse * params.pulse_intensity)).clamp(0.0, 1.0)
}

/// Coarse position in the scroll-driven reveal.
///
/// A pure function of progress, so scrolling back walks the stages in reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealStage {
    Hidden,
    PointReveal,
    EdgeReveal,
    SecondaryReveal,
    Steady,
}

impl RevealStage {
    pub fn at(progress: f32, params: &ShadingParams) -> Self {
        if progress <= params.reveal_threshold(0.0, false) {
            RevealStage::Hidden
        } else if progress < params.edge_threshold(0.0, false) {
            RevealStage::PointReveal
        } else if progress < params.reveal_threshold(0.0, true) {
            RevealStage::EdgeReveal
        } else if progress < params.steady_from() {
            RevealStage::SecondaryReveal
        } else {
            RevealStage::Steady
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_matches_reference_points() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        // reversed edges fall
        assert_eq!(smoothstep(0.5, 0.1, 0.0), 1.0);
        assert_eq!(smoothstep(0.5, 0.1, 0.6), 0.0);
    }

    #[test]
    fn uniform_layouts_match_wgsl_sizes() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 160);
        assert_eq!(std::mem::size_of::<ShadingParams>(), 160);
    }
}
