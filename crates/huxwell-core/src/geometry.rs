//! Geometry building: per-point attributes, connectivity and line buffers.
//!
//! Everything here runs once at scene setup. After upload the device owns all
//! per-point animation; the host only updates uniforms.

use crate::constants::*;
use crate::error::{SceneError, SceneResult};
use crate::points::{fibonacci_sphere, unit_direction, OrganicShape, RadialFill};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

mod edges;
mod shell;

pub use edges::{build_edges, DistanceWindow, Edge};
pub use shell::icosphere_wire;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointCategory {
    /// Globe nodes and the organic silhouette.
    Surface,
    /// Volume fill inside the organic form.
    Interior,
    /// Square "transistor" points that grow out of the organic form.
    Structural,
    /// Secondary globe shell revealed late in the scroll.
    Orbital,
}

impl PointCategory {
    /// Float flag as seen by the device programs.
    pub fn as_flag(self) -> f32 {
        match self {
            PointCategory::Surface => 0.0,
            PointCategory::Interior => 1.0,
            PointCategory::Structural => 2.0,
            PointCategory::Orbital => 3.0,
        }
    }

    /// Structural and orbital points reveal on the secondary schedule.
    pub fn is_secondary(self) -> bool {
        matches!(self, PointCategory::Structural | PointCategory::Orbital)
    }

    pub fn is_square(self) -> bool {
        matches!(self, PointCategory::Structural)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub normal: Vec3,
    pub tangent: Vec3,
    /// Uniform in [0, 1).
    pub seed: f32,
    /// Uniform in [0, 2π).
    pub phase: f32,
    /// Appearance order: index / population size, in [0, 1).
    pub order: f32,
    pub category: PointCategory,
}

/// Instance layout for the point pipeline (64 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuPoint {
    pub position: [f32; 3],
    pub seed: f32,
    pub normal: [f32; 3],
    pub phase: f32,
    pub tangent: [f32; 3],
    pub order: f32,
    pub category: f32,
    pub _pad: [f32; 3],
}

impl Point {
    pub fn to_gpu(&self) -> GpuPoint {
        GpuPoint {
            position: self.position.to_array(),
            seed: self.seed,
            normal: self.normal.to_array(),
            phase: self.phase,
            tangent: self.tangent.to_array(),
            order: self.order,
            category: self.category.as_flag(),
            _pad: [0.0; 3],
        }
    }
}

/// Two unit vectors spanning the plane orthogonal to `normal`.
///
/// Crosses with +Y, switching to +X when the normal is (anti)parallel to Y.
pub fn tangent_basis(normal: Vec3) -> SceneResult<(Vec3, Vec3)> {
    let n = normal
        .try_normalize()
        .ok_or(SceneError::DegenerateVector {
            context: "tangent basis normal",
        })?;
    let mut t = n.cross(Vec3::Y);
    if t.length_squared() < 1e-8 {
        t = n.cross(Vec3::X);
    }
    let t = t.normalize();
    let b = n.cross(t);
    Ok((t, b))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Network,
    Orbital,
    Shell,
}

impl LineKind {
    pub fn as_flag(self) -> f32 {
        match self {
            LineKind::Network => 0.0,
            LineKind::Orbital => 1.0,
            LineKind::Shell => 2.0,
        }
    }
}

/// Vertex layout for the line pipeline (32 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuLineVertex {
    pub position: [f32; 3],
    /// Edge parameter: 0 at the first endpoint, 1 at the second.
    pub t: f32,
    pub order: f32,
    pub kind: f32,
    pub seed: f32,
    pub _pad: f32,
}

/// Two vertices per edge, in `LineList` order.
pub fn line_vertices(points: &[Point], edges: &[Edge], kind: LineKind) -> Vec<GpuLineVertex> {
    let mut out = Vec::with_capacity(edges.len() * 2);
    for e in edges {
        let (pa, pb) = (&points[e.a as usize], &points[e.b as usize]);
        let seed = (pa.seed + pb.seed).fract();
        for (p, t) in [(pa, 0.0), (pb, 1.0)] {
            out.push(GpuLineVertex {
                position: p.position.to_array(),
                t,
                order: e.order,
                kind: kind.as_flag(),
                seed,
                _pad: 0.0,
            });
        }
    }
    out
}

/// Static wireframe segments; order and seed are unused for shell lines.
pub fn wire_vertices(segments: &[[Vec3; 2]]) -> Vec<GpuLineVertex> {
    segments
        .iter()
        .flat_map(|[a, b]| {
            [(a, 0.0), (b, 1.0)].map(|(p, t)| GpuLineVertex {
                position: p.to_array(),
                t,
                order: 0.0,
                kind: LineKind::Shell.as_flag(),
                seed: 0.0,
                _pad: 0.0,
            })
        })
        .collect()
}

fn make_point<R: Rng + ?Sized>(
    rng: &mut R,
    position: Vec3,
    normal: Vec3,
    index: usize,
    population: usize,
    category: PointCategory,
) -> SceneResult<Point> {
    let (tangent, _) = tangent_basis(normal)?;
    Ok(Point {
        position,
        normal,
        tangent,
        seed: rng.gen(),
        phase: rng.gen::<f32>() * TAU,
        order: index as f32 / population as f32,
        category,
    })
}

/// Networked globe: surface nodes, their edges, the orbital shell and the
/// wireframe structure.
#[derive(Clone, Debug)]
pub struct GlobeGeometry {
    pub surface: Vec<Point>,
    pub edges: Vec<Edge>,
    pub orbital: Vec<Point>,
    pub orbital_edges: Vec<Edge>,
    pub shell: Vec<[Vec3; 2]>,
}

impl GlobeGeometry {
    pub fn build(seed: u64) -> SceneResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);

        let surface_pos = fibonacci_sphere(GLOBE_NODE_COUNT, GLOBE_RADIUS)?;
        let surface = surface_pos
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let n = p / GLOBE_RADIUS;
                make_point(&mut rng, p, n, i, GLOBE_NODE_COUNT, PointCategory::Surface)
            })
            .collect::<SceneResult<Vec<_>>>()?;
        let orders: Vec<f32> = surface.iter().map(|p| p.order).collect();
        let edges = build_edges(
            &surface_pos,
            &orders,
            DistanceWindow::new(GLOBE_EDGE_MIN, GLOBE_EDGE_MAX),
            GLOBE_EDGE_CAP,
        );

        let orbital_dirs = fibonacci_sphere(ORBITAL_NODE_COUNT, 1.0)?;
        let orbital = orbital_dirs
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let r = ORBITAL_RADIUS + (rng.gen::<f32>() - 0.5) * ORBITAL_RADIAL_JITTER;
                make_point(&mut rng, n * r, n, i, ORBITAL_NODE_COUNT, PointCategory::Orbital)
            })
            .collect::<SceneResult<Vec<_>>>()?;
        let orbital_pos: Vec<Vec3> = orbital.iter().map(|p| p.position).collect();
        let orbital_orders: Vec<f32> = orbital.iter().map(|p| p.order).collect();
        let orbital_edges = build_edges(
            &orbital_pos,
            &orbital_orders,
            DistanceWindow::new(ORBITAL_EDGE_MIN, ORBITAL_EDGE_MAX),
            ORBITAL_EDGE_CAP,
        );

        let mut shell = icosphere_wire(SHELL_OUTER_DETAIL, GLOBE_RADIUS);
        shell.extend(icosphere_wire(
            SHELL_INNER_DETAIL,
            GLOBE_RADIUS * SHELL_INNER_RATIO,
        ));

        log::info!(
            "[geometry] globe nodes={} edges={} orbital={} orbital_edges={} shell_segments={}",
            surface.len(),
            edges.len(),
            orbital.len(),
            orbital_edges.len(),
            shell.len()
        );

        Ok(Self {
            surface,
            edges,
            orbital,
            orbital_edges,
            shell,
        })
    }

    pub fn point_instances(&self) -> Vec<GpuPoint> {
        self.surface
            .iter()
            .chain(self.orbital.iter())
            .map(Point::to_gpu)
            .collect()
    }

    pub fn line_vertices(&self) -> Vec<GpuLineVertex> {
        let mut out = wire_vertices(&self.shell);
        out.extend(line_vertices(&self.surface, &self.edges, LineKind::Network));
        out.extend(line_vertices(
            &self.orbital,
            &self.orbital_edges,
            LineKind::Orbital,
        ));
        out
    }
}

/// Organic point cloud: a solid-looking blob plus protruding structural points.
#[derive(Clone, Debug)]
pub struct BrainGeometry {
    pub points: Vec<Point>,
}

impl BrainGeometry {
    pub fn build(seed: u64) -> SceneResult<Self> {
        Self::build_with(seed, &OrganicShape::default())
    }

    pub fn build_with(seed: u64, shape: &OrganicShape) -> SceneResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let surface_count = (ORGANIC_POINT_COUNT as f32 * ORGANIC_SURFACE_SHARE).floor() as usize;
        let mut points = Vec::with_capacity(ORGANIC_POINT_COUNT + STRUCTURAL_POINT_COUNT);

        for i in 0..ORGANIC_POINT_COUNT {
            let (fill, category) = if i < surface_count {
                (RadialFill::Shell, PointCategory::Surface)
            } else {
                (RadialFill::Volume, PointCategory::Interior)
            };
            let (p, n) = organic_sample(&mut rng, shape, fill);
            points.push(make_point(&mut rng, p, n, i, ORGANIC_POINT_COUNT, category)?);
        }
        for i in 0..STRUCTURAL_POINT_COUNT {
            let (p, n) = organic_sample(&mut rng, shape, RadialFill::Protrude);
            points.push(make_point(
                &mut rng,
                p,
                n,
                i,
                STRUCTURAL_POINT_COUNT,
                PointCategory::Structural,
            )?);
        }

        log::info!(
            "[geometry] organic points={} (surface={} structural={})",
            points.len(),
            surface_count,
            STRUCTURAL_POINT_COUNT
        );
        Ok(Self { points })
    }

    pub fn point_instances(&self) -> Vec<GpuPoint> {
        self.points.iter().map(Point::to_gpu).collect()
    }
}

/// Position and outward normal for one blob point.
fn organic_sample<R: Rng + ?Sized>(
    rng: &mut R,
    shape: &OrganicShape,
    fill: RadialFill,
) -> (Vec3, Vec3) {
    let dir = unit_direction(rng);
    let surface = shape.deform(dir);
    let position = surface * fill.sample(rng);
    let normal = surface.try_normalize().unwrap_or(dir);
    (position, normal)
}
