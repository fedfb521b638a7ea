use glam::Vec3;
use std::cmp::Ordering;

/// Exclusive distance bounds for retaining a pair as an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceWindow {
    pub min: f32,
    pub max: f32,
}

impl DistanceWindow {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, d: f32) -> bool {
        d > self.min && d < self.max
    }
}

/// A connection between two points of the same population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
    pub length: f32,
    /// Later of the two endpoint appearance orders.
    pub order: f32,
}

/// Sparse reveal graph over `positions`.
///
/// Every pair is measured (O(n²); populations stay in the low thousands),
/// pairs inside `window` are kept, sorted shortest first and cut at `cap`.
/// This picks short links for the reveal choreography; it is neither a
/// spanning structure nor a nearest-neighbour graph.
pub fn build_edges(
    positions: &[Vec3],
    orders: &[f32],
    window: DistanceWindow,
    cap: usize,
) -> Vec<Edge> {
    debug_assert_eq!(positions.len(), orders.len());
    if cap == 0 {
        return Vec::new();
    }
    let mut edges = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let d = positions[i].distance(positions[j]);
            if window.contains(d) {
                edges.push(Edge {
                    a: i as u32,
                    b: j as u32,
                    length: d,
                    order: orders[i].max(orders[j]),
                });
            }
        }
    }
    edges.sort_by(|x, y| x.length.partial_cmp(&y.length).unwrap_or(Ordering::Equal));
    edges.truncate(cap);
    edges
}
