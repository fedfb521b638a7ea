use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> Vec<Vec3> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]
    .iter()
    .map(|v| Vec3::from_array(*v).normalize())
    .collect()
}

#[inline]
fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Identity of a grid vertex as integer weights on base icosahedron corners.
/// Vertices on a shared face edge get the same key from both faces.
type WeldKey = [(u32, u32); 3];

fn weld_key(corners: [u32; 3], weights: [u32; 3]) -> WeldKey {
    let mut key = [(u32::MAX, 0); 3];
    for (slot, (c, w)) in key.iter_mut().zip(corners.into_iter().zip(weights)) {
        if w > 0 {
            *slot = (c, w);
        }
    }
    key.sort_unstable();
    key
}

/// Unique wireframe segments of an icosahedron whose face edges are each
/// split into `detail + 1` parts, projected onto a sphere of `radius`.
///
/// A frequency `f = detail + 1` geodesic sphere has `30 * f^2` edges.
pub fn icosphere_wire(detail: u32, radius: f32) -> Vec<[Vec3; 2]> {
    let base = icosahedron_vertices();
    let cols = detail + 1;

    let mut vertices: Vec<Vec3> = Vec::new();
    let mut welded: FnvHashMap<WeldKey, u32> = FnvHashMap::default();
    let mut triangles: Vec<[u32; 3]> = Vec::with_capacity(20 * (cols * cols) as usize);

    for corners in ICOSAHEDRON_FACES {
        let [a, b, c] = corners.map(|i| base[i as usize]);
        // Row i sits i steps from the a-b edge towards c and holds cols - i + 1
        // vertices running from the a side to the b side.
        let grid: Vec<Vec<u32>> = (0..=cols)
            .map(|i| {
                let rows = cols - i;
                (0..=rows)
                    .map(|j| {
                        let weights = [rows - j, j, i];
                        *welded
                            .entry(weld_key(corners, weights))
                            .or_insert_with(|| {
                                let [wa, wb, wc] = weights.map(|w| w as f32);
                                vertices.push((a * wa + b * wb + c * wc).normalize());
                                (vertices.len() - 1) as u32
                            })
                    })
                    .collect()
            })
            .collect();
        let cols = cols as usize;
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                if j % 2 == 0 {
                    triangles.push([grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
                } else {
                    triangles.push([grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
                }
            }
        }
    }

    let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    let mut segments = Vec::new();
    for [a, b, c] in triangles {
        for (x, y) in [(a, b), (b, c), (c, a)] {
            if seen.insert(edge_key(x, y)) {
                segments.push([vertices[x as usize] * radius, vertices[y as usize] * radius]);
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_icosahedron_has_thirty_edges() {
        assert_eq!(icosphere_wire(0, 1.0).len(), 30);
    }

    #[test]
    fn detail_splits_each_edge_into_detail_plus_one_parts() {
        // E = 30 * (detail + 1)^2
        assert_eq!(icosphere_wire(1, 1.0).len(), 120);
        assert_eq!(icosphere_wire(2, 1.0).len(), 270);
        assert_eq!(icosphere_wire(3, 1.0).len(), 480);
    }

    #[test]
    fn neighbouring_faces_share_their_border_vertices() {
        // V = 10 * f^2 + 2 for a frequency-f geodesic sphere
        let mut ends: Vec<[u32; 3]> = icosphere_wire(3, 1.0)
            .iter()
            .flat_map(|[a, b]| [a.to_array().map(f32::to_bits), b.to_array().map(f32::to_bits)])
            .collect();
        ends.sort_unstable();
        ends.dedup();
        assert_eq!(ends.len(), 10 * 16 + 2);
    }

    #[test]
    fn segments_lie_on_the_sphere() {
        for [a, b] in icosphere_wire(2, 2.0) {
            assert!((a.length() - 2.0).abs() < 1e-4);
            assert!((b.length() - 2.0).abs() < 1e-4);
        }
    }
}
