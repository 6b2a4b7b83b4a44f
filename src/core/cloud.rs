//! Point set of a subdivided icosahedron.

use fnv::FnvHashSet;
use glam::Vec3;

const PHI: f32 = 1.618_034;

const ICO_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const ICO_FACES: [[u32; 3]; 20] = [
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

/// Barycentric key: up to three (corner, weight) pairs, sorted by corner.
type PointKey = [(u32, u32); 3];

fn point_key(face: &[u32; 3], weights: [u32; 3]) -> PointKey {
    let mut key = [(u32::MAX, 0); 3];
    let mut n = 0;
    for (corner, w) in face.iter().zip(weights) {
        if w > 0 {
            key[n] = (*corner, w);
            n += 1;
        }
    }
    key[..n].sort_unstable();
    key
}

/// Unique vertices of an icosahedron whose faces are each split into
/// `(detail + 1)²` triangles, projected onto a sphere of `radius`.
///
/// Points shared between faces are emitted once, so the count is
/// `10 · (detail + 1)² + 2`.
pub fn icosphere_points(radius: f32, detail: u32) -> Vec<[f32; 3]> {
    let n = detail + 1;
    let mut seen: FnvHashSet<PointKey> = FnvHashSet::default();
    let mut points = Vec::with_capacity((10 * n * n + 2) as usize);

    for face in &ICO_FACES {
        let corners = face.map(|i| Vec3::from(ICO_VERTICES[i as usize]));
        for i in 0..=n {
            for j in 0..=(n - i) {
                let k = n - i - j;
                let key = point_key(face, [i, j, k]);
                if !seen.insert(key) {
                    continue;
                }
                let p = (corners[0] * i as f32 + corners[1] * j as f32 + corners[2] * k as f32)
                    / n as f32;
                let p = p.normalize() * radius;
                points.push(p.to_array());
            }
        }
    }
    points
}

/// Rigid decorative point cloud; only its translation changes per tick.
pub struct PointCloud {
    points: Vec<[f32; 3]>,
    position: Vec3,
}

impl PointCloud {
    pub fn icosphere(radius: f32, detail: u32, position: Vec3) -> Self {
        Self {
            points: icosphere_points(radius, detail),
            position,
        }
    }

    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
