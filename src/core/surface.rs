use crate::core::field::ConeParams;
use glam::Vec3;

/// Square grid in the XZ plane whose heights are rebuilt every tick.
///
/// Topology (vertex layout and triangle indices) is fixed at construction;
/// only the Y component of each position changes.
pub struct DeformableSurface {
    segments: u32,
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    dirty: bool,
}

impl DeformableSurface {
    /// `size` is the edge length, `segments` the number of quads per edge.
    pub fn new(size: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let row = segments + 1;
        let step = size / segments as f32;
        let half = size * 0.5;

        let mut positions = Vec::with_capacity((row * row) as usize);
        for iz in 0..row {
            let z = iz as f32 * step - half;
            for ix in 0..row {
                let x = ix as f32 * step - half;
                positions.push([x, 0.0, z]);
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for iz in 0..segments {
            for ix in 0..segments {
                let a = iz * row + ix;
                let b = a + 1;
                let c = a + row;
                let d = c + 1;
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        Self {
            segments,
            positions,
            indices,
            dirty: true,
        }
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.positions.iter().map(|p| p[1])
    }

    /// Recompute every vertex height around `center`'s XZ projection.
    pub fn deform(&mut self, center: Vec3, params: &ConeParams) {
        for p in &mut self.positions {
            p[1] = params.height_at(p[0] - center.x, p[2] - center.z);
        }
        self.dirty = true;
    }

    /// Returns whether positions changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
