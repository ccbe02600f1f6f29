/// Static cube geometry: positions, per-face colors and triangle indices
use thiserror::Error;

/// 6 faces x 4 corners x (x, y, z), faces ordered back, front, left, right, bottom, top
#[rustfmt::skip]
pub const CUBE_POSITIONS: [f32; 72] = [
    -1.0, -1.0, -1.0,   1.0, -1.0, -1.0,   1.0,  1.0, -1.0,  -1.0,  1.0, -1.0,
    -1.0, -1.0,  1.0,   1.0, -1.0,  1.0,   1.0,  1.0,  1.0,  -1.0,  1.0,  1.0,
    -1.0, -1.0, -1.0,  -1.0,  1.0, -1.0,  -1.0,  1.0,  1.0,  -1.0, -1.0,  1.0,
     1.0, -1.0, -1.0,   1.0,  1.0, -1.0,   1.0,  1.0,  1.0,   1.0, -1.0,  1.0,
    -1.0, -1.0, -1.0,  -1.0, -1.0,  1.0,   1.0, -1.0,  1.0,   1.0, -1.0, -1.0,
    -1.0,  1.0, -1.0,  -1.0,  1.0,  1.0,   1.0,  1.0,  1.0,   1.0,  1.0, -1.0,
];

/// One flat RGB per face, repeated for its 4 corners.
///
/// The first two faces carry channels above 1.0. They are uploaded as-is;
/// see [`effective_color`] for what ends up in the framebuffer.
#[rustfmt::skip]
pub const CUBE_COLORS: [f32; 72] = [
    5.0, 3.0, 7.0,  5.0, 3.0, 7.0,  5.0, 3.0, 7.0,  5.0, 3.0, 7.0,
    1.0, 1.0, 3.0,  1.0, 1.0, 3.0,  1.0, 1.0, 3.0,  1.0, 1.0, 3.0,
    0.0, 0.0, 1.0,  0.0, 0.0, 1.0,  0.0, 0.0, 1.0,  0.0, 0.0, 1.0,
    1.0, 0.0, 0.0,  1.0, 0.0, 0.0,  1.0, 0.0, 0.0,  1.0, 0.0, 0.0,
    1.0, 1.0, 0.0,  1.0, 1.0, 0.0,  1.0, 1.0, 0.0,  1.0, 1.0, 0.0,
    0.0, 1.0, 0.0,  0.0, 1.0, 0.0,  0.0, 1.0, 0.0,  0.0, 1.0, 0.0,
];

/// Two triangles per face, fanning from each face's first corner
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2,  0, 2, 3,
    4, 5, 6,  4, 6, 7,
    8, 9, 10,  8, 10, 11,
    12, 13, 14,  12, 14, 15,
    16, 17, 18,  16, 18, 19,
    20, 21, 22,  20, 22, 23,
];

#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("attribute `{name}` has {len} floats, not a multiple of 3")]
    RaggedAttribute { name: &'static str, len: usize },

    #[error("{colors} colors for {positions} positions")]
    AttributeMismatch { positions: usize, colors: usize },

    #[error("index {index} at slot {slot} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        slot: usize,
        index: u16,
        vertex_count: usize,
    },
}

/// Indexed mesh with a position and a color per vertex, borrowed from static data
#[derive(Debug, Clone, Copy)]
pub struct ColoredMesh<'a> {
    pub positions: &'a [f32],
    pub colors: &'a [f32],
    pub indices: &'a [u16],
}

impl ColoredMesh<'static> {
    /// The 24-vertex, 36-index cube drawn by the renderer
    pub fn cube() -> Self {
        Self {
            positions: &CUBE_POSITIONS,
            colors: &CUBE_COLORS,
            indices: &CUBE_INDICES,
        }
    }
}

impl<'a> ColoredMesh<'a> {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of indices, which is also the draw count
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        for (name, data) in [("position", self.positions), ("color", self.colors)] {
            if data.len() % 3 != 0 {
                return Err(MeshError::RaggedAttribute {
                    name,
                    len: data.len(),
                });
            }
        }

        if self.positions.len() != self.colors.len() {
            return Err(MeshError::AttributeMismatch {
                positions: self.vertex_count(),
                colors: self.colors.len() / 3,
            });
        }

        let vertex_count = self.vertex_count();
        if let Some(slot) = self
            .indices
            .iter()
            .position(|&index| index as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                slot,
                index: self.indices[slot],
                vertex_count,
            });
        }

        Ok(())
    }
}

/// Color of a vertex as stored by a fixed-point framebuffer.
///
/// WebGL's default drawing buffer is normalized unsigned, so fragment output
/// is clamped to [0, 1] per channel on write. Panics if `vertex` is out of range.
pub fn effective_color(mesh: &ColoredMesh<'_>, vertex: usize) -> [f32; 3] {
    let rgb = &mesh.colors[vertex * 3..vertex * 3 + 3];
    [
        rgb[0].clamp(0.0, 1.0),
        rgb[1].clamp(0.0, 1.0),
        rgb[2].clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = ColoredMesh::cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.index_count(), 36);
        assert_eq!(cube.colors.len(), 72);
    }

    #[test]
    fn test_cube_indices_in_range() {
        let cube = ColoredMesh::cube();
        assert!(cube.indices.iter().all(|&i| i <= 23));
        assert_eq!(cube.validate(), Ok(()));
    }

    #[test]
    fn test_each_face_is_planar() {
        // Every face lies on one of the six planes |axis| = 1
        for face in CUBE_POSITIONS.chunks(12) {
            let constant_axis = (0..3).find(|&axis| {
                let first = face[axis];
                first.abs() == 1.0 && face.chunks(3).all(|v| v[axis] == first)
            });
            assert!(constant_axis.is_some(), "face {:?} is not axis aligned", face);
        }
    }

    #[test]
    fn test_flat_color_per_face() {
        for face in CUBE_COLORS.chunks(12) {
            assert!(face.chunks(3).all(|c| c == &face[0..3]));
        }
    }

    #[test]
    fn test_out_of_range_colors_clamp() {
        let cube = ColoredMesh::cube();
        assert_eq!(effective_color(&cube, 0), [1.0, 1.0, 1.0]);
        assert_eq!(effective_color(&cube, 4), [1.0, 1.0, 1.0]);
        assert_eq!(effective_color(&cube, 8), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_validate_rejects_bad_index() {
        let indices: [u16; 3] = [0, 1, 24];
        let mesh = ColoredMesh {
            indices: &indices,
            ..ColoredMesh::cube()
        };
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                slot: 2,
                index: 24,
                vertex_count: 24
            })
        );
    }

    #[test]
    fn test_validate_rejects_mismatched_attributes() {
        let mesh = ColoredMesh {
            colors: &CUBE_COLORS[..69],
            ..ColoredMesh::cube()
        };
        assert_eq!(
            mesh.validate(),
            Err(MeshError::AttributeMismatch {
                positions: 24,
                colors: 23
            })
        );

        let mesh = ColoredMesh {
            positions: &CUBE_POSITIONS[..70],
            ..ColoredMesh::cube()
        };
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::RaggedAttribute { name: "position", .. })
        ));
    }
}
