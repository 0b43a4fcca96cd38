//! The fixed meshes used by the exercises.

use glam::{Vec2, Vec3};

use super::{ColorVertex, MeshData, NormalVertex, PositionVertex, TexturedVertex};

const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Two triangles sharing a diagonal, wound as `(0, 1, 2)` and `(0, 3, 1)`.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 3, 1];

/// The corners of each cube face, in the order the face indices expect.
const CUBE_FACES: [[Vec3; 4]; 6] = [
    [
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(-0.5, -0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(0.5, 0.5, -0.5),
    ],
    [
        Vec3::new(-0.5, 0.5, 0.5),
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(0.5, 0.5, 0.5),
    ],
    [
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(0.5, 0.5, 0.5),
    ],
    [
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(-0.5, -0.5, -0.5),
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(-0.5, 0.5, 0.5),
    ],
    [
        Vec3::new(-0.5, 0.5, 0.5),
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(0.5, 0.5, 0.5),
    ],
    [
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(-0.5, -0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(0.5, -0.5, 0.5),
    ],
];
const CUBE_FACE_INDICES: [u32; 6] = [0, 1, 3, 3, 1, 2];
const CUBE_CORNER_COLORS: [Vec3; 4] = [
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
];
const CUBE_CORNER_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 1.0),
];

/// Lit cube faces: outward normal plus corners wound `a, b, c` / `c, d, a`.
const LIT_CUBE_FACES: [(Vec3, [Vec3; 4]); 6] = [
    (
        Vec3::NEG_Z,
        [
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
        ],
    ),
    (
        Vec3::Z,
        [
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ],
    ),
    (
        Vec3::NEG_X,
        [
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
        ],
    ),
    (
        Vec3::X,
        [
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, 0.5),
        ],
    ),
    (
        Vec3::NEG_Y,
        [
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(-0.5, -0.5, 0.5),
        ],
    ),
    (
        Vec3::Y,
        [
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ],
    ),
];
const LIT_FACE_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// The green quad from the introduction, colored per vertex.
pub fn intro_quad() -> MeshData<ColorVertex> {
    let positions = [
        Vec3::new(-0.8, 0.6, 0.0),
        Vec3::new(0.8, -0.6, 0.0),
        Vec3::new(-0.8, -0.6, 0.0),
        Vec3::new(0.8, 0.6, 0.0),
    ];
    MeshData {
        vertices: positions
            .into_iter()
            .map(|position| ColorVertex {
                position,
                color: GREEN,
            })
            .collect(),
        indices: QUAD_INDICES.to_vec(),
    }
}

/// A small position-only quad in the lower left corner.
pub fn corner_quad() -> MeshData<PositionVertex> {
    let positions = [
        Vec3::new(-0.9, -0.1, 0.0),
        Vec3::new(-0.1, -0.9, 0.0),
        Vec3::new(-0.9, -0.9, 0.0),
        Vec3::new(-0.1, -0.1, 0.0),
    ];
    MeshData {
        vertices: positions
            .into_iter()
            .map(|position| PositionVertex { position })
            .collect(),
        indices: QUAD_INDICES.to_vec(),
    }
}

/// A textured quad in the upper left quadrant.
pub fn textured_quad() -> MeshData<TexturedVertex> {
    let corners = [
        (Vec3::new(-0.6, 0.5, 0.0), Vec2::new(0.0, 1.0)),
        (Vec3::new(-0.2, 0.2, 0.0), Vec2::new(1.0, 0.0)),
        (Vec3::new(-0.6, 0.2, 0.0), Vec2::new(0.0, 0.0)),
        (Vec3::new(-0.2, 0.5, 0.0), Vec2::new(1.0, 1.0)),
    ];
    MeshData {
        vertices: corners
            .into_iter()
            .map(|(position, uv)| TexturedVertex {
                position,
                color: Vec3::ZERO,
                uv,
            })
            .collect(),
        indices: QUAD_INDICES.to_vec(),
    }
}

/// A textured triangle in the lower right quadrant.
pub fn textured_triangle() -> MeshData<TexturedVertex> {
    let corners = [
        (Vec3::new(0.5, 0.0, 0.0), Vec2::new(0.0, 1.0)),
        (Vec3::new(0.2, -0.3, 0.0), Vec2::new(1.0, 0.0)),
        (Vec3::new(0.8, -0.3, 0.0), Vec2::new(0.0, 0.0)),
    ];
    MeshData {
        vertices: corners
            .into_iter()
            .map(|(position, uv)| TexturedVertex {
                position,
                color: Vec3::ZERO,
                uv,
            })
            .collect(),
        indices: vec![0, 1, 2],
    }
}

/// A small triangle centered on the origin, moved around by model matrices.
pub fn small_triangle() -> MeshData<PositionVertex> {
    let positions = [
        Vec3::new(0.0, 0.2, 0.0),
        Vec3::new(-0.2, 0.0, 0.0),
        Vec3::new(0.2, 0.0, 0.0),
    ];
    MeshData {
        vertices: positions
            .into_iter()
            .map(|position| PositionVertex { position })
            .collect(),
        indices: vec![0, 1, 2],
    }
}

fn cube_with<V>(vertex: impl Fn(Vec3, usize) -> V) -> MeshData<V> {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face_index, face) in CUBE_FACES.iter().enumerate() {
        let base = face_index as u32 * 4;
        vertices.extend(
            face.iter()
                .enumerate()
                .map(|(corner, &position)| vertex(position, corner)),
        );
        indices.extend(CUBE_FACE_INDICES.iter().map(|i| base + i));
    }
    MeshData { vertices, indices }
}

/// A unit cube with a color gradient on every face.
pub fn colored_cube() -> MeshData<ColorVertex> {
    cube_with(|position, corner| ColorVertex {
        position,
        color: CUBE_CORNER_COLORS[corner],
    })
}

/// A unit cube with texture coordinates on every face.
pub fn textured_cube() -> MeshData<TexturedVertex> {
    cube_with(|position, corner| TexturedVertex {
        position,
        color: CUBE_CORNER_COLORS[corner],
        uv: CUBE_CORNER_UVS[corner],
    })
}

/// A unit cube with flat per-face normals.
pub fn lit_cube() -> MeshData<NormalVertex> {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face_index, (normal, corners)) in LIT_CUBE_FACES.iter().enumerate() {
        let base = face_index as u32 * 4;
        vertices.extend(corners.iter().map(|&position| NormalVertex {
            position,
            normal: *normal,
        }));
        indices.extend(LIT_FACE_INDICES.iter().map(|i| base + i));
    }
    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_shapes_are_valid() {
        assert!(intro_quad().is_valid());
        assert!(corner_quad().is_valid());
        assert!(textured_quad().is_valid());
        assert!(textured_triangle().is_valid());
        assert!(small_triangle().is_valid());
    }

    #[test]
    fn test_cube_sizes() {
        for (vertices, indices) in [
            (colored_cube().vertices.len(), colored_cube().indices.len()),
            (textured_cube().vertices.len(), textured_cube().indices.len()),
            (lit_cube().vertices.len(), lit_cube().indices.len()),
        ] {
            assert_eq!(vertices, 24);
            assert_eq!(indices, 36);
        }
        assert!(colored_cube().is_valid());
        assert!(textured_cube().is_valid());
        assert!(lit_cube().is_valid());
    }

    #[test]
    fn test_lit_cube_normals_point_outwards() {
        let cube = lit_cube();
        for vertex in &cube.vertices {
            // Every corner lies on the face the normal points at.
            assert!((vertex.position.dot(vertex.normal) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_textured_cube_covers_whole_texture() {
        let cube = textured_cube();
        for face in cube.vertices.chunks(4) {
            let min = face.iter().fold(Vec2::ONE, |acc, v| acc.min(v.uv));
            let max = face.iter().fold(Vec2::ZERO, |acc, v| acc.max(v.uv));
            assert_eq!(min, Vec2::ZERO);
            assert_eq!(max, Vec2::ONE);
        }
    }
}
