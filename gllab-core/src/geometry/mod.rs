//! Vertex layouts and mesh data.
//!
//! The vertex structs are `#[repr(C)]` so the client can upload slices of them as-is and describe
//! their layout with attribute pointers.

use glam::{Vec2, Vec3};

pub mod circle;
pub mod shapes;

/// Position only.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct PositionVertex {
    pub position: Vec3,
}

/// Position and per-vertex color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

/// Position, color and texture coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct TexturedVertex {
    pub position: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

/// Position and surface normal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct NormalVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Indexed triangle data ready for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData<V> {
    pub vertices: Vec<V>,
    pub indices: Vec<u32>,
}

impl<V> MeshData<V> {
    /// Returns `true` if every index references an existing vertex and the indices form whole
    /// triangles.
    pub fn is_valid(&self) -> bool {
        self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&index| (index as usize) < self.vertices.len())
    }
}
