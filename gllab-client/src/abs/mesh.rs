//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing indexed triangle data on the GPU side.
//! Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use glow::HasContext;
use gllab_core::geometry::{ColorVertex, MeshData, NormalVertex, PositionVertex, TexturedVertex};

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs(gl: &glow::Context);
}

const F32: i32 = std::mem::size_of::<f32>() as i32;

/// Enables attribute `index` as `components` floats at `offset` floats into a vertex of `V`.
unsafe fn float_attrib<V>(gl: &glow::Context, index: u32, components: i32, offset: i32) {
    unsafe {
        gl.vertex_attrib_pointer_f32(
            index,
            components,
            glow::FLOAT,
            false,
            std::mem::size_of::<V>() as i32,
            offset * F32,
        );
        gl.enable_vertex_attrib_array(index);
    }
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            float_attrib::<Self>(gl, 0, 3, 0);
        }
    }
}

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            float_attrib::<Self>(gl, 0, 3, 0);
            float_attrib::<Self>(gl, 1, 3, 3);
        }
    }
}

impl Vertex for TexturedVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            float_attrib::<Self>(gl, 0, 3, 0);
            float_attrib::<Self>(gl, 1, 3, 3);
            float_attrib::<Self>(gl, 2, 2, 6);
        }
    }
}

impl Vertex for NormalVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            float_attrib::<Self>(gl, 0, 3, 0);
            float_attrib::<Self>(gl, 1, 3, 3);
        }
    }
}

fn as_bytes<T>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    index_count: usize,
}

impl Mesh {
    /// Creates a new mesh from the given vertex and index data.
    pub fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: &[u32],
    ) -> Result<Self, String> {
        unsafe {
            let vao = gl.create_vertex_array()?;
            let vbo = gl.create_buffer()?;
            let ebo = gl.create_buffer()?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(vertices), glow::DYNAMIC_DRAW);

            // The element buffer binding is recorded in the VAO, so it stays bound.
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                as_bytes(indices),
                glow::DYNAMIC_DRAW,
            );

            V::vertex_attribs(gl);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                ebo,
                index_count: indices.len(),
            })
        }
    }

    /// Uploads prepared [`MeshData`].
    pub fn from_data<V: Vertex>(gl: &Arc<glow::Context>, data: &MeshData<V>) -> Result<Self, String> {
        Self::new(gl, &data.vertices, &data.indices)
    }

    /// Replaces the vertex and index data. Both buffers are re-uploaded in full.
    pub fn update<V: Vertex>(&mut self, vertices: &[V], indices: &[u32]) {
        unsafe {
            self.index_count = indices.len();

            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                as_bytes(vertices),
                glow::DYNAMIC_DRAW,
            );

            self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.ebo));
            self.gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                as_bytes(indices),
                glow::DYNAMIC_DRAW,
            );

            self.gl.bind_vertex_array(None);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    /// Draws the mesh as triangles. Nothing is submitted when there are no indices.
    pub fn draw(&self) {
        if self.index_count == 0 {
            return;
        }
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.draw_elements(
                glow::TRIANGLES,
                self.index_count as i32,
                glow::UNSIGNED_INT,
                0,
            );
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_buffer(self.ebo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
