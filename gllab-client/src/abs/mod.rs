//! This module contains the thin wrappers over SDL2 and OpenGL: application setup, shader
//! management, meshes and textures.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
