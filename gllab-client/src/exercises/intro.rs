use std::sync::Arc;

use gllab_core::{geometry::shapes, settings::Settings};

use super::{Exercise, ExerciseError, MAROON, clear};
use crate::abs::{Mesh, ShaderProgram};

/// A green quad from two indexed triangles.
pub struct Intro {
    program: ShaderProgram,
    quad: Mesh,
}

impl Intro {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        Ok(Self {
            program: crate::shader_program!(vertex_color, gl, settings.shader_policy)?,
            quad: Mesh::from_data(gl, &shapes::intro_quad()).map_err(ExerciseError::Resource)?,
        })
    }
}

impl Exercise for Intro {
    fn render(&mut self, gl: &glow::Context) {
        clear(gl, MAROON, false);
        self.program.use_program();
        self.quad.draw();
    }
}
