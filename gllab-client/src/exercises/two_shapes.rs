use std::sync::Arc;

use glam::Vec3;
use gllab_core::{geometry::shapes, settings::Settings};

use super::{Exercise, ExerciseError, MAROON, clear};
use crate::abs::{Mesh, ShaderProgram};

/// Two quads, each drawn with its own program.
pub struct TwoShapes {
    colored: ShaderProgram,
    flat: ShaderProgram,
    quad: Mesh,
    corner: Mesh,
}

impl TwoShapes {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        Ok(Self {
            colored: crate::shader_program!(vertex_color, gl, settings.shader_policy)?,
            flat: crate::shader_program!(flat, gl, settings.shader_policy)?,
            quad: Mesh::from_data(gl, &shapes::intro_quad()).map_err(ExerciseError::Resource)?,
            corner: Mesh::from_data(gl, &shapes::corner_quad())
                .map_err(ExerciseError::Resource)?,
        })
    }
}

impl Exercise for TwoShapes {
    fn render(&mut self, gl: &glow::Context) {
        clear(gl, MAROON, false);

        self.colored.use_program();
        self.quad.draw();

        self.flat.use_program();
        self.flat.set_uniform("u_color", Vec3::new(0.0, 0.0, 1.0));
        self.corner.draw();
    }
}
