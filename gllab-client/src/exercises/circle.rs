use std::sync::Arc;

use glam::Vec3;
use gllab_core::{geometry::circle::CircleFan, settings::Settings};

use super::{Exercise, ExerciseError, MAROON, clear};
use crate::abs::{Mesh, ShaderProgram};

pub const TRIANGLES: u32 = 8;
pub const RADIUS: f32 = 0.5;

/// A fixed triangle fan approximating a circle.
pub struct Circle {
    program: ShaderProgram,
    mesh: Mesh,
}

impl Circle {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        let fan = CircleFan::new(TRIANGLES, RADIUS);
        Ok(Self {
            program: crate::shader_program!(flat, gl, settings.shader_policy)?,
            mesh: Mesh::new(gl, fan.vertices(), fan.indices()).map_err(ExerciseError::Resource)?,
        })
    }
}

impl Exercise for Circle {
    fn render(&mut self, gl: &glow::Context) {
        clear(gl, MAROON, false);
        self.program.use_program();
        self.program.set_uniform("u_color", Vec3::new(0.0, 0.0, 1.0));
        self.mesh.draw();
    }
}
