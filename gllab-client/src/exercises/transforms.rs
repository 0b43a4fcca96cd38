use std::sync::Arc;

use gllab_core::{
    animation::{Spin, triangle_instances},
    geometry::shapes,
    input::UpdateContext,
    settings::Settings,
};

use super::{DARK_GREEN, Exercise, ExerciseError, clear};
use crate::abs::{Mesh, ShaderProgram};

/// Degrees added to the spin every frame.
const SPIN_STEP: f32 = 0.01;

/// One triangle drawn four times with animated model matrices.
pub struct Transforms {
    program: ShaderProgram,
    triangle: Mesh,
    spin: Spin,
    elapsed: f32,
}

impl Transforms {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        Ok(Self {
            program: crate::shader_program!(transformed, gl, settings.shader_policy)?,
            triangle: Mesh::from_data(gl, &shapes::small_triangle())
                .map_err(ExerciseError::Resource)?,
            spin: Spin::default(),
            elapsed: 0.0,
        })
    }
}

impl Exercise for Transforms {
    fn update(&mut self, ctx: &UpdateContext) {
        self.spin.advance(SPIN_STEP);
        self.elapsed = ctx.elapsed;
    }

    fn render(&mut self, gl: &glow::Context) {
        clear(gl, DARK_GREEN, false);
        self.program.use_program();
        for instance in triangle_instances(self.elapsed, self.spin.degrees()) {
            self.program.set_uniform("u_model", instance.model);
            self.program.set_uniform("u_color", instance.color);
            self.triangle.draw();
        }
    }
}
