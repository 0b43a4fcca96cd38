use std::sync::Arc;

use glam::Mat4;
use gllab_core::{camera::Camera, geometry::shapes, input::UpdateContext, settings::Settings};

use super::{DARK_GREEN, Exercise, ExerciseError, clear};
use crate::abs::{Mesh, ShaderProgram};

/// A colored cube at the origin, explored with WASD and the mouse.
pub struct CameraExercise {
    program: ShaderProgram,
    cube: Mesh,
    camera: Camera,
    aspect_ratio: f32,
}

impl CameraExercise {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        Ok(Self {
            program: crate::shader_program!(camera_color, gl, settings.shader_policy)?,
            cube: Mesh::from_data(gl, &shapes::colored_cube()).map_err(ExerciseError::Resource)?,
            camera: Camera::default()
                .with_speed(settings.per_frame_speed())
                .with_sensitivity(settings.mouse_sensitivity),
            aspect_ratio: settings.aspect_ratio(),
        })
    }
}

impl Exercise for CameraExercise {
    fn update(&mut self, ctx: &UpdateContext) {
        self.camera.update(ctx);
        self.aspect_ratio = ctx.aspect_ratio;
    }

    fn render(&mut self, gl: &glow::Context) {
        clear(gl, DARK_GREEN, true);
        self.program.use_program();
        self.program.set_uniform("u_model", Mat4::IDENTITY);
        self.program.set_uniform("u_view", self.camera.view());
        self.program
            .set_uniform("u_projection", self.camera.projection(self.aspect_ratio));
        self.cube.draw();
    }
}
