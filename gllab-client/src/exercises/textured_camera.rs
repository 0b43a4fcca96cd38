use std::sync::Arc;

use gllab_core::{
    animation::{Spin, tumbling_cube},
    camera::Camera,
    geometry::shapes,
    input::UpdateContext,
    settings::Settings,
    time::{FpsCounter, FpsSample},
};

use super::{DARK_GREEN, Exercise, ExerciseError, clear};
use crate::abs::{Mesh, ShaderProgram, Texture};

/// Degrees per second the cube tumbles by.
const SPIN_RATE: f32 = 20.0;
const TEXTURE_MIX: f32 = 0.05;

/// A textured cube tumbling in front of a frame-time-scaled camera, with an FPS readout.
pub struct TexturedCamera {
    program: ShaderProgram,
    cube: Mesh,
    texture: Texture,
    camera: Camera,
    aspect_ratio: f32,
    spin: Spin,
    motion: f32,
    fps: FpsCounter,
    last_sample: Option<FpsSample>,
}

impl TexturedCamera {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        Ok(Self {
            program: crate::shader_program!(camera_textured, gl, settings.shader_policy)?,
            cube: Mesh::from_data(gl, &shapes::textured_cube())
                .map_err(ExerciseError::Resource)?,
            texture: Texture::load_or_checker(gl, &settings.asset_dir.join("texture2.jpg"))
                .map_err(ExerciseError::Resource)?,
            camera: Camera::default()
                .with_speed(settings.per_second_speed())
                .with_sensitivity(settings.mouse_sensitivity),
            aspect_ratio: settings.aspect_ratio(),
            spin: Spin::default(),
            motion: 0.0,
            fps: FpsCounter::default(),
            last_sample: None,
        })
    }
}

impl Exercise for TexturedCamera {
    fn update(&mut self, ctx: &UpdateContext) {
        self.camera.update(ctx);
        self.aspect_ratio = ctx.aspect_ratio;
        self.spin.advance(ctx.delta_time * SPIN_RATE);
        self.motion += ctx.delta_time;

        if let Some(sample) = self.fps.tick(ctx.elapsed as f64) {
            log::trace!("{}", sample.title());
            self.last_sample = Some(sample);
        }
    }

    fn render(&mut self, gl: &glow::Context) {
        clear(gl, DARK_GREEN, true);
        self.program.use_program();
        self.program.set_uniform("u_texture", 0);
        self.program.set_uniform("u_texture_mix", TEXTURE_MIX);
        self.program
            .set_uniform("u_model", tumbling_cube(self.spin.degrees(), self.motion));
        self.program.set_uniform("u_view", self.camera.view());
        self.program
            .set_uniform("u_projection", self.camera.projection(self.aspect_ratio));
        self.texture.bind(0);
        self.cube.draw();
    }

    fn status(&self) -> Option<String> {
        self.last_sample.map(|sample| sample.title())
    }
}
