use std::sync::Arc;

use glam::{Mat4, Vec3};
use gllab_core::{
    animation::{lamp_model, orbiting_light},
    camera::Camera,
    controls::LightingToggles,
    geometry::shapes,
    input::{InputEvent, UpdateContext},
    settings::Settings,
};

use super::{DARK_GREEN, Exercise, ExerciseError, clear};
use crate::abs::{Mesh, ShaderProgram};

const OBJECT_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const SHININESS: f32 = 64.0;

/// A Phong-lit cube with a lamp cube orbiting it. 1/2/3 toggle the three light terms.
pub struct Lighting {
    phong: ShaderProgram,
    lamp: ShaderProgram,
    cube: Mesh,
    camera: Camera,
    aspect_ratio: f32,
    toggles: LightingToggles,
    light_position: Vec3,
}

impl Lighting {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        Ok(Self {
            phong: crate::shader_program!(phong, gl, settings.shader_policy)?,
            lamp: crate::shader_program!(lamp, gl, settings.shader_policy)?,
            cube: Mesh::from_data(gl, &shapes::lit_cube()).map_err(ExerciseError::Resource)?,
            camera: Camera::default()
                .with_speed(settings.per_frame_speed())
                .with_sensitivity(settings.mouse_sensitivity),
            aspect_ratio: settings.aspect_ratio(),
            toggles: LightingToggles::default(),
            light_position: orbiting_light(0.0),
        })
    }
}

impl Exercise for Lighting {
    fn update(&mut self, ctx: &UpdateContext) {
        for event in ctx.input.events() {
            if let InputEvent::KeyDown(key) = *event {
                if self.toggles.toggle(key) {
                    log::debug!("Lighting toggles: {}", self.toggles.title());
                }
            }
        }
        self.camera.update(ctx);
        self.aspect_ratio = ctx.aspect_ratio;
        self.light_position = orbiting_light(ctx.elapsed);
    }

    fn render(&mut self, gl: &glow::Context) {
        clear(gl, DARK_GREEN, true);
        let view = self.camera.view();
        let projection = self.camera.projection(self.aspect_ratio);

        self.phong.use_program();
        self.phong.set_uniform("u_model", Mat4::IDENTITY);
        self.phong.set_uniform("u_view", view);
        self.phong.set_uniform("u_projection", projection);
        self.phong.set_uniform("u_light_position", self.light_position);
        self.phong.set_uniform("u_view_position", self.camera.position);
        self.phong.set_uniform("u_object_color", OBJECT_COLOR);
        self.phong.set_uniform("u_shininess", SHININESS);
        self.phong
            .set_uniform("u_ambient_strength", self.toggles.ambient_strength());
        self.phong
            .set_uniform("u_diffuse_strength", self.toggles.diffuse_strength());
        self.phong
            .set_uniform("u_specular_strength", self.toggles.specular_strength());
        self.cube.draw();

        self.lamp.use_program();
        self.lamp.set_uniform("u_model", lamp_model(self.light_position));
        self.lamp.set_uniform("u_view", view);
        self.lamp.set_uniform("u_projection", projection);
        self.cube.draw();
    }

    fn status(&self) -> Option<String> {
        Some(self.toggles.title())
    }
}
