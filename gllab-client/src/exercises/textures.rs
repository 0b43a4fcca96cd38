use std::sync::Arc;

use glam::Vec3;
use gllab_core::{
    controls::{BlendFactor, TextureView},
    geometry::shapes,
    input::{InputEvent, UpdateContext},
    settings::Settings,
};

use super::{Exercise, ExerciseError, clear};
use crate::abs::{Mesh, ShaderProgram, Texture};

const BACKGROUND: Vec3 = Vec3::splat(0.3);

/// A textured quad and triangle, shown while 1, 2 or 3 is held. Scrolling blends towards blue.
pub struct Textures {
    program: ShaderProgram,
    quad: Mesh,
    triangle: Mesh,
    quad_texture: Texture,
    triangle_texture: Texture,
    view: TextureView,
    blend: BlendFactor,
}

impl Textures {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        let assets = &settings.asset_dir;
        Ok(Self {
            program: crate::shader_program!(textured, gl, settings.shader_policy)?,
            quad: Mesh::from_data(gl, &shapes::textured_quad()).map_err(ExerciseError::Resource)?,
            triangle: Mesh::from_data(gl, &shapes::textured_triangle())
                .map_err(ExerciseError::Resource)?,
            quad_texture: Texture::load_or_checker(gl, &assets.join("texture1.jpg"))
                .map_err(ExerciseError::Resource)?,
            triangle_texture: Texture::load_or_checker(gl, &assets.join("texture2.jpg"))
                .map_err(ExerciseError::Resource)?,
            view: TextureView::default(),
            blend: BlendFactor::default(),
        })
    }
}

impl Exercise for Textures {
    fn update(&mut self, ctx: &UpdateContext) {
        for event in ctx.input.events() {
            if let InputEvent::Scroll { dy } = *event {
                if self.blend.apply_scroll(dy) {
                    log::debug!("Texture mix is now {:.2}", self.blend.value());
                }
            }
            self.view = self.view.apply(event);
        }
    }

    fn render(&mut self, gl: &glow::Context) {
        clear(gl, BACKGROUND, false);
        self.program.use_program();
        self.program.set_uniform("u_texture", 0);
        self.program.set_uniform("u_texture_mix", self.blend.value());

        if self.view.shows_quad() {
            self.quad_texture.bind(0);
            self.quad.draw();
        }
        if self.view.shows_triangle() {
            self.triangle_texture.bind(0);
            self.triangle.draw();
        }
    }

    fn status(&self) -> Option<String> {
        Some(format!("mix: {:.2}", self.blend.value()))
    }
}
