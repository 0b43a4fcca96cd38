use std::sync::Arc;

use glam::Vec3;
use gllab_core::{
    controls::palette_color,
    geometry::circle::CircleFan,
    input::{InputEvent, UpdateContext},
    settings::Settings,
};

use super::{Exercise, ExerciseError, clear};
use crate::abs::{Mesh, ShaderProgram};

pub const INITIAL_TRIANGLES: u32 = 12;
pub const RADIUS: f32 = 0.75;

const BACKGROUND: Vec3 = Vec3::splat(0.1);

/// A circle whose triangle count follows the scroll wheel. 1/2/3 recolor it.
pub struct DynamicCircle {
    program: ShaderProgram,
    fan: CircleFan,
    mesh: Mesh,
    color: Vec3,
}

impl DynamicCircle {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, ExerciseError> {
        let fan = CircleFan::new(INITIAL_TRIANGLES, RADIUS);
        let mesh = Mesh::new(gl, fan.vertices(), fan.indices()).map_err(ExerciseError::Resource)?;
        Ok(Self {
            program: crate::shader_program!(flat, gl, settings.shader_policy)?,
            fan,
            mesh,
            color: Vec3::new(0.3, 0.4, 0.5),
        })
    }
}

impl Exercise for DynamicCircle {
    fn update(&mut self, ctx: &UpdateContext) {
        let mut changed = false;
        for event in ctx.input.events() {
            match *event {
                InputEvent::Scroll { dy } => changed |= self.fan.apply_scroll(dy),
                InputEvent::KeyDown(key) => {
                    if let Some(color) = palette_color(key) {
                        self.color = color;
                    }
                }
                _ => {}
            }
        }

        if changed {
            self.mesh.update(self.fan.vertices(), self.fan.indices());
        }
    }

    fn render(&mut self, gl: &glow::Context) {
        clear(gl, BACKGROUND, false);
        self.program.use_program();
        self.program.set_uniform("u_color", self.color);
        self.mesh.draw();
    }

    fn status(&self) -> Option<String> {
        Some(format!("triangles: {}", self.fan.triangles()))
    }
}
