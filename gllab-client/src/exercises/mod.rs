//! Module providing the `Exercise` trait and all exercise implementations.
//!
//! Each exercise owns its GPU resources and its interaction state; the main loop only feeds it
//! input and asks it to draw.

use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;
use gllab_core::{
    exercise::ExerciseKind, input::UpdateContext, settings::Settings, shader::ShaderError,
};
use thiserror::Error;

pub mod camera;
pub mod circle;
pub mod dynamic_circle;
pub mod intro;
pub mod lighting;
pub mod textured_camera;
pub mod textures;
pub mod transforms;
pub mod two_shapes;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error("could not create GPU resource: {0}")]
    Resource(String),
}

/// The Exercise trait defines the common interface for every exercise.
pub trait Exercise {
    /// Advances the exercise state by one frame.
    fn update(&mut self, _ctx: &UpdateContext) {}

    /// Draws the current frame.
    fn render(&mut self, gl: &glow::Context);

    /// Live status appended to the window title, if the exercise has any.
    fn status(&self) -> Option<String> {
        None
    }
}

/// Creates the exercise of the given kind with all of its resources.
pub fn build(
    kind: ExerciseKind,
    gl: &Arc<glow::Context>,
    settings: &Settings,
) -> Result<Box<dyn Exercise>, ExerciseError> {
    log::info!("Starting exercise '{}'", kind);
    Ok(match kind {
        ExerciseKind::Intro => Box::new(intro::Intro::new(gl, settings)?),
        ExerciseKind::TwoShapes => Box::new(two_shapes::TwoShapes::new(gl, settings)?),
        ExerciseKind::Circle => Box::new(circle::Circle::new(gl, settings)?),
        ExerciseKind::DynamicCircle => Box::new(dynamic_circle::DynamicCircle::new(gl, settings)?),
        ExerciseKind::Textures => Box::new(textures::Textures::new(gl, settings)?),
        ExerciseKind::Transforms => Box::new(transforms::Transforms::new(gl, settings)?),
        ExerciseKind::Camera => Box::new(camera::CameraExercise::new(gl, settings)?),
        ExerciseKind::TexturedCamera => {
            Box::new(textured_camera::TexturedCamera::new(gl, settings)?)
        }
        ExerciseKind::Lighting => Box::new(lighting::Lighting::new(gl, settings)?),
    })
}

/// Clears the color buffer, and the depth buffer when `depth` is set.
pub(crate) fn clear(gl: &glow::Context, color: Vec3, depth: bool) {
    let mut mask = glow::COLOR_BUFFER_BIT;
    if depth {
        mask |= glow::DEPTH_BUFFER_BIT;
    }
    unsafe {
        gl.clear_color(color.x, color.y, color.z, 1.0);
        gl.clear(mask);
    }
}

/// Background of the flat exercises.
pub(crate) const MAROON: Vec3 = Vec3::new(0.298, 0.141, 0.141);
/// Background of the animated and 3-D exercises.
pub(crate) const DARK_GREEN: Vec3 = Vec3::new(0.066, 0.09, 0.07);
