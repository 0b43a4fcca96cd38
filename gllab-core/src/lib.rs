//! The core library for gllab.
//!
//! Everything in this crate is independent of the windowing system and the GL driver: camera
//! maths, mesh generation, input state, frame timing, exercise state and settings all live here so
//! they can be tested without a GPU. The `gllab-client` crate turns this state into draw calls.

pub mod animation;
pub mod camera;
pub mod controls;
pub mod exercise;
pub mod geometry;
pub mod input;
pub mod settings;
pub mod shader;
pub mod time;
