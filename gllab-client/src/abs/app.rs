//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which owns the window, the OpenGL 3.3 core context and
//! the SDL event pump.

use std::sync::Arc;

use thiserror::Error;

/// Failures that stop the program before the first frame.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create the window: {0}")]
    WindowCreation(String),

    #[error("could not initialize OpenGL: {0}")]
    GraphicsInit(String),
}

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Opens a resizable window with the given title and size and makes its GL context current.
    pub fn new(title: &str, width: u32, height: u32, vsync: bool) -> Result<Self, AppError> {
        let sdl = sdl2::init().map_err(AppError::WindowCreation)?;
        let video_subsystem = sdl.video().map_err(AppError::WindowCreation)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video_subsystem
            .window(title, width, height)
            .opengl()
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| AppError::WindowCreation(e.to_string()))?;
        let gl_context = window
            .gl_create_context()
            .map_err(AppError::GraphicsInit)?;
        window
            .gl_make_current(&gl_context)
            .map_err(AppError::GraphicsInit)?;

        let interval = if vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set the swap interval: {}", e);
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump().map_err(AppError::WindowCreation)?;

        log::info!(
            "Opened {}x{} window with OpenGL 3.3 core (vsync {})",
            width,
            height,
            if vsync { "on" } else { "off" }
        );

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
        })
    }

    /// Captures or releases the mouse for camera control.
    pub fn set_mouse_grab(&self, grabbed: bool) {
        self.sdl.mouse().set_relative_mouse_mode(grabbed);
    }

    /// Width divided by height of the drawable area.
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.window.drawable_size();
        width as f32 / height.max(1) as f32
    }
}
