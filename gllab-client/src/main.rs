use anyhow::Context;
use glow::HasContext;
use gllab_core::{
    exercise::ExerciseKind,
    input::{InputEvent, InputState, Key, UpdateContext},
    settings::Settings,
    time::FrameClock,
};
use sdl2::event::{Event, WindowEvent};

use crate::{abs::App, config::Command};

mod abs;
mod config;
mod exercises;
mod input;
mod logging;

fn main() -> anyhow::Result<()> {
    let (kind, settings_path) = match config::parse_args(std::env::args().skip(1)) {
        Ok(Command::List) => {
            println!("{}", config::exercise_list());
            return Ok(());
        }
        Ok(Command::Run {
            exercise,
            settings_path,
        }) => (exercise, settings_path),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let loaded = config::load_settings(settings_path);
    let settings = &loaded.settings;
    logging::init(settings.level_filter(), settings.log_file.as_deref())
        .context("failed to initialize logging")?;
    loaded.report();

    let result = run(kind, settings);
    if let Err(err) = &result {
        log::error!("{:#}", err);
    }
    result
}

/// Opens the window and runs `kind` until the window is closed.
fn run(kind: ExerciseKind, settings: &Settings) -> anyhow::Result<()> {
    let base_title = format!("gllab - {}", kind);
    let mut app = App::new(
        &base_title,
        settings.window_width,
        settings.window_height,
        settings.vsync && kind.wants_vsync(),
    )?;

    unsafe {
        let (width, height) = app.window.drawable_size();
        app.gl.viewport(0, 0, width as i32, height as i32);
        if kind.is_3d() {
            app.gl.enable(glow::DEPTH_TEST);
        }
    }

    let mut exercise = exercises::build(kind, &app.gl, settings)
        .with_context(|| format!("failed to set up exercise '{}'", kind))?;

    let mut grabbed = kind.grabs_mouse();
    app.set_mouse_grab(grabbed);

    let mut input = InputState::default();
    let mut clock = FrameClock::new();
    let mut aspect_ratio = app.aspect_ratio();
    let mut title = base_title.clone();

    'running: loop {
        let frame = clock.tick();
        input.begin_frame();

        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height),
                    ..
                } => {
                    unsafe {
                        app.gl.viewport(0, 0, width, height);
                    }
                    aspect_ratio = width as f32 / height.max(1) as f32;
                }
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => input.release_all(),
                _ => {}
            }

            if let Some(event) = input::translate(&event) {
                if event == InputEvent::KeyDown(Key::Escape) && kind.grabs_mouse() {
                    grabbed = !grabbed;
                    app.sdl.mouse().set_relative_mouse_mode(grabbed);
                    log::debug!("Mouse {}", if grabbed { "grabbed" } else { "released" });
                }
                input.push(event);
            }
        }

        let mut ctx = UpdateContext::new(&input, frame.dt, frame.elapsed as f32, aspect_ratio);
        ctx.look_enabled = grabbed;
        exercise.update(&ctx);
        exercise.render(&app.gl);
        app.window.gl_swap_window();

        let next_title = match exercise.status() {
            Some(status) => format!("{} | {}", base_title, status),
            None => base_title.clone(),
        };
        if next_title != title {
            if let Err(e) = app.window.set_title(&next_title) {
                log::warn!("Could not set the window title: {}", e);
            }
            title = next_title;
        }
    }

    log::info!("Exiting after {:.1}s", clock.tick().elapsed);
    Ok(())
}
