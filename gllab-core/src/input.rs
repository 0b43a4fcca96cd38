//! Platform-agnostic input handling.
//!
//! The windowing layer translates its native events into [`InputEvent`]s and pushes them into an
//! [`InputState`]. The state keeps the events of the current frame in a queue so exercises can
//! react to every discrete event (a scroll notch, a key press) once per frame, and it also tracks
//! which keys are held and how far the mouse moved since the previous frame.

use std::collections::HashSet;

use glam::Vec2;

/// Keys the exercises react to. Everything else is dropped by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Num1,
    Num2,
    Num3,
    Escape,
}

/// A single input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Relative mouse motion in window coordinates (`y` grows downwards).
    MouseMotion { dx: f32, dy: f32 },
    /// Vertical scroll; positive values scroll away from the user.
    Scroll { dy: f32 },
}

/// The current state of the keyboard.
#[derive(Debug, Default)]
pub struct KeyboardState {
    pub down: HashSet<Key>,
    pub pressed: HashSet<Key>,
    pub released: HashSet<Key>,
}

/// The current state of the mouse.
#[derive(Debug, Default)]
pub struct MouseState {
    /// Motion accumulated over the current frame.
    pub delta: Vec2,
    /// Whether any motion event arrived this frame.
    pub moved: bool,
    pub scroll_delta: f32,
}

/// Input state for one window, plus the event queue of the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
    events: Vec<InputEvent>,
}

impl InputState {
    /// Clears the per-frame transitions and the event queue. Held keys survive.
    pub fn begin_frame(&mut self) {
        self.keyboard.pressed.clear();
        self.keyboard.released.clear();
        self.mouse.delta = Vec2::ZERO;
        self.mouse.moved = false;
        self.mouse.scroll_delta = 0.0;
        self.events.clear();
    }

    /// Records an event and applies it to the held state.
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                if self.keyboard.down.insert(key) {
                    self.keyboard.pressed.insert(key);
                }
            }
            InputEvent::KeyUp(key) => {
                self.keyboard.down.remove(&key);
                self.keyboard.released.insert(key);
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse.delta += Vec2::new(dx, dy);
                self.mouse.moved = true;
            }
            InputEvent::Scroll { dy } => {
                self.mouse.scroll_delta += dy;
            }
        }
        self.events.push(event);
    }

    /// The events received this frame, in arrival order.
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Returns `true` while `key` is held.
    pub fn is_down(&self, key: Key) -> bool {
        self.keyboard.down.contains(&key)
    }

    /// Drops every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        for key in self.keyboard.down.drain() {
            self.keyboard.released.insert(key);
        }
    }
}

/// Context handed to exercises during the update phase.
pub struct UpdateContext<'a> {
    pub input: &'a InputState,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the exercise started.
    pub elapsed: f32,
    /// Viewport width divided by height.
    pub aspect_ratio: f32,
    /// Whether mouse motion should steer the camera this frame.
    pub look_enabled: bool,
}

impl<'a> UpdateContext<'a> {
    /// Creates a new `UpdateContext` with the mouse look enabled.
    pub fn new(input: &'a InputState, delta_time: f32, elapsed: f32, aspect_ratio: f32) -> Self {
        Self {
            input,
            delta_time,
            elapsed,
            aspect_ratio,
            look_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_accumulates_within_frame() {
        let mut input = InputState::default();
        input.push(InputEvent::MouseMotion { dx: 2.0, dy: -1.0 });
        input.push(InputEvent::MouseMotion { dx: 3.0, dy: 4.0 });
        assert!(input.mouse.moved);
        assert_eq!(input.mouse.delta, Vec2::new(5.0, 3.0));

        input.begin_frame();
        assert!(!input.mouse.moved);
        assert_eq!(input.mouse.delta, Vec2::ZERO);
        assert!(input.events().is_empty());
    }

    #[test]
    fn test_held_keys_survive_frames() {
        let mut input = InputState::default();
        input.push(InputEvent::KeyDown(Key::W));
        assert!(input.keyboard.pressed.contains(&Key::W));

        input.begin_frame();
        input.push(InputEvent::KeyDown(Key::W));
        assert!(input.is_down(Key::W));
        assert!(input.keyboard.pressed.is_empty());

        input.push(InputEvent::KeyUp(Key::W));
        assert!(!input.is_down(Key::W));
        assert!(input.keyboard.released.contains(&Key::W));
    }

    #[test]
    fn test_events_keep_arrival_order() {
        let mut input = InputState::default();
        input.push(InputEvent::Scroll { dy: 1.0 });
        input.push(InputEvent::KeyDown(Key::Num2));
        input.push(InputEvent::Scroll { dy: -1.0 });
        assert_eq!(
            input.events(),
            &[
                InputEvent::Scroll { dy: 1.0 },
                InputEvent::KeyDown(Key::Num2),
                InputEvent::Scroll { dy: -1.0 },
            ]
        );
        assert_eq!(input.mouse.scroll_delta, 0.0);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::default();
        input.push(InputEvent::KeyDown(Key::A));
        input.push(InputEvent::KeyDown(Key::D));
        input.release_all();
        assert!(input.keyboard.down.is_empty());
        assert_eq!(input.keyboard.released.len(), 2);
    }
}
