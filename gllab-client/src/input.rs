//! Translation of SDL events into platform-agnostic input events.

use gllab_core::input::{InputEvent, Key};
use sdl2::{event::Event, keyboard::Keycode};

/// Maps the keys the exercises use. Everything else is ignored.
pub fn map_key(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::W => Some(Key::W),
        Keycode::A => Some(Key::A),
        Keycode::S => Some(Key::S),
        Keycode::D => Some(Key::D),
        Keycode::Num1 | Keycode::Kp1 => Some(Key::Num1),
        Keycode::Num2 | Keycode::Kp2 => Some(Key::Num2),
        Keycode::Num3 | Keycode::Kp3 => Some(Key::Num3),
        Keycode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Converts one SDL event. Key repeats are dropped so a held key produces a single `KeyDown`.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match *event {
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => map_key(keycode).map(InputEvent::KeyDown),
        Event::KeyUp {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => map_key(keycode).map(InputEvent::KeyUp),
        Event::MouseMotion { xrel, yrel, .. } => Some(InputEvent::MouseMotion {
            dx: xrel as f32,
            dy: yrel as f32,
        }),
        Event::MouseWheel { y, .. } if y != 0 => Some(InputEvent::Scroll { dy: y as f32 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::{
        keyboard::{Mod, Scancode},
        mouse::MouseState,
    };

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: Some(Scancode::A),
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(Keycode::W), Some(Key::W));
        assert_eq!(map_key(Keycode::Kp2), Some(Key::Num2));
        assert_eq!(map_key(Keycode::Escape), Some(Key::Escape));
        assert_eq!(map_key(Keycode::Q), None);
    }

    #[test]
    fn test_repeats_are_dropped() {
        assert_eq!(
            translate(&key_down(Keycode::Num1, false)),
            Some(InputEvent::KeyDown(Key::Num1))
        );
        assert_eq!(translate(&key_down(Keycode::Num1, true)), None);
        assert_eq!(translate(&key_down(Keycode::Space, false)), None);
    }

    #[test]
    fn test_mouse_motion() {
        let motion = Event::MouseMotion {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mousestate: MouseState::from_sdl_state(0),
            x: 10,
            y: 10,
            xrel: 3,
            yrel: -2,
        };
        assert_eq!(
            translate(&motion),
            Some(InputEvent::MouseMotion { dx: 3.0, dy: -2.0 })
        );
    }
}
