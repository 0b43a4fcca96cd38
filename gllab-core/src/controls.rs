//! Small pieces of per-exercise state driven by key presses and scrolling.

use glam::Vec3;

use crate::input::{InputEvent, Key};

/// Flat color picked with the number keys: 1 red, 2 green, 3 blue.
pub fn palette_color(key: Key) -> Option<Vec3> {
    match key {
        Key::Num1 => Some(Vec3::new(1.0, 0.0, 0.0)),
        Key::Num2 => Some(Vec3::new(0.0, 1.0, 0.0)),
        Key::Num3 => Some(Vec3::new(0.0, 0.0, 1.0)),
        _ => None,
    }
}

/// A blend factor in `[0, 1]` nudged by scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendFactor {
    value: f32,
    step: f32,
}

impl Default for BlendFactor {
    fn default() -> Self {
        Self::new(0.05, 0.05)
    }
}

impl BlendFactor {
    pub fn new(value: f32, step: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            step,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Moves the factor one step in the scroll direction. Returns `true` if it changed.
    pub fn apply_scroll(&mut self, delta: f32) -> bool {
        let value = if delta > 0.0 {
            (self.value + self.step).min(1.0)
        } else if delta < 0.0 {
            (self.value - self.step).max(0.0)
        } else {
            self.value
        };
        let changed = value != self.value;
        self.value = value;
        changed
    }
}

/// Which textured shapes are visible. A shape is only shown while its key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureView {
    Quad,
    Triangle,
    Both,
    #[default]
    Hidden,
}

impl TextureView {
    /// Applies a key event: 1, 2 and 3 select a view, releasing any key hides everything.
    pub fn apply(self, event: &InputEvent) -> Self {
        match event {
            InputEvent::KeyDown(Key::Num1) => TextureView::Quad,
            InputEvent::KeyDown(Key::Num2) => TextureView::Triangle,
            InputEvent::KeyDown(Key::Num3) => TextureView::Both,
            InputEvent::KeyUp(_) => TextureView::Hidden,
            _ => self,
        }
    }

    pub fn shows_quad(self) -> bool {
        matches!(self, TextureView::Quad | TextureView::Both)
    }

    pub fn shows_triangle(self) -> bool {
        matches!(self, TextureView::Triangle | TextureView::Both)
    }
}

pub const AMBIENT_STRENGTH: f32 = 0.15;
pub const DIFFUSE_STRENGTH: f32 = 1.0;
pub const SPECULAR_STRENGTH: f32 = 0.4;

/// On/off switches for the three Phong terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingToggles {
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
}

impl Default for LightingToggles {
    fn default() -> Self {
        Self {
            ambient: true,
            diffuse: true,
            specular: true,
        }
    }
}

impl LightingToggles {
    /// Flips the term bound to `key` (1 ambient, 2 diffuse, 3 specular).
    pub fn toggle(&mut self, key: Key) -> bool {
        let term = match key {
            Key::Num1 => &mut self.ambient,
            Key::Num2 => &mut self.diffuse,
            Key::Num3 => &mut self.specular,
            _ => return false,
        };
        *term = !*term;
        true
    }

    pub fn ambient_strength(&self) -> f32 {
        if self.ambient { AMBIENT_STRENGTH } else { 0.0 }
    }

    pub fn diffuse_strength(&self) -> f32 {
        if self.diffuse { DIFFUSE_STRENGTH } else { 0.0 }
    }

    pub fn specular_strength(&self) -> f32 {
        if self.specular { SPECULAR_STRENGTH } else { 0.0 }
    }

    /// The window title describing the toggle state.
    pub fn title(&self) -> String {
        format!(
            "ambient: {} diffuse: {} spec: {}",
            self.ambient as u8, self.diffuse as u8, self.specular as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_factor_bounds() {
        let mut blend = BlendFactor::default();
        for _ in 0..100 {
            blend.apply_scroll(1.0);
            assert!(blend.value() <= 1.0);
        }
        assert_eq!(blend.value(), 1.0);
        assert!(!blend.apply_scroll(1.0));

        for _ in 0..100 {
            blend.apply_scroll(-1.0);
            assert!(blend.value() >= 0.0);
        }
        assert_eq!(blend.value(), 0.0);
        assert!(!blend.apply_scroll(0.0));
    }

    #[test]
    fn test_texture_view_is_held() {
        let view = TextureView::default();
        assert_eq!(view, TextureView::Hidden);

        let view = view.apply(&InputEvent::KeyDown(Key::Num3));
        assert!(view.shows_quad() && view.shows_triangle());

        let view = view.apply(&InputEvent::Scroll { dy: 1.0 });
        assert_eq!(view, TextureView::Both);

        let view = view.apply(&InputEvent::KeyUp(Key::W));
        assert_eq!(view, TextureView::Hidden);
        assert!(!view.shows_quad() && !view.shows_triangle());
    }

    #[test]
    fn test_lighting_toggles() {
        let mut toggles = LightingToggles::default();
        assert_eq!(toggles.title(), "ambient: 1 diffuse: 1 spec: 1");

        assert!(toggles.toggle(Key::Num2));
        assert!(!toggles.toggle(Key::W));
        assert_eq!(toggles.diffuse_strength(), 0.0);
        assert_eq!(toggles.ambient_strength(), AMBIENT_STRENGTH);
        assert_eq!(toggles.title(), "ambient: 1 diffuse: 0 spec: 1");

        toggles.toggle(Key::Num1);
        toggles.toggle(Key::Num3);
        toggles.toggle(Key::Num2);
        assert_eq!(toggles.title(), "ambient: 0 diffuse: 1 spec: 0");
        assert_eq!(toggles.specular_strength(), 0.0);
    }

    #[test]
    fn test_palette() {
        assert_eq!(palette_color(Key::Num1), Some(Vec3::X));
        assert_eq!(palette_color(Key::Num3), Some(Vec3::Z));
        assert_eq!(palette_color(Key::Escape), None);
    }
}
