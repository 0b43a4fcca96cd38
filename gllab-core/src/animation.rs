//! Time-driven transforms for the animated exercises.

use glam::{Mat4, Vec3};

/// An angle in degrees that wraps back to zero once it reaches a full turn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spin {
    degrees: f32,
}

impl Spin {
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    /// Advances the angle by `step` degrees, wrapping to zero at 360.
    pub fn advance(&mut self, step: f32) {
        if self.degrees < 360.0 {
            self.degrees += step;
        } else {
            self.degrees = 0.0;
        }
    }
}

/// One draw of the shared triangle: its model matrix and flat color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub model: Mat4,
    pub color: Vec3,
}

/// The four animated copies of the triangle at time `t` (seconds) and spin angle `degrees`.
///
/// One slides sideways, one spins in place, one pulses in size and one does all three.
pub fn triangle_instances(t: f32, degrees: f32) -> [Instance; 4] {
    let angle = degrees.to_radians();
    let pulse_cos = t.cos() + 1.2;
    let pulse_sin = t.sin() + 1.2;

    [
        Instance {
            model: Mat4::from_translation(Vec3::new(t.cos() / 4.0 - 0.3, 0.3, 0.0)),
            color: Vec3::new(0.0, 0.0, 1.0),
        },
        Instance {
            model: Mat4::from_translation(Vec3::new(0.4, 0.4, 0.0)) * Mat4::from_rotation_z(angle),
            color: Vec3::new(0.0, 1.0, 0.0),
        },
        Instance {
            model: Mat4::from_translation(Vec3::new(-0.4, -0.4, 0.0))
                * Mat4::from_scale(Vec3::new(pulse_cos, pulse_cos, 1.0)),
            color: Vec3::new(1.0, 0.0, 1.0),
        },
        Instance {
            model: Mat4::from_translation(Vec3::new(t.sin() / 4.0 + 0.3, -0.4, 0.0))
                * Mat4::from_scale(Vec3::new(pulse_sin, pulse_sin, 1.0))
                * Mat4::from_rotation_z(-angle),
            color: Vec3::ONE,
        },
    ]
}

/// Position of a light circling the origin with radius 3 at height 2.
pub fn orbiting_light(t: f32) -> Vec3 {
    Vec3::new(t.cos() * 3.0, 2.0, t.sin() * 3.0)
}

/// Model matrix for the lamp cube drawn at the light position.
pub fn lamp_model(light: Vec3) -> Mat4 {
    Mat4::from_translation(light) * Mat4::from_scale(Vec3::splat(0.5))
}

/// The tumbling cube: rotated about the (1, 1, 0) diagonal, then swinging along x.
pub fn tumbling_cube(degrees: f32, motion: f32) -> Mat4 {
    let axis = Vec3::new(1.0, 1.0, 0.0).normalize();
    Mat4::from_axis_angle(axis, degrees.to_radians())
        * Mat4::from_translation(Vec3::new(motion.sin() * 1.5, 0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_wraps() {
        let mut spin = Spin::default();
        for _ in 0..4 {
            spin.advance(100.0);
        }
        assert_eq!(spin.degrees(), 400.0);
        spin.advance(100.0);
        assert_eq!(spin.degrees(), 0.0);
    }

    #[test]
    fn test_instances_at_rest() {
        let instances = triangle_instances(0.0, 0.0);
        let origin = |m: Mat4| m.transform_point3(Vec3::ZERO);
        assert!((origin(instances[0].model) - Vec3::new(-0.05, 0.3, 0.0)).length() < 1e-6);
        assert!((origin(instances[1].model) - Vec3::new(0.4, 0.4, 0.0)).length() < 1e-6);
        assert!((origin(instances[3].model) - Vec3::new(0.3, -0.4, 0.0)).length() < 1e-6);

        // cos(0) + 1.2 scales the third copy up.
        let tip = instances[2].model.transform_point3(Vec3::new(0.0, 0.2, 0.0));
        assert!((tip - Vec3::new(-0.4, -0.4 + 0.2 * 2.2, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_orbiting_light_radius() {
        for i in 0..16 {
            let light = orbiting_light(i as f32 * 0.4);
            assert!((light.y - 2.0).abs() < 1e-6);
            assert!((light.with_y(0.0).length() - 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_lamp_model() {
        let light = Vec3::new(1.0, 2.0, 3.0);
        let corner = lamp_model(light).transform_point3(Vec3::splat(0.5));
        assert!((corner - (light + Vec3::splat(0.25))).length() < 1e-6);
    }
}
