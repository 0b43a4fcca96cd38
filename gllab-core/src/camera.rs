//! A yaw/pitch fly camera.
//!
//! Orientation is stored as two angles in degrees and the front vector is derived from them. The
//! mouse steers the angles, W/A/S/D move the position along the front and right axes.

use glam::{Mat4, Vec2, Vec3};

use crate::input::{Key, UpdateContext};

/// Pitch is kept inside `[-PITCH_LIMIT, PITCH_LIMIT]` so the front vector never lines up with
/// the up vector.
pub const PITCH_LIMIT: f32 = 89.0;
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.075;
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 2.5);

/// How far the camera moves while a movement key is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveSpeed {
    /// A fixed distance every frame, whatever the frame rate.
    PerFrame(f32),
    /// Units per second, scaled by the frame time.
    PerSecond(f32),
}

impl MoveSpeed {
    /// The distance to move this frame.
    pub fn step(self, delta_time: f32) -> f32 {
        match self {
            MoveSpeed::PerFrame(distance) => distance,
            MoveSpeed::PerSecond(speed) => speed * delta_time,
        }
    }
}

/// Computes the normalized front vector for the given angles in degrees.
pub fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let yaw = yaw.to_radians();
    let pitch = pitch.to_radians();
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub up: Vec3,
    pub sensitivity: f32,
    pub speed: MoveSpeed,
    pub fov: f32,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    first_sample: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, DEFAULT_YAW, 0.0)
    }
}

impl Camera {
    /// Creates a camera at `position` looking along the given angles.
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Self {
            position,
            up: Vec3::Y,
            sensitivity: DEFAULT_SENSITIVITY,
            speed: MoveSpeed::PerFrame(0.05),
            fov: 45.0,
            yaw,
            pitch,
            front: front_from_angles(yaw, pitch),
            first_sample: true,
        }
    }

    pub fn with_speed(mut self, speed: MoveSpeed) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// The normalized right axis.
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    /// Applies a mouse displacement in window coordinates (`y` grows downwards).
    ///
    /// The first sample after creation or after [`Camera::reset_look`] is discarded, since it
    /// carries the jump from wherever the cursor was before.
    pub fn look(&mut self, delta: Vec2) {
        if self.first_sample {
            self.first_sample = false;
            return;
        }

        self.yaw += delta.x * self.sensitivity;
        self.pitch = (self.pitch - delta.y * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = front_from_angles(self.yaw, self.pitch);
    }

    /// Makes the next mouse sample be discarded.
    pub fn reset_look(&mut self) {
        self.first_sample = true;
    }

    /// Moves along the front and right axes for every held movement key.
    pub fn apply_movement(&mut self, is_down: impl Fn(Key) -> bool, delta_time: f32) {
        let step = self.speed.step(delta_time);
        let right = self.right();

        if is_down(Key::W) {
            self.position += self.front * step;
        }
        if is_down(Key::S) {
            self.position -= self.front * step;
        }
        if is_down(Key::A) {
            self.position -= right * step;
        }
        if is_down(Key::D) {
            self.position += right * step;
        }
    }

    /// Runs the per-frame look and movement update.
    pub fn update(&mut self, ctx: &UpdateContext) {
        if !ctx.look_enabled {
            self.reset_look();
        } else if ctx.input.mouse.moved {
            self.look(ctx.input.mouse.delta);
        }
        self.apply_movement(|key| ctx.input.is_down(key), ctx.delta_time);
    }

    /// The right-handed view matrix.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// The GL perspective projection for the given aspect ratio.
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, 0.1, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputState};

    const EPSILON: f32 = 1e-5;

    fn primed() -> Camera {
        let mut camera = Camera::default();
        camera.look(Vec2::ZERO);
        camera
    }

    #[test]
    fn test_default_front() {
        let front = front_from_angles(-90.0, 0.0);
        assert!((front - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);
        assert!((Camera::default().front() - Vec3::NEG_Z).length() < EPSILON);
    }

    #[test]
    fn test_first_sample_discarded() {
        let mut camera = Camera::default();
        camera.look(Vec2::new(500.0, 300.0));
        assert_eq!(camera.yaw(), DEFAULT_YAW);
        assert_eq!(camera.pitch(), 0.0);

        camera.look(Vec2::new(10.0, 0.0));
        assert!((camera.yaw() - (DEFAULT_YAW + 10.0 * DEFAULT_SENSITIVITY)).abs() < EPSILON);

        camera.reset_look();
        camera.look(Vec2::new(10.0, 0.0));
        assert!((camera.yaw() - (DEFAULT_YAW + 10.0 * DEFAULT_SENSITIVITY)).abs() < EPSILON);
    }

    #[test]
    fn test_moving_mouse_up_raises_pitch() {
        let mut camera = primed();
        camera.look(Vec2::new(0.0, -20.0));
        assert!(camera.pitch() > 0.0);
        assert!(camera.front().y > 0.0);
    }

    #[test]
    fn test_pitch_stays_clamped() {
        let mut camera = primed();
        for _ in 0..10_000 {
            camera.look(Vec2::new(3.0, -250.0));
            assert!(camera.pitch() <= PITCH_LIMIT);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        for _ in 0..10_000 {
            camera.look(Vec2::new(-7.0, 400.0));
            assert!(camera.pitch() >= -PITCH_LIMIT);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert!((camera.front().length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_movement_per_frame() {
        let mut camera = primed();
        camera.apply_movement(|key| key == Key::W, 1.0);
        assert!((camera.position - Vec3::new(0.0, 0.0, 2.45)).length() < EPSILON);

        camera.apply_movement(|key| key == Key::D, 1.0);
        assert!((camera.position - Vec3::new(0.05, 0.0, 2.45)).length() < EPSILON);
    }

    #[test]
    fn test_movement_per_second_scales_with_frame_time() {
        let mut camera = primed().with_speed(MoveSpeed::PerSecond(2.0));
        camera.apply_movement(|key| key == Key::S, 0.5);
        assert!((camera.position - Vec3::new(0.0, 0.0, 3.5)).length() < EPSILON);

        camera.apply_movement(|key| key == Key::A, 0.25);
        assert!((camera.position - Vec3::new(-0.5, 0.0, 3.5)).length() < EPSILON);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut camera = primed();
        camera.apply_movement(|key| matches!(key, Key::W | Key::S | Key::A | Key::D), 1.0);
        assert!((camera.position - DEFAULT_POSITION).length() < EPSILON);
    }

    #[test]
    fn test_update_resets_look_when_disabled() {
        let mut camera = primed();
        let mut input = InputState::default();
        input.push(InputEvent::MouseMotion { dx: 100.0, dy: 0.0 });

        let mut ctx = UpdateContext::new(&input, 0.016, 0.0, 1.0);
        ctx.look_enabled = false;
        camera.update(&ctx);
        assert_eq!(camera.yaw(), DEFAULT_YAW);

        // Re-enabling discards the first sample again.
        ctx.look_enabled = true;
        camera.update(&ctx);
        assert_eq!(camera.yaw(), DEFAULT_YAW);
        camera.update(&ctx);
        assert!(camera.yaw() > DEFAULT_YAW);
    }
}
