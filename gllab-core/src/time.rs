//! Frame timing and the frames-per-second counter.

use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    /// Seconds since the clock was created.
    pub elapsed: f64,
    pub frame_index: u64,
}

/// Produces a clamped delta time per frame.
///
/// Delta time is clamped so a stall (a debugger pause, a window drag) does not
/// fling the camera across the scene on the next frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Advances the clock and returns the new snapshot.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let frame = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f64(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames counted over one full second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsSample {
    pub frames: u32,
}

impl FpsSample {
    pub fn ms_per_frame(&self) -> f64 {
        1000.0 / self.frames.max(1) as f64
    }

    /// Window title text, e.g. `FPS: 60 ms/Frame: 16.667`.
    pub fn title(&self) -> String {
        format!("FPS: {} ms/Frame: {:.3}", self.frames, self.ms_per_frame())
    }
}

/// Counts frames and reports once every full second.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_start: Option<f64>,
    frames: u32,
}

impl FpsCounter {
    /// Counts one frame rendered at `now` seconds. Returns a sample when a second has passed
    /// since the start of the current window.
    pub fn tick(&mut self, now: f64) -> Option<FpsSample> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;
        if now - start < 1.0 {
            return None;
        }

        let sample = FpsSample {
            frames: self.frames,
        };
        self.frames = 0;
        // Stay on whole-second boundaries unless we fell far behind.
        let next = start + 1.0;
        self.window_start = Some(if now - next >= 1.0 { now } else { next });
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_clamps_and_counts() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert_eq!(first.frame_index, 0);
        assert_eq!(second.frame_index, 1);
        assert!(first.dt > 0.0 && first.dt <= 0.25);
        assert!(second.elapsed >= first.elapsed);
    }

    #[test]
    fn test_fps_counter_reports_each_second() {
        let mut counter = FpsCounter::default();
        let mut samples = Vec::new();
        // 16 frames per second for three seconds.
        for frame in 0..=48 {
            if let Some(sample) = counter.tick(frame as f64 / 16.0) {
                samples.push(sample);
            }
        }
        assert_eq!(samples.len(), 3);
        // The first window includes the frame at t=0.
        assert_eq!(samples[0].frames, 17);
        assert_eq!(samples[1].frames, 16);
        assert_eq!(samples[2].frames, 16);
    }

    #[test]
    fn test_fps_counter_skips_long_stalls() {
        let mut counter = FpsCounter::default();
        assert_eq!(counter.tick(0.0), None);
        assert!(counter.tick(5.0).is_some());
        assert_eq!(counter.tick(5.5), None);
        assert!(counter.tick(6.0).is_some());
    }

    #[test]
    fn test_fps_title() {
        let sample = FpsSample { frames: 50 };
        assert_eq!(sample.title(), "FPS: 50 ms/Frame: 20.000");
        assert_eq!(FpsSample { frames: 0 }.ms_per_frame(), 1000.0);
    }
}
