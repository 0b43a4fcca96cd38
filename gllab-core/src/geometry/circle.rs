//! Circle tessellation as a triangle fan.
//!
//! Vertex 0 is the center, the rim vertices follow counter-clockwise. The fan is regenerated in
//! place whenever the triangle count changes, reusing the same two buffers.

use std::f32::consts::TAU;

use glam::Vec3;

use super::PositionVertex;

/// Upper bound for the triangle count.
pub const MAX_TRIANGLES: u32 = 180;

/// A circle built from `triangles` fan triangles around the origin.
#[derive(Clone, Debug)]
pub struct CircleFan {
    triangles: u32,
    radius: f32,
    vertices: Vec<PositionVertex>,
    indices: Vec<u32>,
}

impl CircleFan {
    /// Creates a fan with the given triangle count, clamped to [`MAX_TRIANGLES`].
    pub fn new(triangles: u32, radius: f32) -> Self {
        let triangles = triangles.min(MAX_TRIANGLES);
        let mut fan = Self {
            triangles,
            radius,
            vertices: Vec::with_capacity(triangles as usize + 2),
            indices: Vec::with_capacity(triangles as usize * 3),
        };
        fan.regenerate();
        fan
    }

    pub fn triangles(&self) -> u32 {
        self.triangles
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn vertices(&self) -> &[PositionVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Applies one scroll event. A positive delta adds a triangle, a negative one removes one.
    ///
    /// Returns `true` if the count changed and the buffers were regenerated.
    pub fn apply_scroll(&mut self, delta: f32) -> bool {
        let triangles = if delta > 0.0 && self.triangles < MAX_TRIANGLES {
            self.triangles + 1
        } else if delta < 0.0 && self.triangles > 0 {
            self.triangles - 1
        } else {
            return false;
        };
        self.set_triangles(triangles)
    }

    /// Sets the triangle count, clamped to [`MAX_TRIANGLES`].
    ///
    /// Returns `true` if the count changed and the buffers were regenerated.
    pub fn set_triangles(&mut self, triangles: u32) -> bool {
        let triangles = triangles.min(MAX_TRIANGLES);
        if triangles == self.triangles {
            return false;
        }
        self.triangles = triangles;
        self.regenerate();
        log::debug!("Regenerated circle with {} triangles", triangles);
        true
    }

    fn regenerate(&mut self) {
        self.vertices.clear();
        self.indices.clear();

        self.vertices.push(PositionVertex {
            position: Vec3::ZERO,
        });

        // A zero-triangle circle is just its center and is never drawn.
        if self.triangles == 0 {
            return;
        }

        let n = self.triangles;
        self.vertices.extend((1..=n + 1).map(|i| {
            let angle = i as f32 * TAU / n as f32;
            PositionVertex {
                position: Vec3::new(self.radius * angle.cos(), self.radius * angle.sin(), 0.0),
            }
        }));

        for i in 1..=n {
            self.indices.extend_from_slice(&[0, i, i + 1]);
        }

        // Close the ring on the first rim vertex.
        if let Some(last) = self.indices.last_mut() {
            *last = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_for_every_triangle_count() {
        for n in 1..=MAX_TRIANGLES {
            let fan = CircleFan::new(n, 0.75);
            assert_eq!(fan.vertices().len(), n as usize + 2);
            assert_eq!(fan.indices().len(), n as usize * 3);
            assert!(fan.indices().iter().all(|&i| i < n + 2));
            assert_eq!(fan.indices().last(), Some(&1));
        }
    }

    #[test]
    fn test_fan_shape() {
        let fan = CircleFan::new(4, 0.5);
        assert_eq!(fan.indices(), &[0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1]);
        assert_eq!(fan.vertices()[0].position, Vec3::ZERO);
        for vertex in &fan.vertices()[1..] {
            assert!((vertex.position.length() - 0.5).abs() < 1e-5);
            assert_eq!(vertex.position.z, 0.0);
        }
        // The first rim vertex sits a quarter turn in.
        assert!((fan.vertices()[1].position - Vec3::new(0.0, 0.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_zero_triangles_is_empty() {
        let fan = CircleFan::new(0, 1.0);
        assert_eq!(fan.vertices().len(), 1);
        assert!(fan.indices().is_empty());
    }

    #[test]
    fn test_scroll_sequence() {
        let mut fan = CircleFan::new(12, 0.75);
        assert!(fan.apply_scroll(1.0));
        assert!(fan.apply_scroll(1.0));
        assert!(fan.apply_scroll(-1.0));
        assert_eq!(fan.triangles(), 13);
        assert!(!fan.apply_scroll(0.0));
        assert_eq!(fan.triangles(), 13);
    }

    #[test]
    fn test_scroll_stays_in_bounds() {
        let mut fan = CircleFan::new(178, 0.75);
        for _ in 0..500 {
            fan.apply_scroll(1.0);
            assert!(fan.triangles() <= MAX_TRIANGLES);
        }
        assert_eq!(fan.triangles(), MAX_TRIANGLES);
        assert!(!fan.apply_scroll(3.0));

        for _ in 0..500 {
            fan.apply_scroll(-2.5);
        }
        assert_eq!(fan.triangles(), 0);
        assert!(!fan.apply_scroll(-1.0));
        assert!(fan.indices().is_empty());

        assert!(fan.apply_scroll(1.0));
        assert_eq!(fan.vertices().len(), 3);
        assert_eq!(fan.indices(), &[0, 1, 1]);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(CircleFan::new(1000, 1.0).triangles(), MAX_TRIANGLES);
    }

    #[test]
    fn test_buffers_are_reused() {
        let mut fan = CircleFan::new(MAX_TRIANGLES, 0.75);
        let vertex_capacity = fan.vertices.capacity();
        let index_capacity = fan.indices.capacity();
        for _ in 0..50 {
            fan.apply_scroll(-1.0);
        }
        for _ in 0..50 {
            fan.apply_scroll(1.0);
        }
        assert_eq!(fan.vertices.capacity(), vertex_capacity);
        assert_eq!(fan.indices.capacity(), index_capacity);
    }
}
