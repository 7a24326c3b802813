//! Ray type for Whitted ray tracing.
//!
//! A ray is a homogeneous start point (w = 1) and a direction vector (w = 0).
//! Directions are deliberately NOT normalized: primary rays reach the image
//! plane at t = 1 and shadow rays reach the light at t = 1, and both the
//! tracer and the shader rely on that parameterization.

use glam::Vec4;

/// A ray with homogeneous start point and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Start point of the ray (w = 1)
    start: Vec4,
    /// Direction vector (w = 0, not necessarily normalized)
    direction: Vec4,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(start: Vec4, direction: Vec4) -> Self {
        Self { start, direction }
    }

    /// Get the ray's start point.
    #[inline]
    pub fn start(&self) -> Vec4 {
        self.start
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec4 {
        self.direction
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = start + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec4 {
        self.start + t * self.direction
    }
}
