//! Rays for primary and shadow casting.
//!
//! A ray is defined as r(t) = origin + t * direction. With a unit-length
//! direction, `t` is the Euclidean distance from the origin, which is what the
//! nearest-hit resolution compares.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a slightly bumped surface
    /// point for shadow rays.
    pub origin: Vec3A,

    /// Direction of the ray.
    ///
    /// Rays built by [`Ray::towards`] and the camera are unit length, so hit
    /// times are distances.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Create a unit-direction ray from `origin` aimed at `target`.
    pub fn towards(origin: Vec3A, target: Vec3A) -> Self {
        Self::new(origin, (target - origin).normalize())
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
