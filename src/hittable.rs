//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and Hit for storing
//! intersection data.

use glam::Vec3A;
use crate::ray::Ray;
use crate::interval::Interval;
use crate::material::Material;

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, and material data
/// needed for shading calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The ray that produced this hit
    pub ray: Ray,
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Surface normal at the intersection point (unit vector)
    pub normal: Vec3A,
    /// Material of the object at the hit point
    pub material: Material,
}

impl Hit {
    /// Build the hit record for `ray` at time `t`.
    pub fn new(ray: &Ray, t: f32, normal: Vec3A, material: Material) -> Self {
        Self {
            ray: *ray,
            t,
            p: ray.at(t),
            normal,
            material,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) since scenes are shared across render
/// workers.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter range.
    ///
    /// Returns the hit if its time is accepted by `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit>;
}
