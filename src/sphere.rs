//! Sphere primitive.
//!
//! Ray-sphere intersection solves |O + t*d - C|^2 = r^2 for t.

use glam::Vec3A;
use crate::ray::Ray;
use crate::hittable::{Hittable, Hit};
use crate::interval::Interval;
use crate::material::Material;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere. Must be positive; this is not validated.
    pub radius: f32,

    /// Material properties determining the surface colour.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: Vec3A) -> Vec3A {
        (p - self.center).normalize()
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit> {
        // Vector from sphere center to ray origin
        let oc = r.origin - self.center;

        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // (d.(O-C))^2 - |d|^2 (|O-C|^2 - r^2)
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t0 = (-h - sqrtd) / a;
        let t1 = (-h + sqrtd) / a;

        // Only the entry point counts. An origin inside the sphere puts the
        // smaller root behind the ray and the sphere is not hit.
        let root = t0.min(t1);
        if !ray_t.accepts(root) {
            return None;
        }

        let p = r.at(root);
        Some(Hit::new(r, root, self.normal_at(p), self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> Sphere {
        Sphere::new(Vec3A::new(0.0, 0.0, -16.0), 2.0, Material::RED)
    }

    #[test]
    fn test_hit_on_axis() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let hit = sphere().hit(&ray, Interval::FORWARD).expect("ray should hit");

        assert!((hit.t - 14.0).abs() < 1e-5);
        assert!(hit.p.abs_diff_eq(Vec3A::new(0.0, 0.0, -14.0), 1e-5));
        assert!(hit.normal.abs_diff_eq(-ray.direction, 1e-6));
        assert_eq!(hit.material, Material::RED);
    }

    #[test]
    fn test_miss_when_discriminant_negative() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert!(sphere().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_not_hit() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));
        assert!(sphere().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_farther_than_current_nearest_is_rejected() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        assert!(sphere().hit(&ray, Interval::FORWARD.closer_than(14.0)).is_none());
        assert!(sphere().hit(&ray, Interval::FORWARD.closer_than(14.5)).is_some());
    }

    #[test]
    fn test_grazing_ray_touches_once() {
        // Tangent to the sphere at (2, 0, -16): discriminant is exactly zero.
        let ray = Ray::new(Vec3A::new(2.0, 0.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        let hit = sphere().hit(&ray, Interval::FORWARD).expect("tangent ray should touch");

        assert!((hit.t - 16.0).abs() < 1e-4);
        assert!(hit.normal.abs_diff_eq(Vec3A::X, 1e-4));
    }
}
