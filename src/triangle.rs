//! Triangle primitive.
//!
//! A hit point is written as P = A + beta*(B - A) + gamma*(C - A). Equating it
//! with O + t*d gives the 3x3 system
//!
//! ```text
//! [ A-B | A-C | d ] [beta gamma t]^T = A - O
//! ```
//!
//! which is solved with Cramer's rule.

use glam::Vec3A;
use crate::ray::Ray;
use crate::hittable::{Hittable, Hit};
use crate::interval::Interval;
use crate::material::Material;

/// Below this the ray is treated as parallel to the triangle's plane.
const DETERMINANT_EPSILON: f32 = 1e-8;

/// Triangle primitive defined by three vertices and a material.
///
/// The vertices must not be collinear; this is not validated, but degenerate
/// triangles are never hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Vec3A,
    /// Second vertex.
    pub b: Vec3A,
    /// Third vertex.
    pub c: Vec3A,
    /// Material properties determining the surface colour.
    pub material: Material,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(a: Vec3A, b: Vec3A, c: Vec3A, material: Material) -> Self {
        Self { a, b, c, material }
    }

    /// Unit geometric normal, wound by `(B - A) x (C - A)`.
    pub fn normal(&self) -> Vec3A {
        (self.b - self.a).cross(self.c - self.a).normalize()
    }

    /// Solve for `(beta, gamma, t)`, or `None` when the ray is parallel to the plane.
    pub fn barycentric(&self, r: &Ray) -> Option<(f32, f32, f32)> {
        let ab = self.a - self.b;
        let ac = self.a - self.c;
        let ao = self.a - r.origin;

        let ac_x_d = ac.cross(r.direction);
        let det = ab.dot(ac_x_d);
        if det.abs() < DETERMINANT_EPSILON {
            return None;
        }

        let beta = ao.dot(ac_x_d) / det;
        let gamma = ab.dot(ao.cross(r.direction)) / det;
        let t = ab.dot(ac.cross(ao)) / det;
        Some((beta, gamma, t))
    }
}

impl Hittable for Triangle {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit> {
        let (beta, gamma, t) = self.barycentric(r)?;

        if !ray_t.accepts(t) {
            return None;
        }
        if !Interval::UNIT.contains(gamma) {
            return None;
        }
        if !Interval::new(0.0, 1.0 - gamma).contains(beta) {
            return None;
        }

        // Always point the normal against the incident ray
        let outward_normal = self.normal();
        let normal = if r.direction.dot(outward_normal) < 0.0 {
            outward_normal
        } else {
            -outward_normal
        };

        Some(Hit::new(r, t, normal, self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Triangle {
        Triangle::new(
            Vec3A::new(0.0, 0.0, -5.0),
            Vec3A::new(1.0, 0.0, -5.0),
            Vec3A::new(0.0, 1.0, -5.0),
            Material::BLUE,
        )
    }

    #[test]
    fn test_hit_inside() {
        let ray = Ray::towards(Vec3A::ZERO, Vec3A::new(0.25, 0.25, -5.0));
        let hit = triangle().hit(&ray, Interval::FORWARD).expect("ray should hit");

        assert!(hit.p.abs_diff_eq(Vec3A::new(0.25, 0.25, -5.0), 1e-5));
        assert!((hit.t - ray.origin.distance(hit.p)).abs() < 1e-5);
        assert!(hit.normal.abs_diff_eq(Vec3A::Z, 1e-6));
        assert_eq!(hit.material, Material::BLUE);
    }

    #[test]
    fn test_barycentric_coordinates() {
        let ray = Ray::towards(Vec3A::ZERO, Vec3A::new(0.25, 0.5, -5.0));
        let (beta, gamma, _) = triangle().barycentric(&ray).expect("not parallel");

        assert!((beta - 0.25).abs() < 1e-5);
        assert!((gamma - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_outside_barycentric_range_misses() {
        let tri = triangle();
        for target in [
            Vec3A::new(0.75, 0.75, -5.0),  // beta + gamma > 1
            Vec3A::new(-0.1, 0.2, -5.0),   // beta < 0
            Vec3A::new(0.2, -0.1, -5.0),   // gamma < 0
            Vec3A::new(0.0, 1.5, -5.0),    // gamma > 1
        ] {
            let ray = Ray::towards(Vec3A::ZERO, target);
            assert!(tri.hit(&ray, Interval::FORWARD).is_none(), "hit at {target}");
        }
    }

    #[test]
    fn test_behind_origin_misses() {
        let ray = Ray::towards(Vec3A::ZERO, Vec3A::new(-0.25, -0.25, 5.0));
        assert!(triangle().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vec3A::new(0.0, 0.0, -5.0), Vec3A::X);
        assert!(triangle().barycentric(&ray).is_none());
        assert!(triangle().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_normal_faces_the_ray() {
        let ray = Ray::new(Vec3A::new(0.25, 0.25, -10.0), Vec3A::Z);
        let hit = triangle().hit(&ray, Interval::FORWARD).expect("back face is still hit");

        assert!(hit.normal.abs_diff_eq(-Vec3A::Z, 1e-6));
    }
}
