//! Scene store and nearest-hit resolution.
//!
//! A scene is built once, then shared read-only by every render worker.
//! Intersection is a brute-force scan: scenes hold a handful of primitives.

use glam::Vec3A;
use log::debug;

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// Collection of spheres and triangles forming a scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Spheres, in insertion order.
    pub spheres: Vec<Sphere>,
    /// Triangles, in insertion order.
    pub triangles: Vec<Triangle>,
}

impl Scene {
    /// Create a scene with no primitives. Every ray misses it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a scene from its primitives.
    pub fn new(spheres: Vec<Sphere>, triangles: Vec<Triangle>) -> Self {
        Self { spheres, triangles }
    }

    /// The reference scene: three red spheres in a box made of a blue back
    /// wall, a white floor and a red right-hand wall.
    pub fn reference() -> Self {
        let spheres = vec![
            Sphere::new(Vec3A::new(0.0, 0.0, -16.0), 2.0, Material::RED),
            Sphere::new(Vec3A::new(3.0, -1.0, -14.0), 1.0, Material::RED),
            Sphere::new(Vec3A::new(-3.0, -1.0, -14.0), 1.0, Material::RED),
        ];

        let triangles = vec![
            // back wall
            Triangle::new(
                Vec3A::new(-8.0, -2.0, -20.0),
                Vec3A::new(8.0, -2.0, -20.0),
                Vec3A::new(8.0, 10.0, -20.0),
                Material::BLUE,
            ),
            Triangle::new(
                Vec3A::new(-8.0, -2.0, -20.0),
                Vec3A::new(8.0, 10.0, -20.0),
                Vec3A::new(-8.0, 10.0, -20.0),
                Material::BLUE,
            ),
            // floor
            Triangle::new(
                Vec3A::new(-8.0, -2.0, -20.0),
                Vec3A::new(8.0, -2.0, -10.0),
                Vec3A::new(8.0, -2.0, -20.0),
                Material::WHITE,
            ),
            Triangle::new(
                Vec3A::new(-8.0, -2.0, -20.0),
                Vec3A::new(-8.0, -2.0, -10.0),
                Vec3A::new(8.0, -2.0, -10.0),
                Material::WHITE,
            ),
            // right wall
            Triangle::new(
                Vec3A::new(8.0, -2.0, -20.0),
                Vec3A::new(8.0, -2.0, -10.0),
                Vec3A::new(8.0, 10.0, -20.0),
                Material::RED,
            ),
        ];

        Self::new(spheres, triangles)
    }

    /// Whether the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.triangles.is_empty()
    }

    /// Every primitive, spheres first.
    fn objects(&self) -> impl Iterator<Item = &dyn Hittable> {
        self.spheres
            .iter()
            .map(|s| s as &dyn Hittable)
            .chain(self.triangles.iter().map(|t| t as &dyn Hittable))
    }

    /// Nearest hit in front of the ray origin, if any.
    ///
    /// Each primitive is only asked for hits strictly closer than the best so
    /// far, so the result is the globally nearest hit whatever the order of
    /// primitives.
    pub fn nearest_hit(&self, r: &Ray) -> Option<Hit> {
        self.objects().fold(None, |nearest: Option<Hit>, object| {
            let ray_t = nearest.map_or(Interval::FORWARD, |hit| Interval::FORWARD.closer_than(hit.t));
            object.hit(r, ray_t).or(nearest)
        })
    }
}

/// Which scene a render uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// The hardcoded reference scene.
    Reference,
    /// No primitives. Renders solid black.
    Empty,
}

impl SceneKind {
    /// Construct the scene.
    pub fn build(self) -> Scene {
        let scene = match self {
            SceneKind::Reference => Scene::reference(),
            SceneKind::Empty => Scene::empty(),
        };
        debug!(
            "{:?} scene: {} spheres, {} triangles",
            self,
            scene.spheres.len(),
            scene.triangles.len()
        );
        scene
    }
}
