//! Hard shadows and Lambertian diffuse shading.
//!
//! A hit is lit by a single point light. A shadow ray is cast from the hit
//! point towards the light; if it hits anything at all, the point gets the
//! ambient floor. Otherwise it gets the cosine between the light direction and
//! the surface normal, never less than the ambient floor. There is no specular
//! term and no falloff with distance.

use image::Rgb;

use crate::camera::Perspective;
use crate::hittable::Hit;
use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;

/// Minimum lighting factor, standing in for indirect light.
pub const AMBIENT: f32 = 0.2;

/// How far shadow rays start off the surface, along the normal.
pub const SHADOW_BIAS: f32 = 0.0002;

/// The ray from a hit towards the light, started just off the surface so it
/// does not immediately re-hit it.
pub fn shadow_ray(perspective: &Perspective, hit: &Hit) -> Ray {
    let origin = hit.p + hit.normal * SHADOW_BIAS;
    Ray::towards(origin, perspective.light_position)
}

/// Lighting factor in `[AMBIENT, 1.0]` for a primary hit.
pub fn shadow_factor(scene: &Scene, perspective: &Perspective, hit: &Hit) -> f32 {
    let to_light = shadow_ray(perspective, hit);
    if scene.nearest_hit(&to_light).is_some() {
        return AMBIENT;
    }

    to_light.direction.dot(hit.normal).clamp(AMBIENT, 1.0)
}

/// Final pixel colour of a hit.
///
/// Reflective materials are shaded like diffuse ones.
pub fn shade(scene: &Scene, perspective: &Perspective, hit: &Hit) -> Rgb<u8> {
    to_rgb(hit.material.color * shadow_factor(scene, perspective, hit))
}

/// Convert a colour with components in [0, 255] to bytes, truncating.
pub fn to_rgb(color: Color) -> Rgb<u8> {
    Rgb([color.x as u8, color.y as u8, color.z as u8])
}

#[cfg(test)]
mod tests {
    use glam::Vec3A;

    use super::*;
    use crate::material::Material;
    use crate::sphere::Sphere;

    const LIGHT: Vec3A = Vec3A::new(0.0, 10.0, 0.0);

    fn floor_hit(normal: Vec3A, material: Material) -> Hit {
        let ray = Ray::new(Vec3A::new(0.0, 1.0, 1.0), Vec3A::new(0.0, -1.0, -1.0).normalize());
        Hit::new(&ray, 2.0_f32.sqrt(), normal, material)
    }

    fn perspective() -> Perspective {
        Perspective::new(LIGHT, 4)
    }

    #[test]
    fn test_facing_light_unoccluded_is_fully_lit() {
        let hit = floor_hit(Vec3A::Y, Material::WHITE);
        let factor = shadow_factor(&Scene::empty(), &perspective(), &hit);

        assert!((factor - 1.0).abs() < 1e-6);
        assert!(factor <= 1.0);
    }

    #[test]
    fn test_occluded_is_exactly_ambient() {
        let blocker = Sphere::new(Vec3A::new(0.0, 5.0, 0.0), 1.0, Material::RED);
        let scene = Scene::new(vec![blocker], vec![]);
        let hit = floor_hit(Vec3A::Y, Material::WHITE);

        assert_eq!(shadow_factor(&scene, &perspective(), &hit), AMBIENT);
    }

    #[test]
    fn test_facing_away_is_clamped_to_ambient() {
        let hit = floor_hit(-Vec3A::Y, Material::WHITE);
        let factor = shadow_factor(&Scene::empty(), &perspective(), &hit);

        assert_eq!(factor, AMBIENT);
    }

    #[test]
    fn test_oblique_light_follows_cosine() {
        // Light at 60 degrees from the normal.
        let normal = Vec3A::new(0.0, 0.5, 3.0_f32.sqrt() / 2.0);
        let hit = floor_hit(normal, Material::WHITE);
        let factor = shadow_factor(&Scene::empty(), &perspective(), &hit);

        assert!((factor - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_shadow_ray_starts_off_surface() {
        let hit = floor_hit(Vec3A::Y, Material::WHITE);
        let ray = shadow_ray(&perspective(), &hit);

        assert!(ray.origin.abs_diff_eq(hit.p + Vec3A::Y * SHADOW_BIAS, 1e-7));
        assert!(ray.direction.abs_diff_eq(Vec3A::Y, 1e-6));
    }

    #[test]
    fn test_shade_scales_and_truncates() {
        let hit = floor_hit(-Vec3A::Y, Material::RED);
        assert_eq!(shade(&Scene::empty(), &perspective(), &hit), Rgb([51, 0, 0]));
    }

    #[test]
    fn test_reflective_flag_does_not_change_shading() {
        let lit = floor_hit(Vec3A::Y, Material::WHITE);
        let mirrored = floor_hit(
            Vec3A::Y,
            Material {
                reflective: true,
                ..Material::WHITE
            },
        );
        let scene = Scene::empty();

        assert_eq!(shade(&scene, &perspective(), &lit), shade(&scene, &perspective(), &mirrored));
        assert_eq!(shade(&scene, &perspective(), &floor_hit(Vec3A::Y, Material::MIRROR)), Rgb([0, 0, 0]));
    }
}
