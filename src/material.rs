//! Surface materials.
//!
//! A material is a flat colour plus a reflectivity flag. The flag is part of
//! the data model but shading does not consult it: there is no reflection
//! tracing, so reflective surfaces render like diffuse ones.

use glam::Vec3A;

/// RGB colour with components in [0, 255].
pub type Color = Vec3A;

/// Material attached to exactly one primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse colour, components in [0, 255].
    pub color: Color,
    /// Whether the surface is a mirror. Carried through hits but not shaded.
    pub reflective: bool,
}

impl Material {
    /// Non-reflective material of the given colour.
    pub const fn diffuse(color: Color) -> Self {
        Self {
            color,
            reflective: false,
        }
    }

    /// Diffuse red.
    pub const RED: Material = Material::diffuse(Vec3A::new(255.0, 0.0, 0.0));

    /// Diffuse blue.
    pub const BLUE: Material = Material::diffuse(Vec3A::new(0.0, 0.0, 255.0));

    /// Diffuse white.
    pub const WHITE: Material = Material::diffuse(Vec3A::new(255.0, 255.0, 255.0));

    /// Reflective material. Its colour is black because a mirror takes its
    /// colour from what it reflects.
    pub const MIRROR: Material = Material {
        color: Vec3A::ZERO,
        reflective: true,
    };
}
