//! Pinhole camera for primary ray generation

use glam::Vec3A;

use crate::ray::Ray;

/// Camera and light configuration for a render.
///
/// The camera sits at the world origin looking down -Z at a square screen
/// `screen_distance` units away. The screen spans `screen_width_world` units,
/// centred on the view axis, and is divided into `screen_width_pixels` pixels
/// along each side.
#[derive(Debug, Clone, PartialEq)]
pub struct Perspective {
    /// Position of the point light
    pub light_position: Vec3A,
    /// Camera position in world space (always the origin)
    pub camera_position: Vec3A,
    /// Distance from the camera to the screen plane
    pub screen_distance: f32,
    /// Screen width in world units
    pub screen_width_world: f32,
    /// Screen width (and height) in pixels
    pub screen_width_pixels: u32,
    /// World units covered by one pixel
    pub units_per_pixel: f32,
}

impl Perspective {
    /// Light position of the reference render.
    pub const REFERENCE_LIGHT: Vec3A = Vec3A::new(3.0, 5.0, -15.0);

    /// Image size of the reference render.
    pub const REFERENCE_WIDTH: u32 = 512;

    /// Creates a perspective with a 2-unit-wide screen 2 units from the camera.
    pub fn new(light_position: Vec3A, screen_width_pixels: u32) -> Self {
        let screen_width_world = 2.0;
        Self {
            light_position,
            camera_position: Vec3A::ZERO,
            screen_distance: 2.0,
            screen_width_world,
            screen_width_pixels,
            units_per_pixel: screen_width_world / screen_width_pixels as f32,
        }
    }

    /// The reference perspective: 512x512 pixels, light at (3, 5, -15).
    pub fn reference() -> Self {
        Self::new(Self::REFERENCE_LIGHT, Self::REFERENCE_WIDTH)
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.screen_width_pixels
    }

    /// Image height in pixels. The screen is square.
    pub fn height(&self) -> u32 {
        self.screen_width_pixels
    }

    /// Unit-length ray from the camera through the centre of pixel `(x, y)`.
    ///
    /// Pixel (0, 0) is the top-left corner of the screen.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let half_width = 0.5 * self.screen_width_world;
        let dx = -half_width + x as f32 * self.units_per_pixel + 0.5 * self.units_per_pixel;
        let dy = half_width - y as f32 * self.units_per_pixel - 0.5 * self.units_per_pixel;
        let direction = Vec3A::new(dx, dy, -self.screen_distance).normalize();

        Ray::new(self.camera_position, direction)
    }
}
