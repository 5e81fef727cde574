//! rayshade ray caster
//!
//! Renders spheres and triangles lit by a single point light, with hard
//! shadows from one shadow ray per visible point. Frames are assembled in
//! parallel and written as 8-bit RGB PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ray;
pub mod interval;
pub mod material;
pub mod hittable;
pub mod sphere;
pub mod triangle;
pub mod scene;
pub mod camera;
pub mod shading;
pub mod render;
pub mod output;
pub mod error;
