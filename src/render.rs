//! Frame assembly.
//!
//! Every pixel is independent of every other, so the frame is split into rows
//! and rows are shaded on the rayon pool. Each worker writes only its own row
//! slice of the buffer; the scene and perspective are shared read-only.

use std::time::Instant;

use image::{ImageBuffer, Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::camera::Perspective;
use crate::error::{Buffer, RenderError};
use crate::scene::Scene;
use crate::shading::shade;

/// Colour of pixels whose primary ray hits nothing.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Bytes per pixel: R, G, B.
const CHANNELS: usize = 3;

/// Allocate a zeroed RGB frame, reporting allocation failure instead of aborting.
pub fn allocate_frame(width: u32, height: u32) -> Result<RgbImage, RenderError> {
    let bytes = width as usize * height as usize * CHANNELS;
    let allocation_error = || RenderError::Allocation {
        buffer: Buffer::Frame,
        bytes,
    };

    let mut data = Vec::new();
    data.try_reserve_exact(bytes).map_err(|_| allocation_error())?;
    data.resize(bytes, 0);

    ImageBuffer::from_raw(width, height, data).ok_or_else(allocation_error)
}

/// Colour of pixel `(x, y)`.
pub fn render_pixel(scene: &Scene, perspective: &Perspective, x: u32, y: u32) -> Rgb<u8> {
    let ray = perspective.primary_ray(x, y);
    match scene.nearest_hit(&ray) {
        Some(hit) => shade(scene, perspective, &hit),
        None => BACKGROUND,
    }
}

fn render_row(scene: &Scene, perspective: &Perspective, y: u32, row: &mut [u8]) {
    for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
        pixel.copy_from_slice(&render_pixel(scene, perspective, x as u32, y).0);
    }
}

/// Renders the scene on the current rayon pool.
///
/// Shows a progress bar of completed rows on stderr when it is a terminal.
pub fn render(scene: &Scene, perspective: &Perspective) -> Result<RgbImage, RenderError> {
    let mut image = allocate_frame(perspective.width(), perspective.height())?;
    let row_len = perspective.width() as usize * CHANNELS;
    if row_len == 0 {
        return Ok(image);
    }

    info!(
        "Rendering {}x{} using {} CPU threads...",
        perspective.width(),
        perspective.height(),
        rayon::current_num_threads()
    );
    debug!("{:?}", perspective);
    let generation_start = Instant::now();

    let pb = ProgressBar::new(perspective.height() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} rows ETA: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    image
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            render_row(scene, perspective, y as u32, row);
            pb.inc(1);
        });

    pb.finish();
    info!("Image rendered in {:.2?}", generation_start.elapsed());

    Ok(image)
}

/// Renders the scene on the calling thread, row by row.
pub fn render_sequential(scene: &Scene, perspective: &Perspective) -> Result<RgbImage, RenderError> {
    let mut image = allocate_frame(perspective.width(), perspective.height())?;
    let row_len = perspective.width() as usize * CHANNELS;
    if row_len == 0 {
        return Ok(image);
    }

    for (y, row) in image.chunks_mut(row_len).enumerate() {
        render_row(scene, perspective, y as u32, row);
    }

    Ok(image)
}
