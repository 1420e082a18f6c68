//! Frame rendering: pixel loops, image buffer, PNG output.

use std::path::Path;

use orb_core::Scene;
use orb_math::Interval;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::Camera;
use crate::tracer::trace_ray;

/// Primary rays start at the projection plane, one unit out, so geometry
/// between the camera and the plane is never drawn.
const PRIMARY_RAY_MIN_T: f64 = 1.0;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum reflection recursion depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { max_depth: 2 }
    }
}

/// Render a single pixel, addressed in buffer coordinates.
///
/// Converts the buffer position to the centered offsets the camera
/// expects (x right, y up, origin mid-image) and traces the ray.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    px: u32,
    py: u32,
    config: &RenderConfig,
) -> [u8; 3] {
    let x = px as i32 - (camera.image_width / 2) as i32;
    let y = (camera.image_height / 2) as i32 - py as i32 - 1;

    let ray = camera.get_ray(x, y);
    trace_ray(
        ray.origin(),
        ray.direction(),
        Interval::new(PRIMARY_RAY_MIN_T, f64::INFINITY),
        config.max_depth,
        scene,
    )
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0]; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for [r, g, b] in &self.pixels {
            bytes.extend_from_slice(&[*r, *g, *b, 255]);
        }
        bytes
    }

    /// Save the buffer as a PNG file.
    pub fn save_png(&self, path: &Path) -> image::ImageResult<()> {
        let mut img = image::RgbImage::new(self.width, self.height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb(self.get(x, y));
        }
        img.save(path)
    }
}

/// Render the entire frame single-threaded.
///
/// The reference loop: one trace per pixel, row by row.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for py in 0..camera.image_height {
        for px in 0..camera.image_width {
            image.set(px, py, render_pixel(camera, scene, px, py, config));
        }
    }

    image
}

/// Render the frame in parallel, one bucket per rayon task.
///
/// Every worker reads the same immutable scene and camera snapshot;
/// results land in disjoint regions of the buffer, so assembling them
/// needs no synchronization.
pub fn render_parallel(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let buckets = generate_buckets(camera.image_width, camera.image_height, DEFAULT_BUCKET_SIZE);
    log::debug!(
        "rendering {} buckets for a {}x{} frame",
        buckets.len(),
        camera.image_width,
        camera.image_height
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, scene, config)))
        .collect();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in results {
        let bucket = result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                image.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    image
}
