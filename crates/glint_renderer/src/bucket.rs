//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Each bucket owns a generator seeded from the
//! render seed and its index, so a given seed always produces the same
//! image no matter how rayon schedules the work.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::renderer::{render_pixel, ImageBuffer};
use crate::{Camera, Color, Hittable, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in row-major order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Seed for this bucket's generator.
    pub fn seed(&self, base_seed: u64) -> u64 {
        // splitmix-style spread so neighbouring indices get unrelated streams
        base_seed ^ (self.index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Generate buckets covering the image, row-major from the top-left.
///
/// Edge buckets are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(camera, world, global_x, global_y, config, rng));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in the full image.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let mut colors = self.pixels.iter();
        for local_y in 0..self.bucket.height {
            for local_x in 0..self.bucket.width {
                if let Some(&color) = colors.next() {
                    image.set(self.bucket.x + local_x, self.bucket.y + local_y, color);
                }
            }
        }
    }
}

/// Render the whole image across the rayon thread pool.
pub fn render_parallel(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> ImageBuffer {
    let buckets = generate_buckets(config.image_width, config.image_height, DEFAULT_BUCKET_SIZE);
    let total = buckets.len();
    log::info!(
        "Rendering {}x{} @ {} spp in {} buckets on {} threads",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        total,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let mut rng = StdRng::seed_from_u64(bucket.seed(config.seed));
            let pixels = render_bucket(bucket, camera, world, config, &mut rng);
            log::debug!("Bucket {}/{} done at ({}, {})", bucket.index + 1, total, bucket.x, bucket.y);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.image_width, config.image_height);
    for result in &results {
        result.write_into(&mut image);
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Scene, Sphere, Vec3};
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);
        assert_eq!(buckets[3], Bucket::new(64, 64, 36, 6, 3));
    }

    #[test]
    fn test_bucket_seeds_differ() {
        let buckets = generate_buckets(256, 256, 16);
        let seeds: HashSet<u64> = buckets.iter().map(|b| b.seed(99)).collect();
        assert_eq!(seeds.len(), buckets.len());
    }

    #[test]
    fn test_write_into() {
        let bucket = Bucket::new(1, 1, 2, 1, 0);
        let result = BucketResult::new(bucket, vec![Color::ONE, Color::splat(0.5)]);
        let mut image = ImageBuffer::new(4, 3);

        result.write_into(&mut image);

        assert_eq!(image.get(1, 1), Color::ONE);
        assert_eq!(image.get(2, 1), Color::splat(0.5));
        assert_eq!(image.get(0, 1), Color::ZERO);
        assert_eq!(image.get(1, 0), Color::ZERO);
    }

    #[test]
    fn test_render_parallel_is_reproducible() {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )));
        let camera = Camera::default();
        let config = RenderConfig {
            image_width: 40,
            image_height: 20,
            samples_per_pixel: 2,
            max_depth: 4,
            seed: 7,
            ..Default::default()
        };

        let a = render_parallel(&camera, &scene, &config);
        let b = render_parallel(&camera, &scene, &config);

        assert_eq!(a, b);
        assert_eq!(a.pixels.len(), 800);
        // Every pixel was written: the sphere only darkens, the sky is never black
        assert!(a.pixels.iter().all(|c| c.length() > 0.0));
    }
}
