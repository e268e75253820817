//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounded depth
//! - A sky gradient for rays that escape the scene
//! - Anti-aliasing via jittered multi-sampling

use crate::{sampling::gen_f32, Camera, Color, Hittable, Ray};
use glint_math::{Interval, VecExt};
use rand::RngCore;

/// Default bound on the number of bounces.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Default lower bound on hit distance, keeps bounced rays from
/// re-hitting the surface they start on.
pub const DEFAULT_T_MIN: f32 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Hits closer than this are ignored
    pub t_min: f32,
    /// Base seed for the parallel renderer
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 200,
            image_height: 100,
            samples_per_pixel: 100,
            max_depth: DEFAULT_MAX_DEPTH,
            t_min: DEFAULT_T_MIN,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Image width / height.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }
}

/// Compute the color seen by a ray.
///
/// `depth` is the number of bounces taken so far; the first call passes 0.
/// A hit that scatters recurses with `depth + 1` and is tinted by the
/// material's attenuation. A hit at `max_depth` or one the material absorbs
/// is black. A miss returns the sky.
pub fn trace(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(config.t_min, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    if depth >= config.max_depth {
        return Color::ZERO;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * trace(&result.scattered, world, depth + 1, config, rng),
        None => Color::ZERO,
    }
}

/// Background radiance: white at the bottom blending to light blue at the top.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().unit_vector();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel with multi-sampling.
///
/// Pixel rows count down from the top of the image; the camera's `t`
/// coordinate counts up from the bottom.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = config.samples_per_pixel.max(1);
    let row = (config.image_height - 1 - y) as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let s = (x as f32 + gen_f32(rng)) / config.image_width as f32;
        let t = (row + gen_f32(rng)) / config.image_height as f32;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += trace(&ray, world, 0, config, rng);
    }

    // Average the samples
    pixel_color / samples as f32
}

/// Linear color image, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the entire scene to an image buffer on the calling thread.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.image_width, config.image_height);

    for y in 0..config.image_height {
        for x in 0..config.image_width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, color);
        }
    }

    image
}
