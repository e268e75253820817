//! Glint Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer over spheres with diffuse and metal surfaces.
//! Rays leave a thin-lens camera, bounce recursively off the nearest surface
//! until they escape to the sky or are absorbed, and the averaged samples
//! are written out as PPM or PNG.

mod bucket;
mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampling;
mod sphere;
mod world;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, Scene};
pub use material::{Lambertian, Material, Metal, ScatterResult};
pub use output::{color_to_rgb, linear_to_gamma, quantize, save_image, write_ppm, OutputError};
pub use renderer::{
    render, render_pixel, sky_gradient, trace, ImageBuffer, RenderConfig, DEFAULT_MAX_DEPTH, DEFAULT_T_MIN,
};
pub use sampling::{gen_f32, random_in_unit_disk, random_in_unit_sphere, MAX_REJECTION_ATTEMPTS};
pub use sphere::Sphere;
pub use world::{build_scene, material_from_desc};

/// Re-export math types from glint_math
pub use glint_math::{Color, Interval, Ray, Vec3, VecExt};
