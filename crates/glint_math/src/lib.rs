//! Glint math types.
//!
//! Vector arithmetic comes from glam; this crate adds the ray, interval and
//! vector helpers the path tracer is written against.

// Re-export glam for convenience
pub use glam::Vec3;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::VecExt;

/// Linear RGB color. Components are read as (r, g, b).
pub type Color = Vec3;
