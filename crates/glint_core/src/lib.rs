//! Glint Core - scene description for the Glint path tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `MaterialDesc`,
//!   `SphereDesc`, `CameraConfig`
//! - **Loading**: JSON scene files via serde, with validation
//! - **Built-in scenes**: a small demo scene and the seeded random cover scene
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneDescription;
//!
//! let scene = SceneDescription::load("scene.json")?;
//! println!("Loaded {} spheres, {} materials",
//!     scene.spheres.len(),
//!     scene.materials.len());
//! ```

pub mod builtin;
pub mod scene;

// Re-export commonly used types
pub use scene::{CameraConfig, MaterialDesc, SceneDescription, SceneError, SceneResult, SphereDesc};
