//! Scene description types.
//!
//! A scene is a material table plus an ordered list of spheres that refer to
//! materials by index, and the camera that looks at them. The description is
//! plain data; the renderer turns it into intersectable objects.

use std::fs;
use std::path::Path;

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sphere {sphere} references material {index}, but only {count} materials are defined")]
    MissingMaterial {
        sphere: usize,
        index: usize,
        count: usize,
    },

    #[error("Sphere {sphere} has invalid radius {radius}")]
    InvalidRadius { sphere: usize, radius: f32 },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A material definition.
///
/// Serialized with a `kind` tag, e.g.
/// `{"kind": "metal", "albedo": [0.8, 0.6, 0.2], "fuzz": 0.3}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MaterialDesc {
    /// Diffuse surface.
    Lambertian { albedo: Color },

    /// Mirror-like surface; `fuzz` in [0, 1] roughens the reflection.
    Metal {
        albedo: Color,
        #[serde(default)]
        fuzz: f32,
    },
}

impl MaterialDesc {
    /// Reflectance of the material.
    pub fn albedo(&self) -> Color {
        match self {
            MaterialDesc::Lambertian { albedo } | MaterialDesc::Metal { albedo, .. } => *albedo,
        }
    }
}

/// A sphere placed in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,

    /// Index into [`SceneDescription::materials`]
    pub material: usize,
}

impl SphereDesc {
    pub fn new(center: Vec3, radius: f32, material: usize) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Thin-lens camera placement.
///
/// The aspect ratio is not part of the description; it comes from the
/// output resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,

    /// Vertical field of view in degrees
    pub vfov: f32,

    /// Lens diameter; 0 is a pinhole
    pub aperture: f32,

    /// Distance from the lens to the plane of perfect focus
    pub focus_distance: f32,
}

impl Default for CameraConfig {
    /// Looking down -Z from the origin through a 90 degree pinhole.
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aperture: 0.0,
            focus_distance: 1.0,
        }
    }
}

/// Everything needed to render a scene, apart from output settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraConfig,
    pub materials: Vec<MaterialDesc>,
    pub spheres: Vec<SphereDesc>,
}

impl SceneDescription {
    /// Create an empty scene with the default camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material and return its index.
    pub fn add_material(&mut self, material: MaterialDesc) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Add a sphere using a previously added material.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: usize) {
        self.spheres.push(SphereDesc::new(center, radius, material));
    }

    /// Parse a scene from JSON and validate it.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load a scene from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&json)?;
        log::info!(
            "Loaded scene {}: {} spheres, {} materials",
            path.display(),
            scene.spheres.len(),
            scene.materials.len()
        );
        Ok(scene)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the description can be rendered.
    ///
    /// Fuzz values outside [0, 1] are accepted (the renderer clamps them) but
    /// produce a warning.
    pub fn validate(&self) -> SceneResult<()> {
        for (i, material) in self.materials.iter().enumerate() {
            if let MaterialDesc::Metal { fuzz, .. } = material {
                if !(0.0..=1.0).contains(fuzz) {
                    log::warn!("Material {} has fuzz {} outside [0, 1]; it will be clamped", i, fuzz);
                }
            }
        }

        for (i, sphere) in self.spheres.iter().enumerate() {
            if sphere.material >= self.materials.len() {
                return Err(SceneError::MissingMaterial {
                    sphere: i,
                    index: sphere.material,
                    count: self.materials.len(),
                });
            }
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(SceneError::InvalidRadius {
                    sphere: i,
                    radius: sphere.radius,
                });
            }
        }

        let camera = &self.camera;
        if camera.look_from == camera.look_at {
            return Err(SceneError::InvalidCamera(
                "look_from and look_at are the same point".to_string(),
            ));
        }
        if camera.vup.cross(camera.look_from - camera.look_at).length_squared() == 0.0 {
            return Err(SceneError::InvalidCamera(
                "vup is parallel to the view direction".to_string(),
            ));
        }
        if !(camera.vfov > 0.0 && camera.vfov < 180.0) {
            return Err(SceneError::InvalidCamera(format!(
                "vfov must be in (0, 180) degrees, got {}",
                camera.vfov
            )));
        }
        if camera.aperture < 0.0 {
            return Err(SceneError::InvalidCamera(format!(
                "aperture must not be negative, got {}",
                camera.aperture
            )));
        }
        if camera.focus_distance <= 0.0 {
            return Err(SceneError::InvalidCamera(format!(
                "focus_distance must be positive, got {}",
                camera.focus_distance
            )));
        }

        Ok(())
    }
}
