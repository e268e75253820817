//! Build an intersectable scene from its description.

use std::sync::Arc;

use glint_core::{MaterialDesc, SceneDescription, SceneError, SceneResult};

use crate::{Lambertian, Material, Metal, Scene, Sphere};

/// Create the runtime material for a description.
pub fn material_from_desc(desc: &MaterialDesc) -> Arc<dyn Material> {
    match *desc {
        MaterialDesc::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialDesc::Metal { albedo, fuzz } => Arc::new(Metal::new(albedo, fuzz)),
    }
}

/// Validate a description and turn it into a [`Scene`].
///
/// Each material is created once and shared by every sphere that uses it.
pub fn build_scene(description: &SceneDescription) -> SceneResult<Scene> {
    description.validate()?;

    let materials: Vec<Arc<dyn Material>> = description.materials.iter().map(material_from_desc).collect();

    let mut scene = Scene::new();
    for (i, sphere) in description.spheres.iter().enumerate() {
        let material = materials
            .get(sphere.material)
            .ok_or(SceneError::MissingMaterial {
                sphere: i,
                index: sphere.material,
                count: materials.len(),
            })?;
        scene.add(Box::new(Sphere::new(sphere.center, sphere.radius, Arc::clone(material))));
    }

    log::info!(
        "Built scene: {} spheres sharing {} materials",
        scene.len(),
        materials.len()
    );
    Ok(scene)
}
