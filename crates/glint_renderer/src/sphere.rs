//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use glint_math::{Interval, Vec3};

/// A sphere primitive.
///
/// The material is shared: many spheres may point at the same one.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // |origin + t*dir - center|^2 = r^2 expanded into a*t^2 + b*t + c = 0
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-b - sqrtd) / (2.0 * a);
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / (2.0 * a);
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.point_at(root);
        Some(HitRecord {
            t: root,
            point,
            normal: (point - self.center) / self.radius,
            material: self.material.as_ref(),
        })
    }
}
