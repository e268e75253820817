//! Material trait for surface scattering.

use crate::{hittable::HitRecord, sampling::random_in_unit_sphere, Ray};
use glint_math::{Color, VecExt};
use rand::RngCore;

/// Outcome of a successful scatter.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Color multiplied into the light returning along `scattered`
    pub attenuation: Color,
    /// The continuation ray, starting at the hit point
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `Some(ScatterResult)` if the ray scatters,
    /// or `None` if the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        // Aim at a random point in the unit sphere sitting on the normal
        let target = rec.point + rec.normal + random_in_unit_sphere(rng);

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.point, target - rec.point),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let reflected = ray_in.direction().unit_vector().reflect(rec.normal);
        let scattered_dir = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Anything pushed below the surface is absorbed
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.point, scattered_dir),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn floor_hit(material: &dyn Material) -> HitRecord<'_> {
        HitRecord {
            t: 1.0,
            point: Vec3::ZERO,
            normal: Vec3::Y,
            material,
        }
    }

    #[test]
    fn test_lambertian_always_scatters() {
        let material = Lambertian::new(Color::new(0.3, 0.6, 0.9));
        let rec = floor_hit(&material);
        let ray_in = Ray::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let result = material.scatter(&ray_in, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::new(0.3, 0.6, 0.9));
            assert_eq!(result.scattered.origin(), rec.point);
            // Direction lies in the unit sphere centered on the normal tip
            assert!((result.scattered.direction() - rec.normal).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        assert_eq!(Metal::new(Color::ONE, 3.0).fuzz(), 1.0);
        assert_eq!(Metal::new(Color::ONE, -1.0).fuzz(), 0.0);
        assert_eq!(Metal::new(Color::ONE, 0.4).fuzz(), 0.4);
    }

    #[test]
    fn test_perfect_mirror() {
        let material = Metal::new(Color::new(0.8, 0.8, 0.8), 0.0);
        let rec = floor_hit(&material);
        let ray_in = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(2.0, -2.0, 0.0));
        let mut rng = StdRng::seed_from_u64(1);

        let result = material.scatter(&ray_in, &rec, &mut rng).unwrap();
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((result.scattered.direction() - expected).length() < 1e-6);
        assert_eq!(result.attenuation, Color::new(0.8, 0.8, 0.8));
    }

    #[test]
    fn test_grazing_mirror_is_absorbed() {
        // Reflection stays in the surface plane: dot with normal is zero
        let material = Metal::new(Color::ONE, 0.0);
        let rec = floor_hit(&material);
        let ray_in = Ray::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::X);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(material.scatter(&ray_in, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_metal_absorbs_exactly_when_below_surface() {
        let material = Metal::new(Color::ONE, 1.0);
        let rec = floor_hit(&material);
        let ray_in = Ray::new(Vec3::new(-1.0, 0.1, 0.0), Vec3::new(1.0, -0.1, 0.0));
        let mut rng = StdRng::seed_from_u64(9);
        let reflected = ray_in.direction().unit_vector().reflect(rec.normal);

        let mut absorbed = 0;
        let mut scattered = 0;
        for _ in 0..1000 {
            // Predict the fuzz offset from a copy of the generator
            let mut preview = rng.clone();
            let expected_dir = reflected + material.fuzz() * random_in_unit_sphere(&mut preview);

            match material.scatter(&ray_in, &rec, &mut rng) {
                Some(result) => {
                    assert!(expected_dir.dot(rec.normal) > 0.0);
                    assert_eq!(result.scattered.direction(), expected_dir);
                    scattered += 1;
                }
                None => {
                    assert!(expected_dir.dot(rec.normal) <= 0.0);
                    absorbed += 1;
                }
            }
        }

        // A near-grazing ray with full fuzz goes both ways
        assert!(absorbed > 0);
        assert!(scattered > 0);
    }
}
