//! Built-in scenes.

use glint_math::{Color, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scene::{CameraConfig, MaterialDesc, SceneDescription};

impl SceneDescription {
    /// Four spheres on a large ground sphere, seen through a wide-aperture
    /// lens focused on the center sphere.
    pub fn default_scene() -> Self {
        let mut scene = SceneDescription::new();

        let ground = scene.add_material(MaterialDesc::Lambertian {
            albedo: Color::new(0.8, 0.8, 0.0),
        });
        let center = scene.add_material(MaterialDesc::Lambertian {
            albedo: Color::new(0.1, 0.2, 0.5),
        });
        let gold = scene.add_material(MaterialDesc::Metal {
            albedo: Color::new(0.8, 0.6, 0.2),
            fuzz: 0.3,
        });
        let silver = scene.add_material(MaterialDesc::Metal {
            albedo: Color::new(0.8, 0.8, 0.8),
            fuzz: 1.0,
        });

        scene.add_sphere(Vec3::new(0.0, -100.5, -1.0), 100.0, ground);
        scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, center);
        scene.add_sphere(Vec3::new(1.0, 0.0, -1.0), 0.5, gold);
        scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), 0.5, silver);

        let look_from = Vec3::new(3.0, 3.0, 2.0);
        let look_at = Vec3::new(0.0, 0.0, -1.0);
        scene.camera = CameraConfig {
            look_from,
            look_at,
            vup: Vec3::Y,
            vfov: 20.0,
            aperture: 2.0,
            focus_distance: (look_from - look_at).length(),
        };

        scene
    }

    /// The "many small spheres" cover scene.
    ///
    /// Sphere placement and materials come from a `StdRng` seeded with
    /// `seed`, so the same seed always yields the same scene.
    pub fn random_scene(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scene = SceneDescription::new();

        let ground = scene.add_material(MaterialDesc::Lambertian {
            albedo: Color::new(0.5, 0.5, 0.5),
        });
        scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground);

        for a in -11..11 {
            for b in -11..11 {
                let choose_mat: f32 = rng.gen();
                let center = Vec3::new(
                    a as f32 + 0.9 * rng.gen::<f32>(),
                    0.2,
                    b as f32 + 0.9 * rng.gen::<f32>(),
                );

                // Keep clear of the large feature spheres
                if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                    continue;
                }

                let material = if choose_mat < 0.8 {
                    MaterialDesc::Lambertian {
                        albedo: Color::new(
                            rng.gen::<f32>() * rng.gen::<f32>(),
                            rng.gen::<f32>() * rng.gen::<f32>(),
                            rng.gen::<f32>() * rng.gen::<f32>(),
                        ),
                    }
                } else {
                    MaterialDesc::Metal {
                        albedo: Color::new(
                            0.5 * (1.0 + rng.gen::<f32>()),
                            0.5 * (1.0 + rng.gen::<f32>()),
                            0.5 * (1.0 + rng.gen::<f32>()),
                        ),
                        fuzz: 0.5 * rng.gen::<f32>(),
                    }
                };
                let index = scene.add_material(material);
                scene.add_sphere(center, 0.2, index);
            }
        }

        let mirror = scene.add_material(MaterialDesc::Metal {
            albedo: Color::new(0.9, 0.9, 0.9),
            fuzz: 0.0,
        });
        let brown = scene.add_material(MaterialDesc::Lambertian {
            albedo: Color::new(0.4, 0.2, 0.1),
        });
        let bronze = scene.add_material(MaterialDesc::Metal {
            albedo: Color::new(0.7, 0.6, 0.5),
            fuzz: 0.0,
        });
        scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, mirror);
        scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, brown);
        scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, bronze);

        scene.camera = CameraConfig {
            look_from: Vec3::new(13.0, 2.0, 3.0),
            look_at: Vec3::ZERO,
            vup: Vec3::Y,
            vfov: 20.0,
            aperture: 0.1,
            focus_distance: 10.0,
        };

        scene
    }
}
