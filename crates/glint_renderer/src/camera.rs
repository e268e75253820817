//! Camera for ray generation.

use crate::{sampling::random_in_unit_disk, Ray};
use glint_core::CameraConfig;
use glint_math::{Vec3, VecExt};
use rand::RngCore;

/// Thin-lens camera.
///
/// The viewport is placed at the focus distance, so everything on that
/// plane is sharp and the lens radius controls how quickly the rest blurs.
/// Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Create a camera.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: image width / height
    /// - `aperture`: lens diameter, 0 for a pinhole
    /// - `focus_dist`: distance to the plane of perfect focus
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        // Orthonormal basis: w points back at the viewer
        let w = (look_from - look_at).unit_vector();
        let u = vup.cross(w).unit_vector();
        let v = w.cross(u);

        let origin = look_from;
        let lower_left_corner =
            origin - half_width * focus_dist * u - half_height * focus_dist * v - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        }
    }

    /// Build a camera from a scene description.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self::new(
            config.look_from,
            config.look_at,
            config.vup,
            config.vfov,
            aspect,
            config.aperture,
            config.focus_distance,
        )
    }

    /// Generate a ray through normalized image coordinates (s, t).
    ///
    /// (0, 0) is the lower-left corner of the viewport and (1, 1) the upper
    /// right. With a zero lens radius no random numbers are drawn and the
    /// ray always starts at the camera origin.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius <= 0.0 {
            Vec3::ZERO
        } else {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    /// The camera basis (u, v, w): right, up, and backward.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}

impl Default for Camera {
    /// Fixed pinhole frame at the origin looking down -Z with a 2:1 viewport.
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::new(-2.0, -1.0, -1.0),
            horizontal: Vec3::new(4.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.0, 0.0),
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            lens_radius: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_frame() {
        let camera = Camera::default();
        let mut rng = StdRng::seed_from_u64(0);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, -1.0));

        let corner = camera.get_ray(0.0, 0.0, &mut rng);
        assert_eq!(corner.direction(), Vec3::new(-2.0, -1.0, -1.0));
    }

    #[test]
    fn test_default_matches_general_constructor() {
        let general = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 2.0, 0.0, 1.0);
        let fixed = Camera::default();

        assert_close(general.lower_left_corner, fixed.lower_left_corner);
        assert_close(general.horizontal, fixed.horizontal);
        assert_close(general.vertical, fixed.vertical);
        assert_eq!(general.lens_radius, 0.0);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::new(
            Vec3::new(13.0, 2.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            20.0,
            1.5,
            0.1,
            10.0,
        );
        let (u, v, w) = camera.basis();

        for axis in [u, v, w] {
            assert!((axis.length() - 1.0).abs() < 1e-5);
        }
        assert!(u.dot(v).abs() < 1e-5);
        assert!(v.dot(w).abs() < 1e-5);
        assert!(w.dot(u).abs() < 1e-5);
        assert_close(w, Vec3::new(13.0, 2.0, 3.0).normalize());
    }

    #[test]
    fn test_pinhole_ray_is_deterministic() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 1.0, 0.0, 1.0);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);

        let a = camera.get_ray(1.0, 1.0, &mut rng_a);
        let b = camera.get_ray(1.0, 1.0, &mut rng_b);

        assert_eq!(a, b);
        assert_eq!(a.origin(), Vec3::ZERO);
        // tan(45) = 1: the upper right corner sits at (1, 1, -1)
        assert_close(a.direction(), Vec3::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn test_center_ray_hits_look_at() {
        let look_from = Vec3::new(3.0, 3.0, 2.0);
        let look_at = Vec3::new(0.0, 0.0, -1.0);
        let focus = (look_from - look_at).length();
        let camera = Camera::new(look_from, look_at, Vec3::Y, 20.0, 2.0, 0.0, focus);
        let mut rng = StdRng::seed_from_u64(3);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin(), look_from);
        assert_close(ray.point_at(1.0), look_at);
    }

    #[test]
    fn test_lens_rays_converge_at_focus_plane() {
        let look_from = Vec3::new(0.0, 1.0, 4.0);
        let camera = Camera::new(look_from, Vec3::ZERO, Vec3::Y, 40.0, 1.5, 0.5, 3.0);
        let (_, _, w) = camera.basis();
        let mut rng = StdRng::seed_from_u64(4);

        let first = camera.get_ray(0.3, 0.7, &mut rng);
        let mut saw_offset = false;
        for _ in 0..100 {
            let ray = camera.get_ray(0.3, 0.7, &mut rng);
            let offset = ray.origin() - look_from;

            // Origins stay on the lens disk
            assert!(offset.length() <= camera.lens_radius() + 1e-5);
            assert!(offset.dot(w).abs() < 1e-5);
            // and every ray reaches the same point on the focus plane
            assert_close(ray.point_at(1.0), first.point_at(1.0));

            saw_offset |= offset.length() > 1e-3;
        }
        assert!(saw_offset);
    }

    #[test]
    fn test_from_config() {
        let config = CameraConfig::default();
        let camera = Camera::from_config(&config, 2.0);

        assert_close(camera.lower_left_corner, Vec3::new(-2.0, -1.0, -1.0));
        assert_eq!(camera.origin(), Vec3::ZERO);
    }
}
