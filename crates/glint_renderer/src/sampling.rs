//! Random sampling helpers.
//!
//! Every function takes the generator explicitly so renders can be seeded
//! and tests are deterministic.

use glint_math::Vec3;
use rand::{Rng, RngCore};

/// Upper bound on draws for the rejection samplers.
///
/// Each draw is accepted with probability pi/6 (sphere) or pi/4 (disk), so a
/// working generator never gets close to this.
pub const MAX_REJECTION_ATTEMPTS: usize = 1024;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Random point strictly inside the unit sphere, by rejection from the
/// enclosing cube.
///
/// Returns the origin if no draw is accepted within
/// [`MAX_REJECTION_ATTEMPTS`].
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }

    log::error!(
        "random_in_unit_sphere: no sample accepted after {} draws, using origin",
        MAX_REJECTION_ATTEMPTS
    );
    Vec3::ZERO
}

/// Random point strictly inside the unit disk in the z = 0 plane.
///
/// Returns the origin if no draw is accepted within
/// [`MAX_REJECTION_ATTEMPTS`].
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }

    log::error!(
        "random_in_unit_disk: no sample accepted after {} draws, using origin",
        MAX_REJECTION_ATTEMPTS
    );
    Vec3::ZERO
}
