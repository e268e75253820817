//! Vector helpers used by scattering and camera code.

use crate::Vec3;

/// Extra operations on [`Vec3`] that glam does not spell the way the tracer
/// needs them.
pub trait VecExt {
    /// `self / self.length()`.
    ///
    /// A zero vector has no direction; callers must not pass one.
    fn unit_vector(self) -> Self;

    /// Normalize only when the length is positive, otherwise return `self`.
    fn normalized_or_self(self) -> Self;

    /// Mirror reflection of `self` about the unit normal `n`.
    fn reflect(self, n: Self) -> Self;
}

impl VecExt for Vec3 {
    #[inline]
    fn unit_vector(self) -> Vec3 {
        self / self.length()
    }

    #[inline]
    fn normalized_or_self(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 {
            self / len
        } else {
            self
        }
    }

    #[inline]
    fn reflect(self, n: Vec3) -> Vec3 {
        self - 2.0 * self.dot(n) * n
    }
}
