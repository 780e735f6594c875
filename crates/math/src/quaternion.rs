use std::ops::Mul;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::MathError;

/// General four-component quaternion `(w, x, y, z)`.
///
/// Not guaranteed to be unit length. Rotations should go through
/// [`Versor`](crate::Versor), which keeps that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    /// All four components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Multiplicative identity.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Pure quaternion `(0, v)`, used to rotate vectors by conjugation.
    pub fn pure(v: Vec3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// The vector part `(x, y, z)`.
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length over all four components.
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Divide every component by the norm.
    ///
    /// A zero or non-finite norm is rejected and `self` is left untouched.
    pub fn normalize(&mut self) -> Result<(), MathError> {
        let length = self.norm();
        if length == 0.0 || !length.is_finite() {
            return Err(MathError::ZeroNorm);
        }
        self.w /= length;
        self.x /= length;
        self.y /= length;
        self.z /= length;
        Ok(())
    }

    /// Normalized copy. See [`Quaternion::normalize`].
    pub fn normalized(mut self) -> Result<Self, MathError> {
        self.normalize()?;
        Ok(self)
    }

    /// Negate the vector part in place: `q' = [w, -v]`.
    pub fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    pub fn conjugated(mut self) -> Self {
        self.conjugate();
        self
    }

    /// Hamilton product `T = Q * R`.
    ///
    /// Non-commutative: swapping the operands changes the result.
    pub fn multiply(q: Self, r: Self) -> Self {
        Self::new(
            r.w * q.w - r.x * q.x - r.y * q.y - r.z * q.z,
            r.w * q.x + r.x * q.w - r.y * q.z + r.z * q.y,
            r.w * q.y + r.x * q.z + r.y * q.w - r.z * q.x,
            r.w * q.z - r.x * q.y + r.y * q.x + r.z * q.w,
        )
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::multiply(self, rhs)
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from([w, x, y, z]: [f32; 4]) -> Self {
        Self::new(w, x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Quaternion, b: Quaternion) -> bool {
        a.to_array()
            .iter()
            .zip(b.to_array())
            .all(|(l, r)| (l - r).abs() < 1e-6)
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Quaternion::default(), Quaternion::ZERO);
    }

    #[test]
    fn basis_units_follow_hamilton_rules() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);

        assert!(close(i * j, k));
        assert!(close(j * k, i));
        assert!(close(k * i, j));
        assert!(close(j * i, Quaternion::new(0.0, 0.0, 0.0, -1.0)));
        assert!(close(i * i, minus_one));
        assert!(close(i * j * k, minus_one));
    }

    #[test]
    fn multiply_matches_glam() {
        let a = Quaternion::new(0.3, -1.2, 0.7, 2.0);
        let b = Quaternion::new(-0.5, 0.4, 1.1, -0.9);
        let ours = Quaternion::multiply(a, b);
        let theirs = glam::Quat::from_xyzw(a.x, a.y, a.z, a.w)
            * glam::Quat::from_xyzw(b.x, b.y, b.z, b.w);
        assert!(close(ours, Quaternion::new(theirs.w, theirs.x, theirs.y, theirs.z)));
    }

    #[test]
    fn identity_is_neutral() {
        let q = Quaternion::new(0.1, 0.2, -0.3, 0.4);
        assert!(close(Quaternion::IDENTITY * q, q));
        assert!(close(q * Quaternion::IDENTITY, q));
    }

    #[test]
    fn normalize_produces_unit_length() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        q.normalize().unwrap();
        assert!((q.norm() - 1.0).abs() < 1e-6);
        assert!((q.w - 1.0 / 30.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_is_rejected() {
        let mut q = Quaternion::ZERO;
        assert_eq!(q.normalize(), Err(MathError::ZeroNorm));
        assert_eq!(q, Quaternion::ZERO);

        let nan = Quaternion::new(f32::NAN, 0.0, 0.0, 0.0);
        assert!(nan.normalized().is_err());
    }

    #[test]
    fn conjugate_negates_vector_part_only() {
        let mut q = Quaternion::new(0.5, 1.0, -2.0, 3.0);
        q.conjugate();
        assert_eq!(q, Quaternion::new(0.5, -1.0, 2.0, -3.0));
        assert_eq!(q.conjugated(), Quaternion::new(0.5, 1.0, -2.0, 3.0));
    }

    #[test]
    fn product_with_conjugate_is_norm_squared() {
        let q = Quaternion::new(1.0, -2.0, 0.5, 3.0);
        let p = q * q.conjugated();
        assert!((p.w - q.norm_squared()).abs() < 1e-5);
        assert!(p.vector().length() < 1e-5);
    }
}
