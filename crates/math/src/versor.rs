use std::ops::Mul;

use glam::{Mat4, Vec3, Vec4};
use serde::Serialize;

use crate::{MathError, Quaternion, UNIT_TOLERANCE};

/// Unit quaternion representing a 3D rotation.
///
/// Components are private so the unit-norm invariant can only be broken
/// through [`versor_from_quaternion_unchecked`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Versor {
    w: f32,
    x: f32,
    y: f32,
    z: f32,
}

/// Relabel a versor as a general quaternion.
pub fn quaternion_from_versor(v: Versor) -> Quaternion {
    Quaternion::new(v.w, v.x, v.y, v.z)
}

/// Relabel a quaternion as a versor without checking its norm.
///
/// Only valid when `q` is already unit length. Use `Versor::try_from` when
/// the input is not known to be normalized.
pub fn versor_from_quaternion_unchecked(q: Quaternion) -> Versor {
    Versor {
        w: q.w,
        x: q.x,
        y: q.y,
        z: q.z,
    }
}

impl Default for Versor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Versor {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Rotation of `angle_degrees` about `axis`.
    ///
    /// The axis must already be unit length; it is checked but never
    /// renormalized.
    pub fn from_axis_angle(angle_degrees: f32, axis: Vec3) -> Result<Self, MathError> {
        if !angle_degrees.is_finite() {
            return Err(MathError::NonFiniteAngle(angle_degrees));
        }
        if !axis.is_normalized() {
            return Err(MathError::NonUnitAxis {
                length: axis.length(),
            });
        }
        let (sin, cos) = (angle_degrees.to_radians() * 0.5).sin_cos();
        Ok(Self {
            w: cos,
            x: sin * axis.x,
            y: sin * axis.y,
            z: sin * axis.z,
        })
    }

    pub fn w(&self) -> f32 {
        self.w
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn norm(&self) -> f32 {
        quaternion_from_versor(*self).norm()
    }

    /// `T = Q * R`, renormalized.
    ///
    /// Renormalizing every composition keeps long chains of incremental
    /// rotations from drifting off unit length.
    pub fn multiply(q: Versor, r: Versor) -> Versor {
        let t = Quaternion::multiply(quaternion_from_versor(q), quaternion_from_versor(r));
        // Product of two unit versors has norm 1 ± ε, never zero.
        let length = t.norm();
        versor_from_quaternion_unchecked(Quaternion::new(
            t.w / length,
            t.x / length,
            t.y / length,
            t.z / length,
        ))
    }

    /// `T = Q * R` with a general right operand. The result is relabelled as
    /// a versor as-is; it is only unit length if `r` is.
    pub fn multiply_quaternion(q: Versor, r: Quaternion) -> Versor {
        versor_from_quaternion_unchecked(Quaternion::multiply(quaternion_from_versor(q), r))
    }

    /// `T = Q * R` with a general left operand. Same caveat as
    /// [`Versor::multiply_quaternion`].
    pub fn quaternion_multiply(q: Quaternion, r: Versor) -> Versor {
        versor_from_quaternion_unchecked(Quaternion::multiply(q, quaternion_from_versor(r)))
    }

    /// Inverse rotation.
    pub fn conjugate(self) -> Versor {
        versor_from_quaternion_unchecked(quaternion_from_versor(self).conjugated())
    }

    /// Rotate `v` by conjugation `q v q*`.
    pub fn rotate_vector(self, v: Vec3) -> Vec3 {
        let q = quaternion_from_versor(self);
        (q * Quaternion::pure(v) * q.conjugated()).vector()
    }

    /// Magnitude of the rotation in degrees, in `[0, 180]`.
    pub fn angle_degrees(self) -> f32 {
        2.0 * self.w.abs().min(1.0).acos().to_degrees()
    }

    /// Whether both versors describe the same rotation within `eps`.
    ///
    /// `q` and `-q` are the same rotation, so both signs are compared.
    pub fn approx_eq_rotation(self, other: Versor, eps: f32) -> bool {
        let a = quaternion_from_versor(self).to_array();
        let b = quaternion_from_versor(other).to_array();
        let same = a.iter().zip(b).all(|(l, r)| (l - r).abs() <= eps);
        let flipped = a.iter().zip(b).all(|(l, r)| (l + r).abs() <= eps);
        same || flipped
    }

    /// Column-major rotation matrix for column vectors, so that
    /// `R(a * b) == R(a) * R(b)`.
    pub fn to_rotation_matrix(self) -> Mat4 {
        let Self { w, x, y, z } = self;
        Mat4::from_cols(
            Vec4::new(
                1.0 - 2.0 * y * y - 2.0 * z * z,
                2.0 * x * y + 2.0 * w * z,
                2.0 * x * z - 2.0 * w * y,
                0.0,
            ),
            Vec4::new(
                2.0 * x * y - 2.0 * w * z,
                1.0 - 2.0 * x * x - 2.0 * z * z,
                2.0 * y * z + 2.0 * w * x,
                0.0,
            ),
            Vec4::new(
                2.0 * x * z + 2.0 * w * y,
                2.0 * y * z - 2.0 * w * x,
                1.0 - 2.0 * x * x - 2.0 * y * y,
                0.0,
            ),
            Vec4::W,
        )
    }
}

impl TryFrom<Quaternion> for Versor {
    type Error = MathError;

    fn try_from(q: Quaternion) -> Result<Self, Self::Error> {
        let norm = q.norm();
        if !norm.is_finite() || (norm - 1.0).abs() > UNIT_TOLERANCE {
            return Err(MathError::NotUnit { norm });
        }
        Ok(versor_from_quaternion_unchecked(q))
    }
}

impl From<Versor> for Quaternion {
    fn from(v: Versor) -> Self {
        quaternion_from_versor(v)
    }
}

impl From<Versor> for glam::Quat {
    fn from(v: Versor) -> Self {
        glam::Quat::from_xyzw(v.x, v.y, v.z, v.w)
    }
}

impl Mul for Versor {
    type Output = Versor;

    fn mul(self, rhs: Versor) -> Versor {
        Versor::multiply(self, rhs)
    }
}

impl Mul<Quaternion> for Versor {
    type Output = Versor;

    fn mul(self, rhs: Quaternion) -> Versor {
        Versor::multiply_quaternion(self, rhs)
    }
}

impl Mul<Versor> for Quaternion {
    type Output = Versor;

    fn mul(self, rhs: Versor) -> Versor {
        Versor::quaternion_multiply(self, rhs)
    }
}
