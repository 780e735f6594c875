//! Rotation algebra: general quaternions and unit versors.
//!
//! # Invariants
//! - `Quaternion` is a plain algebra value with no length constraint.
//! - `Versor` is unit length whenever it is used for rotation. It is only built
//!   through a validated axis-angle factory, a checked conversion, or the
//!   explicitly named unchecked relabelling.
//! - Composition order is the caller's order: `multiply(q, r)` is `q * r`.

mod quaternion;
mod versor;

pub use quaternion::Quaternion;
pub use versor::{Versor, quaternion_from_versor, versor_from_quaternion_unchecked};

/// Maximum deviation from unit norm accepted by checked conversions.
pub const UNIT_TOLERANCE: f32 = 1e-4;

/// Errors from quaternion and versor construction.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    #[error("cannot normalize a quaternion with zero or non-finite norm")]
    ZeroNorm,
    #[error("rotation axis must be unit length, got length {length}")]
    NonUnitAxis { length: f32 },
    #[error("rotation angle must be finite, got {0}")]
    NonFiniteAngle(f32),
    #[error("quaternion is not unit length (norm {norm})")]
    NotUnit { norm: f32 },
}

pub fn crate_info() -> &'static str {
    "freefly-math v0.1.0"
}
