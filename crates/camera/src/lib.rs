//! Free-fly camera: orientation, per-frame movement, view and projection.
//!
//! # Invariants
//! - Orientation is authoritative; yaw/pitch are bookkeeping derived from the
//!   same requests and never drive the rotation themselves.
//! - Forward/right/up are always re-derived from the orientation.
//! - The pending displacement is zero after every `recompute_view`.
//! - Projection parameters are validated once at construction and never
//!   produce a non-finite matrix.
//!
//! Camera motion is driven by an external collaborator (see `freefly-input`);
//! the camera itself never decides when or how fast to move.

mod camera;
mod config;
mod placement;
mod projection;

pub use camera::{Camera, CameraState, FrameMotion, REFERENCE_FORWARD, REFERENCE_RIGHT, REFERENCE_UP};
pub use config::{CameraConfig, DepthRange};
pub use placement::SceneBounds;
pub use projection::Projection;

/// Errors from camera configuration and construction.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("degenerate viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("field of view must be within (0, 180) degrees, got {0}")]
    InvalidFov(f32),
    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidClipPlanes { near: f32, far: f32 },
    #[error("projection matrix is not finite")]
    DegenerateProjection,
    #[error("{name} must be finite and within range, got {value}")]
    InvalidSetting { name: &'static str, value: f32 },
    #[error("start position must be finite")]
    NonFinitePosition,
}

pub fn crate_info() -> &'static str {
    "freefly-camera v0.1.0"
}
