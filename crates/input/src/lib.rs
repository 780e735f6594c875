//! Input mapping: held directions become camera actions.
//!
//! # Invariants
//! - Opposing directions on the same axis cancel.
//! - Combined directions share one frame's distance (or angle), so diagonal
//!   motion is never faster than motion along a single axis.
//! - The camera only ever sees `CameraAction`s, never raw key state.

mod action;
mod flags;

pub use action::CameraAction;
pub use flags::{Direction, DirectionFlags};

/// Errors from parsing direction names.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}

pub fn crate_info() -> &'static str {
    "freefly-input v0.1.0"
}
