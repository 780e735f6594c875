//! Rendering adapter: what a render pipeline reads from the camera.
//!
//! # Invariants
//! - Renderers never mutate the camera; they consume a `RenderView` snapshot.
//! - The projection in a view is the one fixed at camera construction.
//!
//! Shader compilation, uniform binding and the draw loop belong to the
//! backend. This crate only hands it matrices, in plain and GPU-ready form.

mod renderer;
mod uniforms;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use uniforms::CameraUniforms;

pub fn crate_info() -> &'static str {
    "freefly-render v0.1.0"
}
