use std::fmt::Write;

use freefly_camera::Camera;
use glam::{Mat4, Vec3};

/// Camera snapshot handed to a renderer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Direction the camera faces.
    pub forward: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
}

impl RenderView {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            eye: camera.position(),
            forward: camera.forward(),
            view: camera.view(),
            projection: camera.projection_matrix(),
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads a view snapshot and produces output. It never mutates
/// the camera.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given view.
    fn render(&self, view: &RenderView) -> Self::Output;
}

/// Produces a human-readable report of the view, for CLI output and logs.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, view: &RenderView) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "Camera: eye=({:.3}, {:.3}, {:.3}) forward=({:.3}, {:.3}, {:.3})",
            view.eye.x, view.eye.y, view.eye.z, view.forward.x, view.forward.y, view.forward.z
        );
        write_matrix(&mut out, "View", &view.view);
        write_matrix(&mut out, "Projection", &view.projection);
        out
    }
}

/// Row by row, so the report reads like the matrix on paper.
fn write_matrix(out: &mut String, label: &str, m: &Mat4) {
    let _ = writeln!(out, "{label}:");
    for row in 0..4 {
        let r = m.row(row);
        let _ = writeln!(out, "  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]", r.x, r.y, r.z, r.w);
    }
}
