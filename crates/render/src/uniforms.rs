use bytemuck::{Pod, Zeroable};

use crate::RenderView;

/// Camera uniform block, column-major, laid out for direct upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    /// xyz = eye position, w = 1.
    pub eye: [f32; 4],
}

impl CameraUniforms {
    pub fn from_view(view: &RenderView) -> Self {
        Self {
            view: view.view.to_cols_array_2d(),
            proj: view.projection.to_cols_array_2d(),
            eye: view.eye.extend(1.0).to_array(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&RenderView> for CameraUniforms {
    fn from(view: &RenderView) -> Self {
        Self::from_view(view)
    }
}
