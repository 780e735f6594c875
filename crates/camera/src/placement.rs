use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::Camera;

/// Horizontal extent and mean height of externally loaded content, such as a
/// square heightmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    /// Side length of the content's square footprint, starting at the origin.
    pub extent: f32,
    pub average_height: f32,
}

impl SceneBounds {
    /// Bounds of a square grid of `cells` cells, each `cell_size` wide.
    pub fn from_grid(cells: u32, cell_size: f32, average_height: f32) -> Self {
        Self {
            extent: cells as f32 * cell_size,
            average_height,
        }
    }

    /// A point centred over the content at its average height, pulled back
    /// along +Z far enough to take in the whole footprint.
    pub fn vantage_point(&self) -> Vec3 {
        let half = self.extent / 2.0;
        Vec3::new(half, self.average_height, half * 2.0 + 15.0)
    }
}

impl Camera {
    /// Move the camera to the vantage point of `bounds` and recompute the view.
    pub fn place_over(&mut self, bounds: &SceneBounds) {
        let target = bounds.vantage_point();
        tracing::debug!(?bounds, ?target, "placing camera over scene");
        self.set_position(target);
        self.recompute_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vantage_point_centres_over_grid() {
        let bounds = SceneBounds::from_grid(64, 2.0, 7.5);
        assert_eq!(bounds.extent, 128.0);
        assert_eq!(bounds.vantage_point(), Vec3::new(64.0, 7.5, 143.0));
    }

    #[test]
    fn place_over_updates_view() {
        let mut cam = Camera::new(1024.0, 768.0).unwrap();
        let bounds = SceneBounds {
            extent: 10.0,
            average_height: 1.0,
        };
        cam.place_over(&bounds);
        assert_eq!(cam.position(), Vec3::new(5.0, 1.0, 25.0));
        assert!(cam.is_idle());
        let eye = cam.view().transform_point3(cam.position());
        assert!(eye.length() < 1e-4);
    }
}
