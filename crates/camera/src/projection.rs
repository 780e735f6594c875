use glam::Mat4;

use crate::{CameraConfig, CameraError, DepthRange};

/// Perspective projection fixed from viewport intrinsics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    depth_range: DepthRange,
    matrix: Mat4,
}

impl Projection {
    /// Validate the viewport and clip parameters and build the matrix.
    ///
    /// Degenerate input fails here instead of leaking NaN or infinity into
    /// later frames.
    pub fn new(width: f32, height: f32, config: &CameraConfig) -> Result<Self, CameraError> {
        let invalid_viewport = CameraError::InvalidViewport { width, height };
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(invalid_viewport);
        }
        let aspect = width / height;
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(invalid_viewport);
        }

        let fov = config.fov_degrees;
        if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
            return Err(CameraError::InvalidFov(fov));
        }

        let (near, far) = (config.near, config.far);
        if !(near.is_finite() && far.is_finite()) || near <= 0.0 || near >= far {
            return Err(CameraError::InvalidClipPlanes { near, far });
        }

        let matrix = match config.depth_range {
            DepthRange::Gl => Mat4::perspective_rh_gl(fov.to_radians(), aspect, near, far),
            DepthRange::ZeroToOne => Mat4::perspective_rh(fov.to_radians(), aspect, near, far),
        };
        if !matrix.is_finite() {
            return Err(CameraError::DegenerateProjection);
        }

        tracing::debug!(fov, aspect, near, far, depth_range = ?config.depth_range, "projection built");

        Ok(Self {
            fov_degrees: fov,
            aspect,
            near,
            far,
            depth_range: config.depth_range,
            matrix,
        })
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn build(width: f32, height: f32, config: CameraConfig) -> Result<Projection, CameraError> {
        Projection::new(width, height, &config)
    }

    #[test]
    fn matches_classic_gl_frustum() {
        let config = CameraConfig::default();
        let p = build(800.0, 600.0, config.clone()).unwrap();
        let m = p.matrix();

        let (near, far) = (config.near, config.far);
        let range = (config.fov_degrees.to_radians() * 0.5).tan() * near;
        let aspect = 800.0 / 600.0;
        let sx = (2.0 * near) / (range * aspect + range * aspect);
        let sy = near / range;
        let sz = -(far + near) / (far - near);
        let pz = -(2.0 * far * near) / (far - near);

        let expected = Mat4::from_cols(
            Vec4::new(sx, 0.0, 0.0, 0.0),
            Vec4::new(0.0, sy, 0.0, 0.0),
            Vec4::new(0.0, 0.0, sz, -1.0),
            Vec4::new(0.0, 0.0, pz, 0.0),
        );
        assert!(m.abs_diff_eq(expected, 1e-4), "{m:?} vs {expected:?}");
        assert!((p.aspect() - aspect).abs() < 1e-6);
    }

    #[test]
    fn zero_to_one_maps_near_plane_to_zero() {
        let config = CameraConfig {
            depth_range: DepthRange::ZeroToOne,
            ..CameraConfig::default()
        };
        let p = build(640.0, 480.0, config).unwrap();
        let clip = p.matrix() * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert!((clip.z / clip.w).abs() < 1e-4);
    }

    #[test]
    fn gl_maps_near_plane_to_minus_one() {
        let p = build(640.0, 480.0, CameraConfig::default()).unwrap();
        let clip = p.matrix() * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert!((clip.z / clip.w + 1.0).abs() < 1e-3);
    }

    #[test]
    fn rejects_degenerate_viewport() {
        let config = CameraConfig::default();
        assert!(matches!(
            build(800.0, 0.0, config.clone()),
            Err(CameraError::InvalidViewport { .. })
        ));
        assert!(matches!(
            build(0.0, 600.0, config.clone()),
            Err(CameraError::InvalidViewport { .. })
        ));
        assert!(matches!(
            build(-800.0, 600.0, config.clone()),
            Err(CameraError::InvalidViewport { .. })
        ));
        assert!(matches!(
            build(f32::NAN, 600.0, config),
            Err(CameraError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let config = CameraConfig {
            near: 10.0,
            far: 1.0,
            ..CameraConfig::default()
        };
        assert!(matches!(
            build(800.0, 600.0, config),
            Err(CameraError::InvalidClipPlanes { .. })
        ));

        let equal = CameraConfig {
            near: 5.0,
            far: 5.0,
            ..CameraConfig::default()
        };
        assert!(build(800.0, 600.0, equal).is_err());

        let zero_near = CameraConfig {
            near: 0.0,
            ..CameraConfig::default()
        };
        assert!(build(800.0, 600.0, zero_near).is_err());
    }

    #[test]
    fn rejects_bad_fov() {
        for fov in [0.0, -10.0, 180.0, f32::INFINITY] {
            let config = CameraConfig {
                fov_degrees: fov,
                ..CameraConfig::default()
            };
            assert!(matches!(
                build(800.0, 600.0, config),
                Err(CameraError::InvalidFov(_))
            ));
        }
    }
}
