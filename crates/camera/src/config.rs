use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::CameraError;

/// Clip-space depth convention for the projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthRange {
    /// OpenGL convention, depth in `[-1, 1]`.
    #[default]
    Gl,
    /// Vulkan/wgpu convention, depth in `[0, 1]`.
    ZeroToOne,
}

/// Camera settings. Every field has a default, so a config file only needs
/// the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub start_position: Vec3,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Rotation speed in degrees per second.
    pub rotate_speed: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
    pub depth_range: DepthRange,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 67.0,
            near: 0.1,
            far: 1000.0,
            start_position: Vec3::new(0.0, 0.0, 2.0),
            speed: 20.0,
            rotate_speed: 50.0,
            pitch_limit: 89.0,
            depth_range: DepthRange::Gl,
        }
    }
}

impl CameraConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, CameraError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CameraError> {
        let path = path.as_ref();
        tracing::debug!(?path, "loading camera config");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml_string(&self) -> Result<String, CameraError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the non-projection settings. Projection parameters are checked
    /// by [`Projection::new`](crate::Projection::new).
    pub fn validate(&self) -> Result<(), CameraError> {
        non_negative("speed", self.speed)?;
        non_negative("rotate_speed", self.rotate_speed)?;
        if !self.pitch_limit.is_finite() || !(0.0..90.0).contains(&self.pitch_limit) {
            return Err(CameraError::InvalidSetting {
                name: "pitch_limit",
                value: self.pitch_limit,
            });
        }
        if !self.start_position.is_finite() {
            return Err(CameraError::NonFinitePosition);
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), CameraError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CameraError::InvalidSetting { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = CameraConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fov_degrees, 67.0);
        assert_eq!(config.start_position, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(config.depth_range, DepthRange::Gl);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = CameraConfig::from_yaml_str("speed: 5.0\ndepth_range: zero_to_one\n").unwrap();
        assert_eq!(config.speed, 5.0);
        assert_eq!(config.depth_range, DepthRange::ZeroToOne);
        assert_eq!(config.rotate_speed, 50.0);
        assert_eq!(config.far, 1000.0);
    }

    #[test]
    fn start_position_from_yaml() {
        let config = CameraConfig::from_yaml_str("start_position: [1.0, 2.0, 3.0]\n").unwrap();
        assert_eq!(config.start_position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn rejects_negative_speed() {
        let err = CameraConfig::from_yaml_str("speed: -1.0\n").unwrap_err();
        assert!(matches!(err, CameraError::InvalidSetting { name: "speed", .. }));
    }

    #[test]
    fn rejects_pitch_limit_at_vertical() {
        let err = CameraConfig::from_yaml_str("pitch_limit: 90.0\n").unwrap_err();
        assert!(matches!(
            err,
            CameraError::InvalidSetting {
                name: "pitch_limit",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = CameraConfig::from_yaml_str("speed: [fast]\n").unwrap_err();
        assert!(matches!(err, CameraError::Config(_)));
    }

    #[test]
    fn yaml_roundtrip() {
        let config = CameraConfig {
            speed: 3.5,
            pitch_limit: 45.0,
            ..CameraConfig::default()
        };
        let text = config.to_yaml_string().unwrap();
        assert_eq!(CameraConfig::from_yaml_str(&text).unwrap(), config);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fov_degrees: 45.0").unwrap();
        writeln!(file, "rotate_speed: 90.0").unwrap();

        let config = CameraConfig::load(file.path()).unwrap();
        assert_eq!(config.fov_degrees, 45.0);
        assert_eq!(config.rotate_speed, 90.0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CameraConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, CameraError::Io(_)));
    }
}
