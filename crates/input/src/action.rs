use freefly_camera::Camera;

/// A single camera request produced from held directions.
///
/// The camera consumes actions, never raw key state, so any input source
/// (keyboard, gamepad, scripted flight) drives it the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraAction {
    /// Strafe left by a distance.
    MoveLeft(f32),
    MoveRight(f32),
    MoveForward(f32),
    MoveBackward(f32),
    /// Rise along the world vertical.
    MoveUp(f32),
    MoveDown(f32),
    /// Yaw left by an angle in degrees.
    RotateLeft(f32),
    RotateRight(f32),
    /// Pitch up by an angle in degrees.
    RotateUp(f32),
    RotateDown(f32),
}

impl CameraAction {
    /// Forward the request to the matching camera operation.
    pub fn apply(self, camera: &mut Camera) {
        match self {
            Self::MoveLeft(d) => camera.move_left(d),
            Self::MoveRight(d) => camera.move_right(d),
            Self::MoveForward(d) => camera.move_forward(d),
            Self::MoveBackward(d) => camera.move_backward(d),
            Self::MoveUp(d) => camera.move_up(d),
            Self::MoveDown(d) => camera.move_down(d),
            Self::RotateLeft(a) => camera.rotate_left(a),
            Self::RotateRight(a) => camera.rotate_right(a),
            Self::RotateUp(a) => camera.rotate_up(a),
            Self::RotateDown(a) => camera.rotate_down(a),
        }
    }

    pub fn is_rotation(&self) -> bool {
        matches!(
            self,
            Self::RotateLeft(_) | Self::RotateRight(_) | Self::RotateUp(_) | Self::RotateDown(_)
        )
    }

    /// Distance or angle carried by the action.
    pub fn magnitude(&self) -> f32 {
        match *self {
            Self::MoveLeft(v)
            | Self::MoveRight(v)
            | Self::MoveForward(v)
            | Self::MoveBackward(v)
            | Self::MoveUp(v)
            | Self::MoveDown(v)
            | Self::RotateLeft(v)
            | Self::RotateRight(v)
            | Self::RotateUp(v)
            | Self::RotateDown(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn move_actions_accumulate_on_camera() {
        let mut cam = Camera::new(800.0, 600.0).unwrap();
        let start = cam.position();
        CameraAction::MoveUp(2.0).apply(&mut cam);
        CameraAction::MoveDown(0.5).apply(&mut cam);
        assert_eq!(cam.pending_move(), Vec3::new(0.0, 1.5, 0.0));
        cam.recompute_view();
        assert_eq!(cam.position(), start + Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn rotate_actions_update_orientation() {
        let mut cam = Camera::new(800.0, 600.0).unwrap();
        CameraAction::RotateLeft(20.0).apply(&mut cam);
        CameraAction::RotateUp(10.0).apply(&mut cam);
        assert!((cam.yaw() - 20.0).abs() < 1e-5);
        assert!((cam.pitch() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn classification() {
        assert!(CameraAction::RotateDown(1.0).is_rotation());
        assert!(!CameraAction::MoveBackward(1.0).is_rotation());
        assert_eq!(CameraAction::MoveLeft(3.5).magnitude(), 3.5);
    }
}
