use freefly_math::Versor;
use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::{CameraConfig, CameraError, Projection};

/// Forward axis of the unrotated camera.
pub const REFERENCE_FORWARD: Vec3 = Vec3::NEG_Z;
/// Right axis of the unrotated camera.
pub const REFERENCE_RIGHT: Vec3 = Vec3::X;
/// Up axis of the unrotated camera, and the world's vertical.
pub const REFERENCE_UP: Vec3 = Vec3::Y;

/// Distance and angle a camera may cover in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameMotion {
    /// World units.
    pub distance: f32,
    /// Degrees.
    pub angle: f32,
}

/// Free-fly camera.
///
/// Move requests accumulate into a pending displacement until
/// [`Camera::recompute_view`] folds it into the position. Rotation requests
/// compose into the orientation immediately.
///
/// Horizontal moves are resolved from yaw alone, so the pending displacement
/// is already expressed along the level heading axes (`REFERENCE_*`); folding
/// it through the rotated basis would apply yaw twice.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    orientation: Versor,
    pending: Vec3,
    /// Degrees, wrapped to `[0, 360)`.
    yaw: f32,
    /// Degrees, clamped to `[-pitch_limit, pitch_limit]`.
    pitch: f32,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    rotation: Mat4,
    view: Mat4,
    projection: Projection,
    speed: f32,
    rotate_speed: f32,
    pitch_limit: f32,
}

/// Serializable snapshot of the camera, for reports and debugging.
#[derive(Debug, Clone, Serialize)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub orientation: Versor,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Camera with default settings for a `width` x `height` viewport.
    pub fn new(width: f32, height: f32) -> Result<Self, CameraError> {
        Self::with_config(width, height, &CameraConfig::default())
    }

    /// Camera for a `width` x `height` viewport. The projection is fixed here
    /// for the lifetime of the camera.
    pub fn with_config(width: f32, height: f32, config: &CameraConfig) -> Result<Self, CameraError> {
        config.validate()?;
        let projection = Projection::new(width, height, config)?;

        let mut camera = Self {
            position: config.start_position,
            orientation: Versor::IDENTITY,
            pending: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            forward: REFERENCE_FORWARD,
            right: REFERENCE_RIGHT,
            up: REFERENCE_UP,
            rotation: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection,
            speed: config.speed,
            rotate_speed: config.rotate_speed,
            pitch_limit: config.pitch_limit,
        };
        camera.recompute_view();

        tracing::debug!(
            width,
            height,
            position = ?camera.position,
            "camera created"
        );
        Ok(camera)
    }

    pub fn move_left(&mut self, distance: f32) {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        self.pending.z += distance * sin;
        self.pending.x -= distance * cos;
    }

    pub fn move_right(&mut self, distance: f32) {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        self.pending.z -= distance * sin;
        self.pending.x += distance * cos;
    }

    pub fn move_forward(&mut self, distance: f32) {
        let (sin, cos) = (self.yaw + 90.0).to_radians().sin_cos();
        self.pending.z -= distance * sin;
        self.pending.x += distance * cos;
    }

    pub fn move_backward(&mut self, distance: f32) {
        let (sin, cos) = (self.yaw - 90.0).to_radians().sin_cos();
        self.pending.z -= distance * sin;
        self.pending.x += distance * cos;
    }

    pub fn move_up(&mut self, distance: f32) {
        self.pending.y += distance;
    }

    pub fn move_down(&mut self, distance: f32) {
        self.pending.y -= distance;
    }

    /// Yaw counter-clockwise (seen from above) by `angle` degrees.
    pub fn rotate_left(&mut self, angle: f32) {
        self.yaw_by(angle);
    }

    pub fn rotate_right(&mut self, angle: f32) {
        self.yaw_by(-angle);
    }

    /// Pitch the view up by `angle` degrees, stopping at the pitch limit.
    pub fn rotate_up(&mut self, angle: f32) {
        self.pitch_by(angle);
    }

    pub fn rotate_down(&mut self, angle: f32) {
        self.pitch_by(-angle);
    }

    /// Fold the pending displacement into the position and rebuild the view
    /// matrix from position and orientation.
    pub fn recompute_view(&mut self) {
        let _span = tracing::debug_span!("recompute_view").entered();

        self.position += REFERENCE_RIGHT * self.pending.x
            + REFERENCE_UP * self.pending.y
            + REFERENCE_FORWARD * -self.pending.z;

        let translation = Mat4::from_translation(self.position);
        self.rotation = self.orientation.to_rotation_matrix();
        self.view = self.rotation.inverse() * translation.inverse();

        self.pending = Vec3::ZERO;
        self.update_basis();

        tracing::trace!(
            position = ?self.position,
            yaw = self.yaw,
            pitch = self.pitch,
            "view recomputed"
        );
    }

    /// Convert elapsed seconds into this frame's move distance and rotation
    /// angle using the configured speeds.
    pub fn frame_motion(&self, elapsed_secs: f32) -> FrameMotion {
        FrameMotion {
            distance: self.speed * elapsed_secs,
            angle: self.rotate_speed * elapsed_secs,
        }
    }

    /// Whether no displacement is waiting for `recompute_view`.
    pub fn is_idle(&self) -> bool {
        self.pending == Vec3::ZERO
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the camera. Takes effect in the view on the next
    /// [`Camera::recompute_view`].
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn orientation(&self) -> Versor {
        self.orientation
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Displacement accumulated since the last recompute, along the heading
    /// axes (x right, y up, z back).
    pub fn pending_move(&self) -> Vec3 {
        self.pending
    }

    pub fn rotation(&self) -> Mat4 {
        self.rotation
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix() * self.view
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn rotate_speed(&self) -> f32 {
        self.rotate_speed
    }

    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            orientation: self.orientation,
            forward: self.forward,
            right: self.right,
            up: self.up,
            view: self.view,
            projection: self.projection.matrix(),
        }
    }

    fn yaw_by(&mut self, angle: f32) {
        // World vertical keeps yaw level whatever the pitch.
        let Some(increment) = increment(angle, REFERENCE_UP) else {
            return;
        };
        self.yaw = (self.yaw + angle).rem_euclid(360.0);
        self.apply(increment);
    }

    fn pitch_by(&mut self, angle: f32) {
        if !angle.is_finite() {
            tracing::warn!(angle, "ignoring non-finite pitch request");
            return;
        }
        let target = (self.pitch + angle).clamp(-self.pitch_limit, self.pitch_limit);
        let applied = target - self.pitch;
        if applied == 0.0 {
            tracing::trace!(pitch = self.pitch, "pitch limit reached");
            return;
        }
        let Some(increment) = increment(applied, self.right) else {
            return;
        };
        self.pitch = target;
        self.apply(increment);
    }

    /// Pre-multiply: the increment is expressed in world space.
    fn apply(&mut self, increment: Versor) {
        self.orientation = increment * self.orientation;
        self.rotation = self.orientation.to_rotation_matrix();
        self.update_basis();
    }

    fn update_basis(&mut self) {
        self.forward = self.rotation.transform_vector3(REFERENCE_FORWARD);
        self.right = self.rotation.transform_vector3(REFERENCE_RIGHT);
        self.up = self.rotation.transform_vector3(REFERENCE_UP);
    }
}

fn increment(angle: f32, axis: Vec3) -> Option<Versor> {
    match Versor::from_axis_angle(angle, axis) {
        Ok(versor) => Some(versor),
        Err(err) => {
            tracing::warn!(%err, angle, "ignoring rotation request");
            None
        }
    }
}
