use std::fmt;
use std::str::FromStr;

use freefly_camera::{Camera, FrameMotion};

use crate::{CameraAction, InputError};

/// One of the independent direction inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Back,
    Up,
    Down,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
}

impl Direction {
    pub const ALL: [Direction; 10] = [
        Self::Left,
        Self::Right,
        Self::Forward,
        Self::Back,
        Self::Up,
        Self::Down,
        Self::YawLeft,
        Self::YawRight,
        Self::PitchUp,
        Self::PitchDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Forward => "forward",
            Self::Back => "back",
            Self::Up => "up",
            Self::Down => "down",
            Self::YawLeft => "yaw-left",
            Self::YawRight => "yaw-right",
            Self::PitchUp => "pitch-up",
            Self::PitchDown => "pitch-down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| InputError::UnknownDirection(s.trim().to_string()))
    }
}

/// Which directions are held during a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionFlags {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub back: bool,
    pub up: bool,
    pub down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl DirectionFlags {
    pub fn set(&mut self, direction: Direction, held: bool) {
        let slot = match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Forward => &mut self.forward,
            Direction::Back => &mut self.back,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::YawLeft => &mut self.yaw_left,
            Direction::YawRight => &mut self.yaw_right,
            Direction::PitchUp => &mut self.pitch_up,
            Direction::PitchDown => &mut self.pitch_down,
        };
        *slot = held;
    }

    pub fn with(mut self, direction: Direction) -> Self {
        self.set(direction, true);
        self
    }

    /// Parse a comma-separated list such as `forward,yaw-left`.
    pub fn parse_list(list: &str) -> Result<Self, InputError> {
        list.split(',')
            .filter(|part| !part.trim().is_empty())
            .try_fold(Self::default(), |flags, part| Ok(flags.with(part.parse()?)))
    }

    /// Translate held directions into camera actions for one frame.
    ///
    /// Opposing directions cancel. The distance is shared between the active
    /// translation axes (lateral, depth, vertical) and the angle between the
    /// active rotation axes (yaw, pitch), so combined input is never faster
    /// than a single direction.
    pub fn actions(&self, motion: FrameMotion) -> Vec<CameraAction> {
        let mut actions = Vec::new();

        let lateral = exclusive(self.left, self.right);
        let depth = exclusive(self.forward, self.back);
        let vertical = exclusive(self.up, self.down);
        let moving = [lateral, depth, vertical].iter().flatten().count();
        if moving > 0 {
            let distance = motion.distance / moving as f32;
            match lateral {
                Some(true) => actions.push(CameraAction::MoveLeft(distance)),
                Some(false) => actions.push(CameraAction::MoveRight(distance)),
                None => {}
            }
            match depth {
                Some(true) => actions.push(CameraAction::MoveForward(distance)),
                Some(false) => actions.push(CameraAction::MoveBackward(distance)),
                None => {}
            }
            match vertical {
                Some(true) => actions.push(CameraAction::MoveUp(distance)),
                Some(false) => actions.push(CameraAction::MoveDown(distance)),
                None => {}
            }
        }

        let yaw = exclusive(self.yaw_left, self.yaw_right);
        let pitch = exclusive(self.pitch_up, self.pitch_down);
        let turning = [yaw, pitch].iter().flatten().count();
        if turning > 0 {
            let angle = motion.angle / turning as f32;
            match yaw {
                Some(true) => actions.push(CameraAction::RotateLeft(angle)),
                Some(false) => actions.push(CameraAction::RotateRight(angle)),
                None => {}
            }
            match pitch {
                Some(true) => actions.push(CameraAction::RotateUp(angle)),
                Some(false) => actions.push(CameraAction::RotateDown(angle)),
                None => {}
            }
        }

        actions
    }

    /// Apply this frame's actions to `camera`. Returns whether anything was
    /// requested, so the render loop can skip `recompute_view` on idle frames.
    pub fn drive(&self, camera: &mut Camera, motion: FrameMotion) -> bool {
        let actions = self.actions(motion);
        for action in &actions {
            action.apply(camera);
        }
        if !actions.is_empty() {
            tracing::trace!(count = actions.len(), ?motion, "camera driven");
        }
        !actions.is_empty()
    }
}

/// `Some(true)` when only `first` is held, `Some(false)` when only `second`.
fn exclusive(first: bool, second: bool) -> Option<bool> {
    match (first, second) {
        (true, false) => Some(true),
        (false, true) => Some(false),
        _ => None,
    }
}
