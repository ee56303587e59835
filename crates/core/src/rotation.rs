//! Viewing rotation state.

use crate::types::{GlobeAction, PITCH_LIMIT};

/// Current viewing rotation in radians.
///
/// `yaw` is unbounded and wraps naturally through trig periodicity.
/// `pitch` is kept within `[-PITCH_LIMIT, PITCH_LIMIT]` by [`RotationState::clamp_pitch`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub yaw: f64,
    pub pitch: f64,
}

impl RotationState {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Apply one keystroke action by `step` radians.
    ///
    /// Does not clamp; the control loop clamps every tick.
    pub fn apply(&mut self, action: GlobeAction, step: f64) {
        match action {
            GlobeAction::SpinLeft => self.yaw -= step,
            GlobeAction::SpinRight => self.yaw += step,
            GlobeAction::TiltUp => self.pitch -= step,
            GlobeAction::TiltDown => self.pitch += step,
        }
    }

    /// Clamp pitch to the poles so the globe never flips over.
    pub fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}
