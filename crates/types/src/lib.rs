//! Core types module - shared constants and actions
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable in
//! any context (projection math, terminal rendering, input mapping).
//!
//! # Screen Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 120 | Frame width in terminal columns |
//! | `SCREEN_HEIGHT` | 40 | Frame height in terminal rows |
//! | `GLOBE_RADIUS` | 0.9 | Globe radius relative to the screen height |
//! | `ROTATION_STEP` | 0.1 | Radians applied per keystroke |
//! | `FRAME_DELAY_MS` | 10 | Fixed sleep between frames |
//! | `SPLASH_MS` | 2000 | Pause after the startup banner |
//!
//! # Examples
//!
//! ```
//! use tui_globe_types::{GlobeAction, SCREEN_HEIGHT, SCREEN_WIDTH};
//!
//! assert_eq!(GlobeAction::SpinLeft.as_str(), "spinLeft");
//!
//! assert_eq!(SCREEN_WIDTH, 120);
//! assert_eq!(SCREEN_HEIGHT, 40);
//! ```

/// Default frame width in terminal columns.
pub const SCREEN_WIDTH: u16 = 120;

/// Default frame height in terminal rows.
pub const SCREEN_HEIGHT: u16 = 40;

/// Globe radius, relative to the screen height (normalized units).
pub const GLOBE_RADIUS: f64 = 0.9;

/// Rotation applied per keystroke, in radians.
pub const ROTATION_STEP: f64 = 0.1;

/// Fixed sleep between frames in milliseconds.
pub const FRAME_DELAY_MS: u64 = 10;

/// Pause after printing the startup banner, in milliseconds.
pub const SPLASH_MS: u64 = 2000;

/// Default texture asset, resolved relative to the working directory.
pub const MAP_FILENAME: &str = "world_map.txt";

/// Fill character for cells outside the globe disc.
pub const BACKGROUND_CHAR: char = ' ';

/// Help line overlaid on the bottom row of every frame.
pub const STATUS_LINE: &str = " A/D: Spin | W/S: Tilt | Q: Quit ";

/// Banner printed once before the render loop starts.
pub const BANNER: &str = "Globe loaded. Use A/D to spin, W/S to tilt. Press 'q' to quit.";

/// Key that terminates the render loop.
pub const QUIT_KEY: char = 'q';

/// Pitch is clamped to `[-PITCH_LIMIT, PITCH_LIMIT]` (the poles).
pub const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_globe() {
        assert_eq!(SCREEN_WIDTH, 120);
        assert_eq!(SCREEN_HEIGHT, 40);
        assert_eq!(GLOBE_RADIUS, 0.9);
        assert_eq!(ROTATION_STEP, 0.1);
        assert_eq!(FRAME_DELAY_MS, 10);
        assert_eq!(MAP_FILENAME, "world_map.txt");
    }

    #[test]
    fn status_line_fits_default_screen() {
        assert!(STATUS_LINE.chars().count() < SCREEN_WIDTH as usize);
    }
}

/// Rotation actions produced by keystrokes
///
/// Quitting is not an action; it is detected separately so the loop can stop
/// without touching rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobeAction {
    /// Decrease yaw (spin the globe westward)
    SpinLeft,
    /// Increase yaw
    SpinRight,
    /// Decrease pitch
    TiltUp,
    /// Increase pitch
    TiltDown,
}

impl GlobeAction {
    /// Convert to camelCase string (used in log fields)
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobeAction::SpinLeft => "spinLeft",
            GlobeAction::SpinRight => "spinRight",
            GlobeAction::TiltUp => "tiltUp",
            GlobeAction::TiltDown => "tiltDown",
        }
    }
}
