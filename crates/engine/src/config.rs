//! Runtime configuration.
//!
//! Values start from the compiled defaults, then environment variables, then
//! command-line flags (applied by the binary). They are fixed once the loop starts.
//!
//! - `GLOBE_MAP`: map file path (default: `world_map.txt`)
//! - `GLOBE_WIDTH` / `GLOBE_HEIGHT`: screen size in cells (default: 120x40)
//! - `GLOBE_RADIUS`: globe radius relative to the screen height (default: 0.9)
//! - `GLOBE_STEP`: radians per keystroke (default: 0.1)
//! - `GLOBE_FRAME_MS`: sleep between frames (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::core::{RotationState, ScreenGeometry};
use crate::types::{
    FRAME_DELAY_MS, GLOBE_RADIUS, MAP_FILENAME, ROTATION_STEP, SCREEN_HEIGHT, SCREEN_WIDTH,
    SPLASH_MS,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen must be at least 1x1, got {width}x{height}")]
    EmptyScreen { width: u16, height: u16 },

    #[error("globe radius must be positive and finite, got {0}")]
    BadRadius(f64),

    #[error("rotation step must be finite, got {0}")]
    BadStep(f64),

    #[error("initial rotation must be finite, got yaw={yaw} pitch={pitch}")]
    BadRotation { yaw: f64, pitch: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobeConfig {
    pub map_path: PathBuf,
    pub screen_width: u16,
    pub screen_height: u16,
    pub globe_radius: f64,
    pub rotation_step: f64,
    pub frame_delay: Duration,
    /// Pause after the startup banner.
    pub splash: Duration,
    /// Stop after this many frames (headless runs). `None` runs until quit.
    pub max_frames: Option<u64>,
    pub initial_rotation: RotationState,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(MAP_FILENAME),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            globe_radius: GLOBE_RADIUS,
            rotation_step: ROTATION_STEP,
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
            splash: Duration::from_millis(SPLASH_MS),
            max_frames: None,
            initial_rotation: RotationState::default(),
        }
    }
}

impl GlobeConfig {
    /// Defaults overridden by `GLOBE_*` environment variables.
    ///
    /// Unparseable values are ignored and the default kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`GlobeConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("GLOBE_MAP")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.map_path = PathBuf::from(path);
        }
        if let Some(w) = lookup("GLOBE_WIDTH").and_then(|s| s.trim().parse().ok()) {
            config.screen_width = w;
        }
        if let Some(h) = lookup("GLOBE_HEIGHT").and_then(|s| s.trim().parse().ok()) {
            config.screen_height = h;
        }
        if let Some(r) = lookup("GLOBE_RADIUS").and_then(|s| s.trim().parse().ok()) {
            config.globe_radius = r;
        }
        if let Some(step) = lookup("GLOBE_STEP").and_then(|s| s.trim().parse().ok()) {
            config.rotation_step = step;
        }
        if let Some(ms) = lookup("GLOBE_FRAME_MS").and_then(|s| s.trim().parse().ok()) {
            config.frame_delay = Duration::from_millis(ms);
        }

        config
    }

    pub fn geometry(&self) -> ScreenGeometry {
        ScreenGeometry::new(self.screen_width, self.screen_height, self.globe_radius)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.globe_radius.is_finite() && self.globe_radius > 0.0) {
            return Err(ConfigError::BadRadius(self.globe_radius));
        }
        if !self.rotation_step.is_finite() {
            return Err(ConfigError::BadStep(self.rotation_step));
        }
        let RotationState { yaw, pitch } = self.initial_rotation;
        if !(yaw.is_finite() && pitch.is_finite()) {
            return Err(ConfigError::BadRotation { yaw, pitch });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = GlobeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.map_path, PathBuf::from("world_map.txt"));
        assert_eq!(config.frame_delay, Duration::from_millis(10));
        assert_eq!(config.geometry(), ScreenGeometry::new(120, 40, 0.9));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = GlobeConfig::from_lookup(lookup(&[
            ("GLOBE_MAP", "maps/earth.txt"),
            ("GLOBE_WIDTH", "80"),
            ("GLOBE_HEIGHT", " 24 "),
            ("GLOBE_RADIUS", "0.75"),
            ("GLOBE_STEP", "0.05"),
            ("GLOBE_FRAME_MS", "33"),
        ]));
        assert_eq!(config.map_path, PathBuf::from("maps/earth.txt"));
        assert_eq!((config.screen_width, config.screen_height), (80, 24));
        assert_eq!(config.globe_radius, 0.75);
        assert_eq!(config.rotation_step, 0.05);
        assert_eq!(config.frame_delay, Duration::from_millis(33));
    }

    #[test]
    fn unparseable_env_values_keep_defaults() {
        let config = GlobeConfig::from_lookup(lookup(&[
            ("GLOBE_WIDTH", "wide"),
            ("GLOBE_RADIUS", ""),
            ("GLOBE_MAP", "   "),
        ]));
        assert_eq!(config, GlobeConfig::default());
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut config = GlobeConfig {
            screen_height: 0,
            ..GlobeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyScreen { height: 0, .. })
        ));

        config.screen_height = 40;
        config.globe_radius = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::BadRadius(0.0)));

        config.globe_radius = 0.9;
        config.rotation_step = f64::INFINITY;
        assert_eq!(config.validate(), Err(ConfigError::BadStep(f64::INFINITY)));

        config.rotation_step = 0.1;
        config.initial_rotation.yaw = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadRotation { .. })
        ));
    }
}
