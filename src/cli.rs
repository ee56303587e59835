//! Command-line arguments.
//!
//! Flags override the defaults and `GLOBE_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use tui_globe::engine::GlobeConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "tui-globe", version, about = "Spin an ASCII globe in the terminal")]
pub struct CliArgs {
    /// Path to the equirectangular map file.
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Screen width in character cells.
    #[arg(long)]
    pub width: Option<u16>,

    /// Screen height in character cells.
    #[arg(long)]
    pub height: Option<u16>,

    /// Size the screen to the terminal once at startup (overrides --width/--height).
    #[arg(long)]
    pub fit: bool,

    /// Globe radius relative to the screen height.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Rotation per keystroke, in radians.
    #[arg(long)]
    pub step: Option<f64>,

    /// Delay between frames, in milliseconds.
    #[arg(long)]
    pub frame_ms: Option<u64>,

    /// Pause after the startup banner, in milliseconds.
    #[arg(long)]
    pub splash_ms: Option<u64>,

    /// Initial yaw in radians.
    #[arg(long, allow_negative_numbers = true)]
    pub yaw: Option<f64>,

    /// Initial pitch in radians (clamped to the poles).
    #[arg(long, allow_negative_numbers = true)]
    pub pitch: Option<f64>,

    /// Replay these keys instead of reading the keyboard, then quit.
    #[arg(long)]
    pub keys: Option<String>,

    /// Stop after this many frames.
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Print a single frame as plain text and exit.
    #[arg(long)]
    pub dump: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter (error, warn, info, debug, trace, or an EnvFilter directive).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Apply CLI overrides to a config built from defaults and environment.
    pub fn apply_to(&self, config: &mut GlobeConfig) {
        if let Some(ref map) = self.map {
            config.map_path = map.clone();
        }
        if let Some(w) = self.width {
            config.screen_width = w;
        }
        if let Some(h) = self.height {
            config.screen_height = h;
        }
        if let Some(r) = self.radius {
            config.globe_radius = r;
        }
        if let Some(step) = self.step {
            config.rotation_step = step;
        }
        if let Some(ms) = self.frame_ms {
            config.frame_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.splash_ms {
            config.splash = Duration::from_millis(ms);
        }
        if let Some(yaw) = self.yaw {
            config.initial_rotation.yaw = yaw;
        }
        if let Some(pitch) = self.pitch {
            config.initial_rotation.pitch = pitch;
        }
        if self.max_frames.is_some() {
            config.max_frames = self.max_frames;
        }
    }
}
