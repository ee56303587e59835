//! Globe engine - the control loop and everything it needs at startup.
//!
//! - [`config`]: process-wide settings (defaults, environment overrides, validation)
//! - [`asset`]: loading the map file into a validated [`Texture`](crate::core::Texture)
//! - [`globe_loop`]: render → present → poll → rotate → clamp → pace, once per tick
//!
//! The loop is single-threaded and owns the only mutable state, the
//! [`RotationState`](crate::core::RotationState). Input and output are reached
//! through the [`KeySource`](crate::input::KeySource) and
//! [`FrameSink`](crate::term::FrameSink) traits so the whole loop runs headless in tests.

pub mod asset;
pub mod config;
pub mod globe_loop;

pub use tui_globe_core as core;
pub use tui_globe_input as input;
pub use tui_globe_term as term;
pub use tui_globe_types as types;

pub use asset::{load_texture, AssetError};
pub use config::{ConfigError, GlobeConfig};
pub use globe_loop::{GlobeLoop, LoopOutcome, LoopState};
