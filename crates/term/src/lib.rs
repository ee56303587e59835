//! Terminal "globe renderer" module.
//!
//! This is a small rendering layer for character-art output. It avoids any
//! widget/layout framework and instead composites each frame into a plain
//! framebuffer that is flushed to the terminal in one write.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Rebuild the whole frame every tick so no stale cells survive
//! - Overwrite in place (cursor home, no clear) so the globe never flickers

pub mod fb;
pub mod globe_view;
pub mod renderer;

pub use tui_globe_core as core;
pub use tui_globe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use globe_view::GlobeView;
pub use renderer::{
    encode_frame_into, run_session, terminal_size, FrameSink, TerminalRenderer, TerminalSession,
};
