//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! single keystrokes into [`crate::types::GlobeAction`] and provides the
//! non-blocking [`KeySource`] capability the render loop polls once per frame.

pub mod map;
pub mod source;

pub use tui_globe_types as types;

pub use map::{handle_key, handle_key_event, should_quit};
pub use source::{select_key_source, KeySource, ScriptedKeys, TerminalKeys};
