//! TUI Globe (workspace facade crate).
//!
//! Re-exports the member crates as `tui_globe::{core,engine,input,term,types}` so the
//! binary, integration tests, and benches share one import path.

pub use tui_globe_core as core;
pub use tui_globe_engine as engine;
pub use tui_globe_input as input;
pub use tui_globe_term as term;
pub use tui_globe_types as types;
