//! Tracing subscriber setup.
//!
//! stdout carries the frames, so log lines go to a file when one is given and
//! otherwise to stderr at `warn` unless `RUST_LOG` or `--log-level` says otherwise.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn init_logging(log_file: Option<&Path>, level: Option<&str>) -> Result<()> {
    let filter_str = level.filter(|s| !s.trim().is_empty()).unwrap_or(DEFAULT_FILTER);

    // RUST_LOG wins; otherwise --log-level, otherwise warn.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install logger: {e}"))
}
