//! Terminal globe runner (default binary).
//!
//! Loads the map, prints the banner, then hands the terminal to the render loop.
//! Uses crossterm for input and a framebuffer-based renderer (no widget toolkit).

mod cli;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};

use tui_globe::core::Texture;
use tui_globe::engine::{load_texture, AssetError, GlobeConfig, GlobeLoop, LoopOutcome};
use tui_globe::input::select_key_source;
use tui_globe::term::{run_session, terminal_size, GlobeView, TerminalRenderer};
use tui_globe::types::BANNER;

use crate::cli::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init_logging(args.log_file.as_deref(), args.log_level.as_deref()) {
        eprintln!("Error: {e:#}");
        return ExitCode::from(2);
    }

    let mut config = GlobeConfig::from_env();
    args.apply_to(&mut config);
    if args.fit {
        match terminal_size() {
            Ok((w, h)) => {
                config.screen_width = w;
                config.screen_height = h;
            }
            Err(e) => warn!(error = %e, "could not read terminal size; keeping configured size"),
        }
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::from(2);
    }

    let texture = match load_texture(&config.map_path) {
        Ok(texture) => texture,
        Err(e) => {
            debug!(error = ?e, "map load failed");
            let _ = report_asset_error(&e, &mut io::stderr().lock());
            return ExitCode::from(e.exit_code());
        }
    };

    let result = if args.dump {
        dump(&texture, &config)
    } else {
        run(&texture, &config, args.keys.as_deref()).map(|outcome| {
            info!(frames = outcome.frames, "bye");
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "fatal");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// User-facing report for a map failure: the error, then a hint.
fn report_asset_error(e: &AssetError, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Error: {e}")?;
    writeln!(out, "{}", e.hint())?;
    out.flush()
}

/// Print one frame at the initial rotation as plain text.
fn dump(texture: &Texture, config: &GlobeConfig) -> Result<()> {
    let mut rotation = config.initial_rotation;
    rotation.clamp_pitch();
    let fb = GlobeView::new(config.geometry()).render(texture, rotation);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{fb}")?;
    stdout.flush()?;
    Ok(())
}

fn run(texture: &Texture, config: &GlobeConfig, script: Option<&str>) -> Result<LoopOutcome> {
    println!("{BANNER}");
    io::stdout().flush()?;
    if !config.splash.is_zero() {
        thread::sleep(config.splash);
    }

    let mut keys = select_key_source(script);
    let mut term = TerminalRenderer::new();
    run_session(&mut term, |term| GlobeLoop::new(texture, config).run(&mut keys, term))
}
