//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full overwrite: cursor home, then every row. The screen is
//! never cleared between frames, which is what keeps the globe from flickering.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use tracing::debug;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Output side of the render loop: shows one assembled frame.
pub trait FrameSink {
    /// Present `fb` and make it visible before returning.
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }
}

/// A terminal mode that must be left again once entered.
pub trait TerminalSession {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
}

/// Enter `session`, run `body`, then restore the terminal.
///
/// `exit` runs on every path, including a failed `enter` that left raw mode on.
/// The first error wins; a restore error is only reported when `body` succeeded.
pub fn run_session<S, T, F>(session: &mut S, body: F) -> Result<T>
where
    S: TerminalSession + ?Sized,
    F: FnOnce(&mut S) -> Result<T>,
{
    if let Err(e) = session.enter() {
        if let Err(exit_err) = session.exit() {
            debug!(error = %exit_err, "terminal restore after failed enter");
        }
        return Err(e);
    }

    let result = body(session);
    let restored = session.exit();
    let value = result?;
    restored?;
    Ok(value)
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl TerminalSession for TerminalRenderer {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        // One clear on entry; frames themselves never clear.
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        debug!("terminal entered raw mode");
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        debug!("terminal restored");
        Ok(())
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Current terminal size as `(columns, rows)`.
pub fn terminal_size() -> Result<(u16, u16)> {
    Ok(terminal::size()?)
}

/// Encode a full frame overwrite into `out`.
///
/// Cursor to top-left, then rows separated by `\r\n` (raw mode does not translate `\n`).
/// No clear command is emitted.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for (y, row) in fb.rows().enumerate() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        for cell in row {
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
