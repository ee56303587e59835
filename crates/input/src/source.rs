//! Non-blocking keystroke sources.
//!
//! The render loop polls a [`KeySource`] exactly once per frame. Implementations
//! must return immediately whether or not a key is pending.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::{debug, trace};

use crate::map::handle_key_event;
use crate::types::QUIT_KEY;

/// A non-blocking source of single keystrokes.
pub trait KeySource {
    /// Return the next pending keystroke, or `None` if nothing is available.
    fn poll_key(&mut self) -> Option<char>;
}

impl<K: KeySource + ?Sized> KeySource for Box<K> {
    fn poll_key(&mut self) -> Option<char> {
        (**self).poll_key()
    }
}

/// Live keyboard via crossterm (expects raw mode to be enabled by the renderer).
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> Option<char> {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                debug!(error = %e, "key poll failed; treating as no input");
                return None;
            }
        }

        match event::read() {
            Ok(Event::Key(key)) => {
                let ch = handle_key_event(key);
                if ch.is_none() {
                    trace!(?key, "undecodable key event");
                }
                ch
            }
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "key read failed; treating as no input");
                None
            }
        }
    }
}

/// Replays a fixed key sequence, one key per poll.
///
/// Once the script runs dry it reports no input, or the quit key if built with
/// [`ScriptedKeys::quit_when_exhausted`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<char>,
    quit_when_exhausted: bool,
}

impl ScriptedKeys {
    pub fn new(script: &str) -> Self {
        Self {
            keys: script.chars().collect(),
            quit_when_exhausted: false,
        }
    }

    pub fn quit_when_exhausted(mut self) -> Self {
        self.quit_when_exhausted = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Option<char> {
        match self.keys.pop_front() {
            Some(ch) => Some(ch),
            None if self.quit_when_exhausted => Some(QUIT_KEY),
            None => None,
        }
    }
}

/// Pick the key source once at startup.
///
/// A script (e.g. from `--keys`) selects [`ScriptedKeys`], which quits once the
/// script is used up; otherwise the live terminal.
pub fn select_key_source(script: Option<&str>) -> Box<dyn KeySource> {
    match script {
        Some(script) => {
            debug!(keys = script.chars().count(), "using scripted key source");
            Box::new(ScriptedKeys::new(script).quit_when_exhausted())
        }
        None => {
            debug!("using terminal key source");
            Box::new(TerminalKeys::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_keys_replay_in_order_then_run_dry() {
        let mut keys = ScriptedKeys::new("ad");
        assert_eq!(keys.remaining(), 2);
        assert_eq!(keys.poll_key(), Some('a'));
        assert_eq!(keys.poll_key(), Some('d'));
        assert!(keys.is_exhausted());
        assert_eq!(keys.poll_key(), None);
        assert_eq!(keys.poll_key(), None);
    }

    #[test]
    fn exhausted_script_can_end_in_quit() {
        let mut keys = ScriptedKeys::new("w").quit_when_exhausted();
        assert_eq!(keys.poll_key(), Some('w'));
        assert_eq!(keys.poll_key(), Some(QUIT_KEY));
        assert_eq!(keys.poll_key(), Some(QUIT_KEY));
    }

    #[test]
    fn selected_script_source_quits_after_replay() {
        let mut keys = select_key_source(Some("ad"));
        assert_eq!(keys.poll_key(), Some('a'));
        assert_eq!(keys.poll_key(), Some('d'));
        assert_eq!(keys.poll_key(), Some(QUIT_KEY));
    }
}
