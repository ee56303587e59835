//! Key mapping from terminal events to globe actions.

use crate::types::{GlobeAction, QUIT_KEY};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keystroke to a rotation action.
///
/// Case-sensitive: only lowercase keys are recognized.
pub fn handle_key(ch: char) -> Option<GlobeAction> {
    match ch {
        'a' => Some(GlobeAction::SpinLeft),
        'd' => Some(GlobeAction::SpinRight),
        'w' => Some(GlobeAction::TiltUp),
        's' => Some(GlobeAction::TiltDown),
        _ => None,
    }
}

/// Check if a keystroke should stop the render loop.
pub fn should_quit(ch: char) -> bool {
    ch == QUIT_KEY
}

/// Decode a terminal key event into a keystroke character.
///
/// Only presses of plain character keys decode. `Ctrl+C` decodes as the quit key,
/// since raw mode swallows SIGINT. Everything else (releases, arrows, function keys,
/// other modifier chords) is treated as no input.
pub fn handle_key_event(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(QUIT_KEY),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(ch) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    #[test]
    fn test_rotation_keys() {
        assert_eq!(handle_key('a'), Some(GlobeAction::SpinLeft));
        assert_eq!(handle_key('d'), Some(GlobeAction::SpinRight));
        assert_eq!(handle_key('w'), Some(GlobeAction::TiltUp));
        assert_eq!(handle_key('s'), Some(GlobeAction::TiltDown));
    }

    #[test]
    fn test_uppercase_and_unknown_keys_are_ignored() {
        for ch in ['A', 'D', 'W', 'S', 'x', ' ', 'q', 'Q'] {
            assert_eq!(handle_key(ch), None, "key {ch:?}");
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit('q'));
        assert!(!should_quit('Q'));
        assert!(!should_quit('x'));
    }

    #[test]
    fn test_key_event_decoding() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('d'))), Some('d'));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT)),
            Some('S')
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_ctrl_c_decodes_as_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key).map(should_quit), Some(true));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handle_key_event(key), None);
    }
}
