//! Key mapping from terminal events to input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One unit of raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A typed character, recognized or not.
    Char(char),
    /// Ctrl-C. In raw mode the terminal delivers it as a key, not a signal.
    Interrupt,
}

/// Check if key is the interrupt chord.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a key event to an input event.
///
/// Only presses count. Non-character keys (arrows, function keys) yield `None`
/// and are skipped by the reader, the same as any unrecognized character.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_interrupt(key) {
        return Some(InputEvent::Interrupt);
    }
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Char(ch))
        }
        _ => None,
    }
}
