//! Blocking character sources.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use crate::map::{map_key_event, InputEvent};

/// Something the input activity can block on for the next character.
pub trait CharSource: Send + 'static {
    /// Block until the next event. `Ok(None)` means the source is exhausted.
    fn next_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Raw, unbuffered keyboard input from the controlling terminal.
///
/// Expects raw mode to be enabled (the renderer does this on `enter`).
#[derive(Debug)]
pub struct TtyInput {
    _private: (),
}

impl TtyInput {
    /// Open the terminal for reading.
    ///
    /// The first poll opens the tty behind crossterm's event source, so a
    /// missing terminal surfaces here rather than mid-game.
    pub fn open() -> Result<Self> {
        event::poll(Duration::ZERO).context("failed to open terminal input")?;
        Ok(Self { _private: () })
    }
}

impl CharSource for TtyInput {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        loop {
            // No timeout: only process exit interrupts a pending read.
            if let Event::Key(key) = event::read().context("failed to read terminal input")? {
                if let Some(ev) = map_key_event(key) {
                    return Ok(Some(ev));
                }
            }
        }
    }
}

/// Fixed sequence of events, then end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// One `InputEvent::Char` per character of `keys`.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(InputEvent::Char))
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl CharSource for ScriptedInput {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_drains_in_order() {
        let mut src = ScriptedInput::from_keys("wa");
        assert_eq!(src.next_event().unwrap(), Some(InputEvent::Char('w')));
        assert_eq!(src.remaining(), 1);
        assert_eq!(src.next_event().unwrap(), Some(InputEvent::Char('a')));
        assert_eq!(src.next_event().unwrap(), None);
        assert_eq!(src.next_event().unwrap(), None);
    }

    #[test]
    fn test_scripted_input_carries_interrupts() {
        let mut src = ScriptedInput::new([InputEvent::Char('s'), InputEvent::Interrupt]);
        src.next_event().unwrap();
        assert_eq!(src.next_event().unwrap(), Some(InputEvent::Interrupt));
    }
}
