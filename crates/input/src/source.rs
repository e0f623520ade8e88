//! Non-blocking terminal input source.
//!
//! The run loop must keep ticking without input, so reading is split into
//! "is a key pending?" (bounded wait) and "read the pending key".

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::map::handle_key_event;
use crate::types::{Command, INPUT_POLL_MS};

/// Outcome of the start prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    Start,
    Abort,
}

/// Reads commands from the terminal event stream.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    poll_timeout: Duration,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(INPUT_POLL_MS),
        }
    }

    /// Whether an event is waiting; waits at most the poll timeout.
    pub fn key_pending(&self) -> Result<bool> {
        Ok(event::poll(self.poll_timeout)?)
    }

    /// Read the pending event. Only call after [`Self::key_pending`] returned true,
    /// otherwise this blocks.
    pub fn read_key(&self) -> Result<Option<KeyEvent>> {
        Ok(key_press(event::read()?))
    }

    /// The command for the pending key press, if any.
    pub fn poll_command(&mut self) -> Result<Option<Command>> {
        if !self.key_pending()? {
            return Ok(None);
        }
        Ok(self.read_key()?.and_then(handle_key_event))
    }

    /// Block until `start_key` is pressed. Ctrl-C aborts.
    pub fn wait_for_start(&mut self, start_key: char) -> Result<StartChoice> {
        loop {
            if !self.key_pending()? {
                continue;
            }
            if let Some(choice) = self.read_key()?.and_then(|key| start_choice(key, start_key)) {
                return Ok(choice);
            }
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Key presses only; releases, repeats and non-key events are dropped.
fn key_press(event: Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

fn start_choice(key: KeyEvent, start_key: char) -> Option<StartChoice> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(StartChoice::Abort);
    }
    (key.code == KeyCode::Char(start_key)).then_some(StartChoice::Start)
}
