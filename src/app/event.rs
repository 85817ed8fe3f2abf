//! Event polling for the TUI

use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent,
};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// No input arrived within the poll interval
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

impl Event {
    /// Convert a raw crossterm event, dropping key releases and repeats.
    #[must_use]
    pub fn from_crossterm(raw: CrosstermEvent) -> Self {
        match raw {
            CrosstermEvent::Key(key) if matches!(key.kind, KeyEventKind::Press) => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => Self::Mouse(mouse),
            CrosstermEvent::Resize(w, h) => Self::Resize(w, h),
            _ => Self::Tick,
        }
    }
}

/// Handler that polls for terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handler {
    /// Poll timeout
    tick_rate: Duration,
}

impl Handler {
    /// Create a new event handler with the given tick rate
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(Event::from_crossterm(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(250)
    }
}
