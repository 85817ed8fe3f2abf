//! Keyboard and mouse input handling
//!
//! Input only ever mutates [`App`]; the next draw picks the change up.

mod mouse;

pub use mouse::handle_mouse_event;

use crate::app::{App, Mode};
use crate::config::Action;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key press based on the current mode
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let action = app.config.keys.get_action(code, modifiers);

    match app.mode {
        Mode::Help => {
            // Quit still quits; any other key closes the overlay.
            if action == Some(Action::Quit) && modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                app.exit_mode();
            }
        }
        Mode::Normal => {
            if let Some(action) = action {
                app.handle_action(action);
            } else if let Some(idx) = digit_index(code, modifiers) {
                app.select_index(idx);
            }
        }
    }
}

/// `1`-`9` map to display positions `0`-`8`
fn digit_index(code: KeyCode, modifiers: KeyModifiers) -> Option<usize> {
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    let KeyCode::Char(ch) = code else {
        return None;
    };
    let digit = ch.to_digit(10)?;
    let idx = usize::try_from(digit).ok()?.checked_sub(1)?;
    Some(idx)
}
