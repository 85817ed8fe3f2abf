//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `main_layout`: Header, selector grid, detail card, footer and status bar
//! - `help`: Keybinding overlay

pub mod colors;
pub mod help;
pub mod main_layout;

use crate::app::{App, Mode};
use crate::tui::layout::ScreenLayout;
use ratatui::{Frame, style::Style, widgets::Block};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BACKGROUND)),
        area,
    );

    let layout = ScreenLayout::new(area, app.catalog.len());
    main_layout::render_main(frame, app, &layout);

    match app.mode {
        Mode::Help => help::render_help_overlay(frame, app),
        Mode::Normal => {}
    }
}

#[cfg(test)]
mod tests;
