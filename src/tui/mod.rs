//! Terminal user interface

mod input;
pub mod layout;
mod render;

pub use input::{handle_key_event, handle_mouse_event};
pub use render::render;

use crate::app::{App, Event, Handler};
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use tracing::info;

/// Run the TUI until the user quits.
///
/// The terminal is restored before any error from the event loop is returned.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    info!(model = app.selected_key(), "Starting TUI");

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("TUI exited");
    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(Rect::new(0, 0, size.width, size.height));

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match event_handler.next()? {
            Event::Tick => {}
            Event::Key(key) => handle_key_event(app, key.code, key.modifiers),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(width, height) => app.resize(Rect::new(0, 0, width, height)),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
