//! Mouse input handling (click-to-select, wheel scrolling).
//!
//! Shift+wheel and horizontal wheels scroll the code sideways.

use crate::app::{App, Mode};
use crate::tui::layout::rect_contains;
use crate::tui::render::help::help_rect;
use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Lines or columns moved per wheel notch.
const WHEEL_STEP: usize = 3;

#[derive(Debug, Clone, Copy)]
enum Wheel {
    Up,
    Down,
    Left,
    Right,
}

/// Handle a mouse event against the last known frame area.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
    let wheel = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(app, mouse.column, mouse.row);
            return;
        }
        MouseEventKind::ScrollDown if shift => Wheel::Right,
        MouseEventKind::ScrollUp if shift => Wheel::Left,
        MouseEventKind::ScrollDown => Wheel::Down,
        MouseEventKind::ScrollUp => Wheel::Up,
        MouseEventKind::ScrollRight => Wheel::Right,
        MouseEventKind::ScrollLeft => Wheel::Left,
        _ => return,
    };
    handle_wheel(app, mouse.column, mouse.row, wheel);
}

fn handle_left_click(app: &mut App, x: u16, y: u16) {
    if app.mode == Mode::Help {
        // Clicking off the overlay is equivalent to closing it.
        if !rect_contains(help_rect(app, app.frame_area), x, y) {
            app.exit_mode();
        }
        return;
    }

    if let Some(idx) = app.layout().cell_at(x, y) {
        app.select_index(idx);
    }
}

fn handle_wheel(app: &mut App, x: u16, y: u16, wheel: Wheel) {
    if app.mode != Mode::Normal || !rect_contains(app.layout().detail.card, x, y) {
        return;
    }
    match wheel {
        Wheel::Up => app.scroll_up(WHEEL_STEP),
        Wheel::Down => app.scroll_down(WHEEL_STEP),
        Wheel::Left => app.scroll_left(WHEEL_STEP),
        Wheel::Right => app.scroll_right(WHEEL_STEP),
    }
}
