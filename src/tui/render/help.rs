//! Help overlay rendering

use crate::app::App;
use crate::config::Action;
use crate::tui::layout::centered_rect_absolute;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::colors;

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut help_text = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut current_group = None;
    for &action in Action::ALL_FOR_HELP {
        let group = action.group();

        if current_group != Some(group) {
            if current_group.is_some() {
                help_text.push(Line::from(""));
            }
            help_text.push(Line::from(Span::styled(
                group.title(),
                Style::default().fg(colors::TEXT_DIM),
            )));
            current_group = Some(group);
        }

        let keys = app.config.keys.format_keys(action);
        help_text.push(Line::from(vec![
            Span::styled(
                format!("  {keys:<16} "),
                Style::default().fg(colors::ACCENT_SOFT),
            ),
            Span::styled(
                action.description(),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
        ]));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        format!(
            "1-{}: jump to model • click: select • wheel: scroll code",
            app.catalog.len().min(9)
        ),
        Style::default().fg(colors::TEXT_MUTED),
    )));
    help_text.push(Line::from(Span::styled(
        "shift+wheel: scroll code sideways",
        Style::default().fg(colors::TEXT_MUTED),
    )));
    help_text.push(Line::from(Span::styled(
        "Any key closes",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    help_text
}

/// Area covered by the help overlay for a frame of size `frame_area`
pub fn help_rect(app: &App, frame_area: Rect) -> Rect {
    let total_lines = help_lines(app).len();
    let max_height = frame_area.height.saturating_sub(2);
    let height = u16::try_from(total_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(max_height);
    centered_rect_absolute(60, height, frame_area)
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let area = help_rect(app, frame.area());

    let paragraph = Paragraph::new(help_lines(app))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_type(colors::BORDER_TYPE)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
