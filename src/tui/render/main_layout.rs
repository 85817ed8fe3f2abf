//! Main screen rendering: header, selector grid, detail card, footer, status bar

use crate::app::App;
use crate::catalog::ModelEntry;
use crate::tui::layout::{
    DetailLayout, ScreenLayout, code_max_width, code_text_area, expand_tabs,
};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::colors;

pub const TITLE: &str = "深度学习论文复现集合";
pub const SUBTITLE: &str = "经典论文的完整 PyTorch 实现";
pub const CODE_HEADING: &str = "完整实现代码";
pub const TIP_LABEL: &str = "提示：";
pub const TIP_TEXT: &str = " 代码已完整实现，可直接复制运行。包含模型定义、前向传播和使用示例。";
pub const SELECTED_MARKER: &str = "▶ ";

/// Render every region of the main screen
pub fn render_main(frame: &mut Frame<'_>, app: &App, layout: &ScreenLayout) {
    render_header(frame, layout.header);
    render_selector(frame, app, layout);
    render_detail(frame, app, &layout.detail);
    render_footer(frame, app, layout);
    render_status_bar(frame, app, layout.status_bar);
}

fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(colors::ACCENT_SOFT)),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(colors::TEXT_SECONDARY),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Text lines for one selector control
pub fn selector_cell_lines(entry: &ModelEntry, selected: bool, height: u16) -> Vec<Line<'static>> {
    let marker = if selected { SELECTED_MARKER } else { "  " };
    let name = Span::styled(
        format!("{marker}{}", entry.name),
        Style::default().add_modifier(Modifier::BOLD),
    );
    let status_style = if selected {
        Style::default().fg(colors::TEXT_PRIMARY)
    } else {
        Style::default().fg(colors::TEXT_MUTED)
    };

    if height >= 2 {
        vec![
            Line::from(name),
            Line::from(Span::styled(format!("  {}", entry.status), status_style)),
        ]
    } else {
        vec![Line::from(vec![
            name,
            Span::styled(format!("  {}", entry.status), status_style),
        ])]
    }
}

fn render_selector(frame: &mut Frame<'_>, app: &App, layout: &ScreenLayout) {
    for (entry, cell) in app.catalog.entries().iter().zip(layout.cells.iter()) {
        let selected = app.selection.is_selected(&app.catalog, entry.key);
        let style = if selected {
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .bg(colors::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT_DIM).bg(colors::SURFACE)
        };

        let paragraph =
            Paragraph::new(selector_cell_lines(entry, selected, layout.cell_height)).style(style);
        frame.render_widget(paragraph, *cell);
    }
}

/// Code sample as display lines: verbatim, with tabs expanded
pub fn code_lines(code: &str) -> Vec<Line<'static>> {
    code.lines()
        .map(|line| Line::raw(expand_tabs(line)))
        .collect()
}

fn render_detail(frame: &mut Frame<'_>, app: &App, detail: &DetailLayout) {
    let entry = app.selected_entry();

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(colors::BORDER_TYPE)
        .border_style(Style::default().fg(colors::ACCENT))
        .title(Line::from(format!(" {} ", entry.key)).left_aligned())
        .title(
            Line::from(Span::styled(
                " ⚡ ",
                Style::default().fg(colors::ACCENT_HIGHLIGHT),
            ))
            .right_aligned(),
        )
        .style(Style::default().bg(colors::SURFACE));
    frame.render_widget(card, detail.card);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                entry.name,
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  ", Style::default().fg(colors::TEXT_MUTED)),
            Span::styled(entry.status, Style::default().fg(colors::ACCENT_HIGHLIGHT)),
        ]),
        Line::from(Span::styled(
            entry.paper,
            Style::default().fg(colors::TEXT_SECONDARY),
        )),
    ])
    .style(Style::default().bg(colors::TIP_BG));
    frame.render_widget(title, detail.title);

    let code_area = code_text_area(detail.code, entry.code.lines().count());
    let max_hscroll =
        code_max_width(entry.code).saturating_sub(usize::from(code_area.width));
    let hscroll = app.code_hscroll.min(max_hscroll);

    let mut heading = vec![
        Span::styled("</> ", Style::default().fg(colors::ACCENT_SOFT)),
        Span::styled(
            CODE_HEADING,
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if max_hscroll > 0 {
        heading.push(Span::styled(
            format!("  [</>] col {}/{}", hscroll + 1, max_hscroll + 1),
            Style::default().fg(colors::TEXT_MUTED),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(heading)), detail.heading);

    render_code(frame, app, entry, detail.code, hscroll);

    let tip = Paragraph::new(Line::from(vec![
        Span::styled(TIP_LABEL, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(TIP_TEXT),
    ]))
    .style(
        Style::default()
            .fg(colors::TEXT_SECONDARY)
            .bg(colors::TIP_BG),
    );
    frame.render_widget(tip, detail.tip);
}

fn render_code(
    frame: &mut Frame<'_>,
    app: &App,
    entry: &ModelEntry,
    area: Rect,
    hscroll: usize,
) {
    let lines = code_lines(entry.code);
    let total_lines = lines.len();
    let visible_height = usize::from(area.height);
    let max_scroll = total_lines.saturating_sub(visible_height);
    let scroll = app.code_scroll.min(max_scroll);

    let style = Style::default()
        .fg(colors::CODE)
        .bg(colors::SURFACE_DEEP);
    // Paint the scrollbar column too, then draw text beside it.
    frame.render_widget(Block::default().style(style), area);

    let paragraph = Paragraph::new(lines).style(style).scroll((
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(hscroll).unwrap_or(u16::MAX),
    ));
    frame.render_widget(paragraph, code_text_area(area, total_lines));

    if total_lines > visible_height && area.width != 0 && area.height != 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some("░"))
            .track_style(Style::default().fg(colors::TEXT_MUTED))
            .thumb_style(Style::default().fg(colors::ACCENT_SOFT));

        let mut scrollbar_state = ScrollbarState::new(max_scroll.saturating_add(1))
            .position(scroll)
            .viewport_content_length(visible_height);

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// The three static callouts: title and text
pub fn footer_callouts(model_count: usize) -> [(String, String); 3] {
    [
        (
            "✓ 已复现模型".to_string(),
            format!("{model_count}个经典深度学习模型"),
        ),
        ("📦 框架支持".to_string(), "PyTorch 完整实现".to_string()),
        ("🚀 即用即部署".to_string(), "包含训练和推理代码".to_string()),
    ]
}

fn render_footer(frame: &mut Frame<'_>, app: &App, layout: &ScreenLayout) {
    for ((title, text), area) in footer_callouts(app.catalog.len())
        .into_iter()
        .zip(layout.footer_cards.iter())
    {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                text,
                Style::default().fg(colors::TEXT_SECONDARY),
            )),
        ])
        .style(Style::default().bg(colors::SURFACE));
        frame.render_widget(paragraph, *area);
    }
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let entry = app.selected_entry();
    let position = format!(
        " {}/{} {} ",
        app.selection.index() + 1,
        app.catalog.len(),
        entry.name
    );
    let hints = app.config.keys.status_hints();

    let line = Line::from(vec![
        Span::styled(
            position,
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .bg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {hints} [1-9]jump "),
            Style::default().fg(colors::TEXT_DIM),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(paragraph, area);
}
