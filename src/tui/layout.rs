//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Both sides compute the same [`ScreenLayout`] from the frame area, so a
//! click lands on exactly the selector control that was drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::Line;

/// Header rows: title and subtitle.
pub const HEADER_HEIGHT: u16 = 2;
/// Footer rows: callout title and text.
pub const FOOTER_HEIGHT: u16 = 2;
/// Status bar rows.
pub const STATUS_HEIGHT: u16 = 1;
/// Frames at least this wide lay the selector out in four columns.
pub const WIDE_MIN_WIDTH: u16 = 100;
/// Frames at least this tall give each selector control two rows.
pub const TALL_MIN_HEIGHT: u16 = 32;
/// Number of static footer callouts.
pub const FOOTER_CARDS: usize = 3;
/// Columns per tab stop when a code sample is displayed.
pub const CODE_TAB_WIDTH: usize = 4;

/// Regions inside the detail card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailLayout {
    /// The bordered card itself.
    pub card: Rect,
    /// Model name and paper citation.
    pub title: Rect,
    /// "Full implementation" heading.
    pub heading: Rect,
    /// Preformatted code viewport.
    pub code: Rect,
    /// Tip line under the code.
    pub tip: Rect,
}

impl DetailLayout {
    fn new(card: Rect) -> Self {
        let inner = card.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);
        Self {
            card,
            title: chunks[0],
            heading: chunks[1],
            code: chunks[2],
            tip: chunks[3],
        }
    }
}

/// Every region of the main screen for a given frame area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title and subtitle.
    pub header: Rect,
    /// Whole selector grid.
    pub selector: Rect,
    /// One control per catalog entry, in catalog order.
    pub cells: Vec<Rect>,
    /// Grid columns.
    pub columns: usize,
    /// Rows per selector control.
    pub cell_height: u16,
    /// Detail card regions.
    pub detail: DetailLayout,
    /// Static callouts.
    pub footer: Rect,
    /// One rect per footer callout.
    pub footer_cards: Vec<Rect>,
    /// Key hints line.
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Lay out a screen holding `entry_count` selector controls.
    #[must_use]
    pub fn new(area: Rect, entry_count: usize) -> Self {
        let columns = columns_for_width(area.width);
        let cell_height = if area.height >= TALL_MIN_HEIGHT { 2 } else { 1 };
        let row_gap = cell_height - 1;
        let rows = entry_count.div_ceil(columns);
        let rows_u16 = u16::try_from(rows).unwrap_or(u16::MAX);
        let selector_height = rows_u16
            .saturating_mul(cell_height)
            .saturating_add(rows_u16.saturating_sub(1).saturating_mul(row_gap));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(selector_height),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let selector = chunks[1];
        let footer = chunks[3];

        Self {
            header: chunks[0],
            selector,
            cells: grid_cells(selector, entry_count, columns, cell_height, row_gap),
            columns,
            cell_height,
            detail: DetailLayout::new(chunks[2]),
            footer,
            footer_cards: split_even(footer, FOOTER_CARDS),
            status_bar: chunks[4],
        }
    }

    /// Index of the selector control under `(x, y)`, if any.
    #[must_use]
    pub fn cell_at(&self, x: u16, y: u16) -> Option<usize> {
        self.cells.iter().position(|cell| rect_contains(*cell, x, y))
    }
}

/// Selector grid columns for a frame `width`.
#[must_use]
pub const fn columns_for_width(width: u16) -> usize {
    if width >= WIDE_MIN_WIDTH { 4 } else { 2 }
}

/// Whether `(x, y)` falls inside `rect`.
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Part of the code viewport that holds text. When the sample is taller than
/// the viewport the last column belongs to the scrollbar.
#[must_use]
pub fn code_text_area(code: Rect, line_count: usize) -> Rect {
    if line_count > usize::from(code.height) {
        Rect {
            width: code.width.saturating_sub(1),
            ..code
        }
    } else {
        code
    }
}

/// A code line as displayed: tabs expanded, nothing else touched.
#[must_use]
pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(CODE_TAB_WIDTH))
}

/// Display width of the widest line in a code sample.
#[must_use]
pub fn code_max_width(code: &str) -> usize {
    code.lines()
        .map(|line| Line::raw(expand_tabs(line)).width())
        .max()
        .unwrap_or(0)
}

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn split_even(area: Rect, parts: usize) -> Vec<Rect> {
    let denominator = u32::try_from(parts).unwrap_or(1).max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, denominator); parts])
        .spacing(1)
        .split(area)
        .to_vec()
}

fn grid_cells(
    area: Rect,
    entry_count: usize,
    columns: usize,
    cell_height: u16,
    row_gap: u16,
) -> Vec<Rect> {
    let rows = entry_count.div_ceil(columns);
    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(cell_height); rows])
        .spacing(row_gap)
        .split(area);

    row_rects
        .iter()
        .flat_map(|row| split_even(*row, columns))
        .take(entry_count)
        .collect()
}
