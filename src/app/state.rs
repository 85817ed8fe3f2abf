//! Application state

use super::Selection;
use crate::catalog::{Catalog, CatalogError, ModelEntry};
use crate::config::{Action, Config};
use crate::tui::layout::{ScreenLayout, code_max_width, code_text_area};
use ratatui::layout::Rect;
use tracing::debug;

/// Which screen is in front
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Selector grid and detail card
    #[default]
    Normal,
    /// Keybinding help overlay
    Help,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// The catalog being browsed
    pub catalog: Catalog,

    /// Currently selected catalog entry
    pub selection: Selection,

    /// Current application mode
    pub mode: Mode,

    /// First visible line of the code sample
    pub code_scroll: usize,

    /// First visible column of the code sample
    pub code_hscroll: usize,

    /// Last known terminal area, used for layout-dependent input
    pub frame_area: Rect,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application showing the catalog's default entry
    #[must_use]
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let selection = Selection::new(&catalog);
        Self {
            config,
            catalog,
            selection,
            mode: Mode::Normal,
            code_scroll: 0,
            code_hscroll: 0,
            frame_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Create an application with `key` selected instead of the default.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKey`] if `key` is not in the catalog.
    pub fn with_initial_model(
        config: Config,
        catalog: Catalog,
        key: &str,
    ) -> Result<Self, CatalogError> {
        let mut app = Self::new(config, catalog);
        app.select_key(key)?;
        Ok(app)
    }

    /// The entry shown in the detail card
    #[must_use]
    pub fn selected_entry(&self) -> &ModelEntry {
        self.selection.selected_entry(&self.catalog)
    }

    /// Key of the entry shown in the detail card
    #[must_use]
    pub fn selected_key(&self) -> &'static str {
        self.selection.selected_key(&self.catalog)
    }

    /// Layout for the last known terminal area
    #[must_use]
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.frame_area, self.catalog.len())
    }

    /// Select an entry by key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKey`] if `key` is not in the catalog.
    pub fn select_key(&mut self, key: &str) -> Result<bool, CatalogError> {
        let changed = self.selection.select(&self.catalog, key)?;
        self.after_selection(changed);
        Ok(changed)
    }

    /// Select an entry by display position; out-of-range positions are ignored.
    pub fn select_index(&mut self, idx: usize) -> bool {
        let changed = self.selection.select_index(idx);
        self.after_selection(changed);
        changed
    }

    /// Move to the next entry (wrapping)
    pub fn select_next(&mut self) -> bool {
        let changed = self.selection.select_next();
        self.after_selection(changed);
        changed
    }

    /// Move to the previous entry (wrapping)
    pub fn select_prev(&mut self) -> bool {
        let changed = self.selection.select_prev();
        self.after_selection(changed);
        changed
    }

    /// Move one grid row down (wrapping)
    pub fn select_row_down(&mut self) -> bool {
        let columns = self.layout().columns;
        let changed = self.selection.select_next_by(columns);
        self.after_selection(changed);
        changed
    }

    /// Move one grid row up (wrapping)
    pub fn select_row_up(&mut self) -> bool {
        let columns = self.layout().columns;
        let changed = self.selection.select_prev_by(columns);
        self.after_selection(changed);
        changed
    }

    fn after_selection(&mut self, changed: bool) {
        if changed {
            self.code_scroll = 0;
            self.code_hscroll = 0;
            debug!(model = self.selected_key(), "Showing model");
        }
    }

    /// Number of lines in the selected code sample
    #[must_use]
    pub fn code_line_count(&self) -> usize {
        self.selected_entry().code.lines().count()
    }

    /// Area the code text is drawn into, excluding the scrollbar column
    #[must_use]
    pub fn code_viewport(&self) -> Rect {
        code_text_area(self.layout().detail.code, self.code_line_count())
    }

    /// Largest scroll offset that still fills the code viewport
    #[must_use]
    pub fn max_code_scroll(&self) -> usize {
        let viewport = usize::from(self.code_viewport().height);
        self.code_line_count().saturating_sub(viewport)
    }

    /// Largest column offset; the end of the widest line is then in view
    #[must_use]
    pub fn max_code_hscroll(&self) -> usize {
        let viewport = usize::from(self.code_viewport().width);
        code_max_width(self.selected_entry().code).saturating_sub(viewport)
    }

    /// Scroll the code sample up by `amount` lines
    pub const fn scroll_up(&mut self, amount: usize) {
        self.code_scroll = self.code_scroll.saturating_sub(amount);
    }

    /// Scroll the code sample down by `amount` lines
    pub fn scroll_down(&mut self, amount: usize) {
        self.code_scroll = self
            .code_scroll
            .saturating_add(amount)
            .min(self.max_code_scroll());
    }

    /// Scroll the code sample left by `amount` columns
    pub const fn scroll_left(&mut self, amount: usize) {
        self.code_hscroll = self.code_hscroll.saturating_sub(amount);
    }

    /// Scroll the code sample right by `amount` columns
    pub fn scroll_right(&mut self, amount: usize) {
        self.code_hscroll = self
            .code_hscroll
            .saturating_add(amount)
            .min(self.max_code_hscroll());
    }

    /// Scroll to the top of the code sample
    pub const fn scroll_to_top(&mut self) {
        self.code_scroll = 0;
    }

    /// Scroll to the bottom of the code sample
    pub fn scroll_to_bottom(&mut self) {
        self.code_scroll = self.max_code_scroll();
    }

    /// Record a new terminal size
    pub fn resize(&mut self, area: Rect) {
        self.frame_area = area;
        self.code_scroll = self.code_scroll.min(self.max_code_scroll());
        self.code_hscroll = self.code_hscroll.min(self.max_code_hscroll());
    }

    /// Enter a new mode
    pub const fn enter_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Return to the normal view
    pub const fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Apply a bound action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::NextModel => {
                self.select_next();
            }
            Action::PrevModel => {
                self.select_prev();
            }
            Action::RowDown => {
                self.select_row_down();
            }
            Action::RowUp => {
                self.select_row_up();
            }
            Action::SelectDefault => {
                self.select_index(self.catalog.default_index());
            }
            Action::ScrollUp => self.scroll_up(self.config.scroll_step),
            Action::ScrollDown => self.scroll_down(self.config.scroll_step),
            Action::ScrollLeft => self.scroll_left(self.config.scroll_step),
            Action::ScrollRight => self.scroll_right(self.config.scroll_step),
            Action::ScrollTop => self.scroll_to_top(),
            Action::ScrollBottom => self.scroll_to_bottom(),
            Action::Help => self.enter_mode(Mode::Help),
            Action::Cancel => self.exit_mode(),
            Action::Quit => self.should_quit = true,
        }
    }
}
