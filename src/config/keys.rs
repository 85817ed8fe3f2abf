//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Select the next model
    NextModel,
    /// Select the previous model
    PrevModel,
    /// Move the selection one grid row down
    RowDown,
    /// Move the selection one grid row up
    RowUp,
    /// Jump back to the default model
    SelectDefault,
    /// Scroll the code sample up
    ScrollUp,
    /// Scroll the code sample down
    ScrollDown,
    /// Scroll the code sample left
    ScrollLeft,
    /// Scroll the code sample right
    ScrollRight,
    /// Scroll to the top of the code sample
    ScrollTop,
    /// Scroll to the bottom of the code sample
    ScrollBottom,
    /// Show help
    Help,
    /// Close the current overlay
    Cancel,
    /// Quit application
    Quit,
}

/// Categories for grouping actions in help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Model selection
    Models,
    /// Code sample scrolling
    Code,
    /// Miscellaneous actions
    Other,
    /// Actions not shown in help
    Hidden,
}

impl ActionGroup {
    /// Get the display title for this group
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Models => "Models",
            Self::Code => "Code",
            Self::Other => "Other",
            Self::Hidden => "",
        }
    }
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NextModel => "Next model",
            Self::PrevModel => "Previous model",
            Self::RowDown => "Row down",
            Self::RowUp => "Row up",
            Self::SelectDefault => "Back to default model",
            Self::ScrollUp => "Scroll code up",
            Self::ScrollDown => "Scroll code down",
            Self::ScrollLeft => "Scroll code left",
            Self::ScrollRight => "Scroll code right",
            Self::ScrollTop => "Scroll to top",
            Self::ScrollBottom => "Scroll to bottom",
            Self::Help => "Show this help",
            Self::Cancel => "Close",
            Self::Quit => "Quit",
        }
    }

    /// Get the group this action belongs to
    #[must_use]
    pub const fn group(self) -> ActionGroup {
        match self {
            Self::NextModel
            | Self::PrevModel
            | Self::RowDown
            | Self::RowUp
            | Self::SelectDefault => ActionGroup::Models,
            Self::ScrollUp
            | Self::ScrollDown
            | Self::ScrollLeft
            | Self::ScrollRight
            | Self::ScrollTop
            | Self::ScrollBottom => ActionGroup::Code,
            Self::Help | Self::Quit => ActionGroup::Other,
            Self::Cancel => ActionGroup::Hidden,
        }
    }

    /// All actions in display order for help
    pub const ALL_FOR_HELP: &'static [Self] = &[
        // Models
        Self::NextModel,
        Self::PrevModel,
        Self::RowDown,
        Self::RowUp,
        Self::SelectDefault,
        // Code
        Self::ScrollUp,
        Self::ScrollDown,
        Self::ScrollLeft,
        Self::ScrollRight,
        Self::ScrollTop,
        Self::ScrollBottom,
        // Other
        Self::Help,
        Self::Quit,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("l".to_string(), Action::NextModel);
        bindings.insert("Right".to_string(), Action::NextModel);
        bindings.insert("Tab".to_string(), Action::NextModel);
        bindings.insert("h".to_string(), Action::PrevModel);
        bindings.insert("Left".to_string(), Action::PrevModel);
        bindings.insert("j".to_string(), Action::RowDown);
        bindings.insert("Down".to_string(), Action::RowDown);
        bindings.insert("k".to_string(), Action::RowUp);
        bindings.insert("Up".to_string(), Action::RowUp);
        bindings.insert("0".to_string(), Action::SelectDefault);
        bindings.insert("Ctrl+u".to_string(), Action::ScrollUp);
        bindings.insert("PageUp".to_string(), Action::ScrollUp);
        bindings.insert("Ctrl+d".to_string(), Action::ScrollDown);
        bindings.insert("PageDown".to_string(), Action::ScrollDown);
        bindings.insert("<".to_string(), Action::ScrollLeft);
        bindings.insert("Shift+Left".to_string(), Action::ScrollLeft);
        bindings.insert(">".to_string(), Action::ScrollRight);
        bindings.insert("Shift+Right".to_string(), Action::ScrollRight);
        bindings.insert("g".to_string(), Action::ScrollTop);
        bindings.insert("G".to_string(), Action::ScrollBottom);
        bindings.insert("?".to_string(), Action::Help);
        bindings.insert("Esc".to_string(), Action::Cancel);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Prefer single chars over multi-char keys
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.cmp(b),
            }
        });
        keys.join("/")
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::NextModel, "next"),
            (Action::PrevModel, "prev"),
            (Action::ScrollDown, "scroll"),
            (Action::Help, "help"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .map(|(action, label)| {
                let key = self
                    .format_keys(*action)
                    .split('/')
                    .next()
                    .unwrap_or_default()
                    .to_string();
                format!("[{key}]{label}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
