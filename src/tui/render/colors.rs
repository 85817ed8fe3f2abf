//! Color palette for the TUI
//!
//! Slate surfaces with a purple accent; code samples are drawn in green on
//! the darkest surface.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

// UI Chrome
pub const BACKGROUND: Color = Color::Rgb(15, 23, 42);
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const BORDER_TYPE: BorderType = BorderType::Rounded;
pub const SURFACE: Color = Color::Rgb(30, 41, 59);
pub const SURFACE_DEEP: Color = Color::Rgb(10, 15, 30);

// Accent
pub const ACCENT: Color = Color::Rgb(147, 51, 234);
pub const ACCENT_SOFT: Color = Color::Rgb(192, 132, 252);
pub const ACCENT_HIGHLIGHT: Color = Color::Rgb(253, 224, 71);
pub const TIP_BG: Color = Color::Rgb(46, 16, 101);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249);
pub const TEXT_SECONDARY: Color = Color::Rgb(216, 180, 254);
pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// Code
pub const CODE: Color = Color::Rgb(74, 222, 128);

// Modals
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
