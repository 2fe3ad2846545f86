//! Color theme constants for the folio UI.
//!
//! Dark palette with the red accent of the portfolio site.

use ratatui::style::Color;

/// Accent color: borders of the slideshow, active dot, selected rows
pub const COLOR_ACCENT: Color = Color::Rgb(220, 38, 38); // red #dc2626

/// Header and title text
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Rgb(229, 229, 229);

/// Secondary text (image URLs, hints)
pub const COLOR_DIM: Color = Color::Rgb(163, 163, 163); // #a3a3a3

/// Inactive dots and borders
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Background carousel text, under the dark overlay
pub const COLOR_BACKDROP: Color = Color::Rgb(64, 64, 64);

/// Panel background
pub const COLOR_PANEL_BG: Color = Color::Rgb(26, 26, 26); // #1a1a1a

/// Admin badge
pub const COLOR_ADMIN: Color = Color::Rgb(250, 204, 21);

/// Errors in the status line
pub const COLOR_ERROR: Color = Color::LightRed;
