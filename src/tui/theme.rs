//! Color constants and styles shared by the TUI renderers

use ratatui::prelude::*;

pub const TITLE_COLOR: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const LABEL_COLOR: Color = Color::DarkGray;

pub const FIELD_FOCUSED: Style = Style::new().add_modifier(Modifier::REVERSED);

// Results table: dark header with light text, shaded totals row,
// mirroring the exported PDF's styling.
pub const TABLE_HEADER_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Indexed(238))
    .add_modifier(Modifier::BOLD);
pub const TOTAL_ROW_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Indexed(230))
    .add_modifier(Modifier::BOLD);
pub const ROW_ALT_BG: Color = Color::Indexed(235);

pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;

/// Traffic-light color for a percentage: high marks are good.
pub fn percentage_color(percentage: f64) -> Color {
    if percentage >= 75.0 {
        Color::Green
    } else if percentage >= 40.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
