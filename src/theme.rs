//! Default palette and color helpers for the widgets
//!
//! Widgets take explicit colors with these as their defaults; nothing here
//! depends on application state.

use iced::{Color, Theme, color};

/// Progress track default (the primitive scales its opacity down)
pub const RING_TRACK: Color = color!(0x8e8e93);

/// Progress sweep default
pub const RING_SWEEP: Color = color!(0x007aff);

/// Percentage label default
pub const PERCENT_TEXT: Color = Color::BLACK;

/// Unselected row background
pub const ROW_BACKGROUND: Color = Color::from_rgb(0.080, 0.083, 0.083);

/// Selected row background
pub const ROW_SELECTED_BACKGROUND: Color = Color::from_rgb(0.403, 0.404, 0.463);

/// Row border when unselected
pub const ROW_BORDER: Color = color!(0x8e8e93);

/// Row border when selected
pub const ROW_BORDER_SELECTED: Color = Color::WHITE;

/// Row label default
pub const ROW_TEXT: Color = Color::WHITE;

/// Linear interpolation between two colors, channel-wise
pub fn lerp(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

/// Primary text color for the surrounding theme
pub fn text_primary(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        color!(0xffffff)
    } else {
        color!(0x1a1a1a)
    }
}

/// Secondary text color for the surrounding theme
pub fn text_secondary(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        color!(0xb3b3b3)
    } else {
        color!(0x555555)
    }
}
