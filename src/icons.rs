//! Embedded SVG icon sources
//!
//! Icons use `currentColor` so the use site can tint them through
//! `svg::Style { color }`.

/// Circled checkmark - the default selected-row indicator
pub const CHECK_CIRCLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/></svg>"#;
