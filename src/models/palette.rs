//! Display colors for category series
//!
//! Presentation layers color category charts by position, so the palette is
//! indexed the same way as the category lists and wraps around.

/// Fixed palette of hex colors for category series
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#4CAF50", "#F44336", "#2196F3", "#FF9800", "#9C27B0", "#00BCD4", "#FFC107", "#795548",
    "#607D8B", "#E91E63",
];

/// Color for the category at `index`, cycling through the palette
pub fn color_for(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}
