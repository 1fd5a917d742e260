//! Colors - Portfolio Theme Colors

use gpui::{rgb, Rgba};

/// Dark portfolio palette - All colors are accessed via associated functions
pub struct PortfolioColors;

impl PortfolioColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0x000000) }
    /// Card and button surface
    pub fn surface() -> Rgba { rgb(0x1c1c1e) }
    /// Surface under the pointer
    pub fn surface_hover() -> Rgba { rgb(0x2c2c2e) }

    // Text colors
    /// Headings and emphasized text
    pub fn text_primary() -> Rgba { rgb(0xf5f5f7) }
    /// Body text
    pub fn text_secondary() -> Rgba { rgb(0xa1a1a6) }
    /// Attribution and fine print
    pub fn text_muted() -> Rgba { rgb(0x6e6e73) }
    /// Text on the accent color
    pub fn text_on_accent() -> Rgba { rgb(0xffffff) }

    // Accent colors
    /// Active nav button
    pub fn accent() -> Rgba { rgb(0x0071e3) }
    /// Active nav button under the pointer
    pub fn accent_hover() -> Rgba { rgb(0x0077ed) }

    // Border colors
    /// Card, avatar ring and Back control border
    pub fn border() -> Rgba { rgb(0x2c2c2e) }
}
