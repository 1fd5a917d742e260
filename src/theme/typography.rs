//! Typography - Font Family, Sizes and Weights

/// Typography constants
pub struct Typography;

impl Typography {
    /// Preferred UI font; GPUI falls back to the system font when missing
    pub const FONT_FAMILY: &'static str = "Inter";

    // Font sizes
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_HERO: f32 = 72.0;

    // Line heights
    pub const LEADING_RELAXED: f32 = 1.625;
}
