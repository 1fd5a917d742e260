//! UI Constants
//!
//! Centralized timing and layout constants.

/// Delay between hiding the nav bar and revealing the selected section (D1)
pub const NAV_EXIT_DELAY_MS: u64 = 380;

/// Delay between leaving a section and bringing the nav bar back (D2)
pub const CONTENT_EXIT_DELAY_MS: u64 = 420;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Avatar frame diameter in pixels
pub const AVATAR_SIZE: f32 = 216.0;

/// Text column max width for About / Achievements
pub const TEXT_BLOCK_MAX_WIDTH: f32 = 768.0;

/// Project card width in pixels
pub const PROJECT_CARD_WIDTH: f32 = 340.0;
