//! Theme - Palette, Type Scale and Motion

pub mod colors;
pub mod motion;
pub mod typography;
