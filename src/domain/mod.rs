//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe what the portfolio shows.

pub mod avatar;
pub mod content;
