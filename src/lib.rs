//! Portfolio Library
//!
//! A single-page personal portfolio rendered as a native window: a hero
//! screen, three content sections, and timed two-phase transitions between
//! them.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
