//! Portfolio - Hero, Sections and Navigation
//!
//! The controller owns navigation state and timers; the page draws it.

pub mod controller;
pub mod page;
