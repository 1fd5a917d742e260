//! Application Layer
//!
//! Contains app initialization, window management, sections, and the workspace.

pub mod application;
pub mod navigation;
pub mod workspace;
