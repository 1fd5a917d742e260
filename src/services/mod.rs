//! Service Layer
//!
//! External collaborators of the view. Currently only image loading, which
//! runs on the background executor and reports back to the controller.

mod image_loader;

pub use image_loader::*;
