//! State - Navigation and Configuration
//!
//! State is owned by the controller and changes in one direction:
//!
//! ```text
//! UI Action → Controller → NavigationMachine → (deferred step) → notify → UI Refresh
//! ```

mod config_state;
mod navigation_state;

pub use config_state::*;
pub use navigation_state::*;
