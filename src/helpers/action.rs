//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and maps them onto navigation requests.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::app::navigation::Section;

/// Key context of the portfolio root view
pub const PORTFOLIO_CONTEXT: &str = "Portfolio";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Go to About Me
    About,
    /// Go to Projects
    Projects,
    /// Go to Achievements
    Achievements,
    /// Go to the hero screen
    Home,
    /// Leave the current section
    Back,
}

/// What the controller should do for an action
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavRequest {
    To(Section),
    Back,
}

impl NavAction {
    /// Resolve the action against the section currently shown.
    ///
    /// Home from a section is a Back: navigating "to" Home would leave the nav
    /// bar hidden, since only the Back path restores it.
    pub fn request(self, active: Section) -> Option<NavRequest> {
        let target = match self {
            NavAction::About => Section::About,
            NavAction::Projects => Section::Projects,
            NavAction::Achievements => Section::Achievements,
            NavAction::Home | NavAction::Back => {
                return (!active.is_home()).then_some(NavRequest::Back);
            }
        };
        Some(NavRequest::To(target))
    }
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    let context = Some(PORTFOLIO_CONTEXT);
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Navigation
        KeyBinding::new("1", NavAction::About, context),
        KeyBinding::new("2", NavAction::Projects, context),
        KeyBinding::new("3", NavAction::Achievements, context),
        KeyBinding::new("h", NavAction::Home, context),
        KeyBinding::new("escape", NavAction::Back, context),
        KeyBinding::new("backspace", NavAction::Back, context),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_actions() {
        assert_eq!(
            NavAction::Projects.request(Section::Home),
            Some(NavRequest::To(Section::Projects))
        );
        assert_eq!(
            NavAction::About.request(Section::Achievements),
            Some(NavRequest::To(Section::About))
        );
    }

    #[test]
    fn test_home_and_back_map_to_back() {
        assert_eq!(NavAction::Home.request(Section::About), Some(NavRequest::Back));
        assert_eq!(NavAction::Back.request(Section::Projects), Some(NavRequest::Back));
    }

    #[test]
    fn test_home_and_back_on_home_do_nothing() {
        assert_eq!(NavAction::Home.request(Section::Home), None);
        assert_eq!(NavAction::Back.request(Section::Home), None);
    }
}
