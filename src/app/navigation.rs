//! Navigation - Sections of the Portfolio
//!
//! Defines the fixed set of sections the view can show and the order of
//! the buttons in the nav bar.

/// Navigable content views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Hero screen with name, quote and avatar
    #[default]
    Home,
    /// About Me text block
    About,
    /// Project card grid
    Projects,
    /// Achievements text block
    Achievements,
}

impl Section {
    /// Get the translation key for the nav button label
    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::About => "nav.about",
            Section::Projects => "nav.projects",
            Section::Achievements => "nav.achievements",
        }
    }

    /// Stable element id used for keyed mounting and animations
    pub fn element_key(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
        }
    }

    /// Buttons shown in the nav bar, in display order
    pub fn nav_order() -> &'static [Section] {
        &[
            Section::About,
            Section::Projects,
            Section::Achievements,
            Section::Home,
        ]
    }

    /// All sections
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Projects,
            Section::Achievements,
        ]
    }

    pub fn is_home(&self) -> bool {
        *self == Section::Home
    }
}
