//! Content - What Each Section Displays
//!
//! Pure mapping from a [`Section`] to a description of its content. The view
//! layer turns these descriptions into elements; nothing here depends on GPUI.

use std::ops::Range;

use crate::app::navigation::Section;
use crate::domain::avatar::AvatarRef;

pub const OWNER_NAME: &str = "Eshan Arni";

const QUOTE: &str = "The only way to do great work is to love what you do.";
const QUOTE_ATTRIBUTION: &str = "Steve Jobs";

const ABOUT_TEXT: &str = "Hi, I'm Eshan Arni — a passionate creator who believes in learning by \
building. I love exploring ideas, crafting interactive projects, and finding beauty in simplicity.";

const ACHIEVEMENTS_TEXT: &str = "My achievements gallery showcases milestones and moments that \
reflect my growth and journey — both in code and creativity.";

/// A project shown in the Projects grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// Projects in display order
pub const PROJECTS: [ProjectCard; 2] = [
    ProjectCard {
        title: "IB Calendar",
        description: "A smart academic planner with task tracking.",
    },
    ProjectCard {
        title: "Portfolio Site",
        description: "A minimal personal website inspired by Apple design.",
    },
];

/// Hero layout for the Home section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title: &'static str,
    pub quote: &'static str,
    pub attribution: &'static str,
    pub avatar: AvatarRef,
}

/// A single paragraph of body text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock {
    pub body: &'static str,
    /// Substring of `body` rendered highlighted
    pub emphasis: Option<&'static str>,
}

impl TextBlock {
    /// Byte range of the first occurrence of the emphasis in the body
    pub fn emphasis_range(&self) -> Option<Range<usize>> {
        let emphasis = self.emphasis?;
        let at = self.body.find(emphasis)?;
        Some(at..at + emphasis.len())
    }
}

/// What to display for a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentDescription {
    Hero(HeroContent),
    TextBlock(TextBlock),
    CardGrid(Vec<ProjectCard>),
}

/// Maps a section to its content description. Implementations must be pure.
pub trait SectionRenderer {
    fn render(&self, section: Section) -> ContentDescription;
}

/// The portfolio's fixed copy
#[derive(Debug, Clone, Default)]
pub struct PortfolioRenderer {
    avatar: AvatarRef,
}

impl PortfolioRenderer {
    pub fn new(avatar: AvatarRef) -> Self {
        Self { avatar }
    }

    pub fn avatar(&self) -> &AvatarRef {
        &self.avatar
    }
}

impl SectionRenderer for PortfolioRenderer {
    fn render(&self, section: Section) -> ContentDescription {
        match section {
            Section::Home => ContentDescription::Hero(HeroContent {
                title: OWNER_NAME,
                quote: QUOTE,
                attribution: QUOTE_ATTRIBUTION,
                avatar: self.avatar.clone(),
            }),
            Section::About => ContentDescription::TextBlock(TextBlock {
                body: ABOUT_TEXT,
                emphasis: Some(OWNER_NAME),
            }),
            Section::Projects => ContentDescription::CardGrid(PROJECTS.to_vec()),
            Section::Achievements => ContentDescription::TextBlock(TextBlock {
                body: ACHIEVEMENTS_TEXT,
                emphasis: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_card_grid() {
        let renderer = PortfolioRenderer::default();
        let ContentDescription::CardGrid(cards) = renderer.render(Section::Projects) else {
            panic!("projects should render a card grid");
        };
        let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["IB Calendar", "Portfolio Site"]);
    }

    #[test]
    fn test_home_is_hero_with_configured_avatar() {
        let renderer = PortfolioRenderer::new(AvatarRef::new("/tmp/me.png"));
        match renderer.render(Section::Home) {
            ContentDescription::Hero(hero) => {
                assert_eq!(hero.title, "Eshan Arni");
                assert_eq!(hero.attribution, "Steve Jobs");
                assert_eq!(hero.avatar.primary, std::path::PathBuf::from("/tmp/me.png"));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_about_and_achievements_have_distinct_text() {
        let renderer = PortfolioRenderer::default();
        let about = renderer.render(Section::About);
        let achievements = renderer.render(Section::Achievements);
        assert!(matches!(about, ContentDescription::TextBlock(_)));
        assert!(matches!(achievements, ContentDescription::TextBlock(_)));
        assert_ne!(about, achievements);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = PortfolioRenderer::default();
        for section in Section::all() {
            assert_eq!(renderer.render(*section), renderer.render(*section));
        }
    }

    #[test]
    fn test_emphasis_range() {
        let block = TextBlock {
            body: "Hi, I'm Eshan Arni — hello",
            emphasis: Some("Eshan Arni"),
        };
        let range = block.emphasis_range().expect("emphasis present");
        assert_eq!(&block.body[range], "Eshan Arni");

        let missing = TextBlock {
            body: "just text",
            emphasis: Some("missing"),
        };
        assert_eq!(missing.emphasis_range(), None);

        let plain = TextBlock {
            body: "just text",
            emphasis: None,
        };
        assert_eq!(plain.emphasis_range(), None);
    }
}
