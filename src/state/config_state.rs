//! ConfigState - Portfolio Configuration
//!
//! Read-only settings loaded from `portfolio.toml` in the platform config
//! directory. A missing or empty file yields the defaults.

use std::path::PathBuf;
use std::time::Duration;

use locale_config::Locale;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{
    CONTENT_EXIT_DELAY_MS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, NAV_EXIT_DELAY_MS,
};
use crate::domain::avatar::{AvatarRef, DEFAULT_AVATAR_PATH};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use crate::i18n::LOCALES;
use crate::state::TransitionTiming;
use crate::theme::motion::NAV_CONTAINER;

const CONFIG_FILE_NAME: &str = "portfolio.toml";

/// Avatar settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Primary avatar image on disk
    pub path: PathBuf,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_AVATAR_PATH),
        }
    }
}

/// Deferred-phase delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub nav_exit_ms: u64,
    pub content_exit_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            nav_exit_ms: NAV_EXIT_DELAY_MS,
            content_exit_ms: CONTENT_EXIT_DELAY_MS,
        }
    }
}

/// Initial window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    locale: Option<String>,
    pub avatar: AvatarConfig,
    pub timing: TimingConfig,
    pub window: WindowConfig,
}

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

impl PortfolioConfig {
    /// Load configuration from the config directory
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");

        if !path.exists() {
            return Ok(Self::default().with_system_locale());
        }

        let value = std::fs::read_to_string(&path)?;
        let config = Self::parse(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(config.with_system_locale())
    }

    /// Parse and validate TOML text
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(value)?;

        if let Some(locale) = config.locale.as_deref()
            && !locale.is_empty()
            && !LOCALES.contains(&locale)
        {
            return Err(Error::Invalid {
                message: format!("unsupported locale \"{locale}\""),
            });
        }
        // The nav bar must be gone before the section is revealed
        let nav_exit_floor = NAV_CONTAINER.exit_duration.as_millis() as u64;
        if config.timing.nav_exit_ms < nav_exit_floor {
            return Err(Error::Invalid {
                message: format!("timing.nav_exit_ms must be at least {nav_exit_floor}"),
            });
        }
        if config.timing.content_exit_ms == 0 {
            return Err(Error::Invalid {
                message: "timing.content_exit_ms must be positive".to_string(),
            });
        }
        if config.window.width <= 0.0 || config.window.height <= 0.0 {
            return Err(Error::Invalid {
                message: "window size must be positive".to_string(),
            });
        }

        Ok(config)
    }

    /// Fill in the locale from the OS when the file left it unset
    pub fn with_system_locale(mut self) -> Self {
        if self.locale.as_ref().is_none_or(|l| l.is_empty())
            && let Some(lang) = supported_language(&Locale::current().to_string())
        {
            self.locale = Some(lang.to_string());
        }
        self
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some(locale) if !locale.is_empty() => locale,
            _ => "en",
        }
    }

    pub fn avatar_ref(&self) -> AvatarRef {
        AvatarRef::new(self.avatar.path.clone())
    }

    pub fn transition_timing(&self) -> TransitionTiming {
        TransitionTiming {
            nav_exit: Duration::from_millis(self.timing.nav_exit_ms),
            content_exit: Duration::from_millis(self.timing.content_exit_ms),
        }
    }
}

/// Language part of an OS locale tag ("zh", "zh-CN", "en_US"), if we ship it
fn supported_language(tag: &str) -> Option<&str> {
    let lang = tag.split([',', '-', '_', '.']).next()?.trim();
    LOCALES.contains(&lang).then_some(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = PortfolioConfig::parse("  \n").expect("parse");
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.locale(), "en");
        assert_eq!(config.transition_timing(), TransitionTiming::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = PortfolioConfig::parse(
            r#"
            locale = "zh"

            [timing]
            nav_exit_ms = 500
            "#,
        )
        .expect("parse");

        assert_eq!(config.locale(), "zh");
        assert_eq!(config.timing.nav_exit_ms, 500);
        assert_eq!(config.timing.content_exit_ms, CONTENT_EXIT_DELAY_MS);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(
            config.avatar_ref().primary,
            PathBuf::from(DEFAULT_AVATAR_PATH)
        );
    }

    #[test]
    fn test_avatar_path() {
        let config = PortfolioConfig::parse(
            r#"
            [avatar]
            path = "/home/me/avatar.png"
            "#,
        )
        .expect("parse");
        assert_eq!(
            config.avatar_ref().primary,
            PathBuf::from("/home/me/avatar.png")
        );
    }

    #[test]
    fn test_rejects_unknown_locale() {
        let err = PortfolioConfig::parse(r#"locale = "fr""#).expect_err("should fail");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn test_rejects_bad_window() {
        let err = PortfolioConfig::parse(
            r#"
            [window]
            width = 0.0
            "#,
        )
        .expect_err("should fail");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn test_rejects_nav_exit_shorter_than_animation() {
        let err = PortfolioConfig::parse(
            r#"
            [timing]
            nav_exit_ms = 0
            "#,
        )
        .expect_err("should fail");
        assert!(matches!(err, Error::Invalid { .. }));

        let err = PortfolioConfig::parse(
            r#"
            [timing]
            nav_exit_ms = 349
            "#,
        )
        .expect_err("should fail");
        assert!(matches!(err, Error::Invalid { .. }));

        let config = PortfolioConfig::parse(
            r#"
            [timing]
            nav_exit_ms = 350
            "#,
        )
        .expect("parse");
        assert_eq!(config.timing.nav_exit_ms, 350);
    }

    #[test]
    fn test_rejects_zero_content_exit() {
        let err = PortfolioConfig::parse(
            r#"
            [timing]
            content_exit_ms = 0
            "#,
        )
        .expect_err("should fail");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn test_supported_language_from_os_tag() {
        assert_eq!(supported_language("zh"), Some("zh"));
        assert_eq!(supported_language("zh-CN"), Some("zh"));
        assert_eq!(supported_language("en_US.UTF-8"), Some("en"));
        assert_eq!(supported_language("en-US,fr-FR"), Some("en"));
        assert_eq!(supported_language("fr-FR"), None);
        assert_eq!(supported_language(""), None);
    }

    #[test]
    fn test_malformed_toml() {
        let err = PortfolioConfig::parse("locale = ").expect_err("should fail");
        assert!(matches!(err, Error::TomlDe { .. }));
    }
}
