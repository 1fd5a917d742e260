//! Avatar - Image Reference and Load-Failure State

use std::path::PathBuf;

/// Embedded asset path of the fallback avatar
pub const FALLBACK_AVATAR: &str = "avatar/fallback-avatar.svg";

/// Default location of the primary avatar image
pub const DEFAULT_AVATAR_PATH: &str = "assets/eshan.jpg";

/// Primary and fallback references for the hero avatar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRef {
    /// Image on disk, tried first
    pub primary: PathBuf,
    /// Embedded asset used once the primary failed
    pub fallback: &'static str,
}

impl AvatarRef {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback: FALLBACK_AVATAR,
        }
    }
}

impl Default for AvatarRef {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_PATH)
    }
}

/// The image the view should display right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    Primary(PathBuf),
    Fallback(&'static str),
}

/// Load-failure flag for the avatar. Flips false -> true at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvatarState {
    load_failed: bool,
}

impl AvatarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Record a load failure. Returns `true` only for the first report.
    pub fn mark_failed(&mut self) -> bool {
        let changed = !self.load_failed;
        self.load_failed = true;
        changed
    }

    /// Resolve which reference to display
    pub fn source(&self, avatar: &AvatarRef) -> AvatarSource {
        if self.load_failed {
            AvatarSource::Fallback(avatar.fallback)
        } else {
            AvatarSource::Primary(avatar.primary.clone())
        }
    }
}
