//! Embedded assets for Portfolio
//!
//! Uses rust-embed to bundle the fallback avatar at compile time, so the hero
//! always has an image even when the primary file is missing.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "avatar/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our own assets first, then the component library's icons
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::avatar::FALLBACK_AVATAR;

    #[test]
    fn test_fallback_avatar_is_embedded() {
        let data = Assets
            .load(FALLBACK_AVATAR)
            .expect("load")
            .expect("fallback avatar embedded");
        let text = std::str::from_utf8(&data).expect("utf-8 svg");
        assert!(text.trim_start().starts_with("<svg"));
    }

    #[test]
    fn test_empty_path_loads_nothing() {
        assert!(Assets.load("").expect("load").is_none());
    }

    #[test]
    fn test_list_includes_avatar() {
        let files = Assets.list("avatar/").expect("list");
        assert!(files.iter().any(|f| f.to_string() == FALLBACK_AVATAR));
    }
}
