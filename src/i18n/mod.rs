//! i18n - Internationalization Helpers
//!
//! Translations live in `locales/app.yml` and are compiled in by `rust-i18n`.
//! Only UI chrome (button labels, footer) is translated; portfolio copy is not.

use gpui::SharedString;
use rust_i18n::t;
use tracing::info;

/// Supported locales
pub const LOCALES: &[&str] = &["en", "zh"];

/// Select the process-wide locale
pub fn init_locale(locale: &str) {
    let locale = if LOCALES.contains(&locale) { locale } else { "en" };
    rust_i18n::set_locale(locale);
    info!(locale, "Locale selected");
}

/// Translate a key in an explicit locale
pub fn tr(locale: &str, key: &str) -> SharedString {
    t!(key, locale = locale).to_string().into()
}

/// Translate a key in the process-wide locale
pub fn tr_current(key: &str) -> SharedString {
    let locale = rust_i18n::locale();
    tr(&locale, key)
}
