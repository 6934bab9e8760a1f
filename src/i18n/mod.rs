// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the login page.
//!
//! This module holds the supported language set, the embedded translation
//! catalog, and the startup language resolution chain.
//!
//! # Features
//!
//! - Automatic language detection from stored selection or system locale
//! - Embedded TOML translation tables, loaded once at startup
//! - Runtime language switching
//! - Fallback to the default language when nothing matches

pub mod catalog;
pub mod language;

pub use catalog::TranslationCatalog;
pub use language::{LanguageCode, DEFAULT_LANGUAGE};

/// Resolves the language to apply at startup. First match wins: the stored
/// selection, then the platform locale matched against the supported set,
/// then [`DEFAULT_LANGUAGE`].
///
/// Pure on its inputs so tests can drive it without touching the real
/// system locale.
pub fn resolve_startup_language(
    stored: Option<LanguageCode>,
    platform_locale: Option<&str>,
) -> LanguageCode {
    if let Some(code) = stored {
        return code;
    }
    if let Some(locale) = platform_locale {
        if let Some(code) = LanguageCode::from_locale(locale) {
            return code;
        }
    }
    DEFAULT_LANGUAGE
}

/// The locale reported by the host platform, if any.
pub fn platform_locale() -> Option<String> {
    sys_locale::get_locale()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_selection_wins_over_platform_locale() {
        let resolved = resolve_startup_language(Some(LanguageCode::Zh), Some("en-US"));
        assert_eq!(resolved, LanguageCode::Zh);
    }

    #[test]
    fn platform_locale_used_when_nothing_stored() {
        let resolved = resolve_startup_language(None, Some("en-US"));
        assert_eq!(resolved, LanguageCode::En);
    }

    #[test]
    fn unsupported_platform_locale_falls_back_to_default() {
        let resolved = resolve_startup_language(None, Some("fr-FR"));
        assert_eq!(resolved, LanguageCode::Ru);
    }

    #[test]
    fn missing_platform_locale_falls_back_to_default() {
        let resolved = resolve_startup_language(None, None);
        assert_eq!(resolved, LanguageCode::Ru);
    }
}
