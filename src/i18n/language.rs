// SPDX-License-Identifier: MPL-2.0
use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A language the login page can be displayed in.
///
/// The set is closed; adding a language means adding a variant here and a
/// matching table under `assets/locales/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    Ru,
    En,
    Zh,
    Uk,
}

/// Language applied when neither a stored selection nor the platform locale
/// matches anything supported.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::Ru;

impl LanguageCode {
    /// All supported languages, in detection priority order.
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::Ru,
        LanguageCode::En,
        LanguageCode::Zh,
        LanguageCode::Uk,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageCode::Ru => "ru",
            LanguageCode::En => "en",
            LanguageCode::Zh => "zh",
            LanguageCode::Uk => "uk",
        }
    }

    /// Matches a platform locale string such as `"en-US"` against the
    /// supported set, by language subtag. Strings `unic-langid` cannot
    /// parse fall back to a plain prefix match.
    pub fn from_locale(locale: &str) -> Option<Self> {
        if let Ok(id) = locale.parse::<LanguageIdentifier>() {
            for code in Self::ALL {
                if id.language.as_str() == code.as_str() {
                    return Some(code);
                }
            }
            return None;
        }
        Self::ALL.into_iter().find(|code| locale.starts_with(code.as_str()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| Error::Config(format!("unknown language code: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_every_supported_code() {
        for code in LanguageCode::ALL {
            assert_eq!(code.as_str().parse::<LanguageCode>().unwrap(), code);
        }
    }

    #[test]
    fn from_str_rejects_unknown_code() {
        assert!("fr".parse::<LanguageCode>().is_err());
        assert!("".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn from_locale_matches_by_language_subtag() {
        assert_eq!(LanguageCode::from_locale("en-US"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_locale("uk-UA"), Some(LanguageCode::Uk));
        assert_eq!(LanguageCode::from_locale("zh-Hans-CN"), Some(LanguageCode::Zh));
        assert_eq!(LanguageCode::from_locale("ru"), Some(LanguageCode::Ru));
    }

    #[test]
    fn from_locale_rejects_unsupported_language() {
        assert_eq!(LanguageCode::from_locale("fr-FR"), None);
        assert_eq!(LanguageCode::from_locale("de"), None);
    }

    #[test]
    fn from_locale_falls_back_to_prefix_for_unparseable_strings() {
        // Underscore separators are not valid BCP 47 but do occur in the wild.
        assert_eq!(LanguageCode::from_locale("ru_RU.UTF-8"), Some(LanguageCode::Ru));
    }
}
