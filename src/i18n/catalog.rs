// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use crate::i18n::LanguageCode;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// Immutable translation tables, one flat key -> string map per language.
///
/// Built once at startup from the embedded TOML files and never mutated
/// afterwards. Lookups that miss (unknown key) return `None`; the caller
/// decides what a miss means — the page localizer treats it as a silent
/// per-element no-op.
pub struct TranslationCatalog {
    tables: HashMap<LanguageCode, HashMap<String, String>>,
}

impl TranslationCatalog {
    /// Parses every embedded `<code>.toml` locale file into a table.
    ///
    /// Files whose stem is not a supported language code are skipped;
    /// a file that fails to parse is an error, since the assets are
    /// compiled into the binary and cannot be fixed at runtime.
    pub fn load() -> Result<Self> {
        let mut tables = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(stem) = filename.strip_suffix(".toml") else {
                continue;
            };
            let Ok(code) = stem.parse::<LanguageCode>() else {
                continue;
            };
            let content = Asset::get(filename)
                .ok_or_else(|| Error::Catalog(format!("missing embedded asset: {}", filename)))?;
            let text = String::from_utf8_lossy(content.data.as_ref());
            let table: HashMap<String, String> = toml::from_str(&text)
                .map_err(|e| Error::Catalog(format!("{}: {}", filename, e)))?;
            tables.insert(code, table);
        }

        Ok(Self { tables })
    }

    /// Returns the display string for `(code, key)`, or `None` when either
    /// the language or the key is absent.
    ///
    /// Strings may contain the literal `{countdown}` token; it is returned
    /// verbatim, substitution happens at render time.
    pub fn lookup(&self, code: LanguageCode, key: &str) -> Option<&str> {
        self.tables.get(&code)?.get(key).map(String::as_str)
    }

    /// Languages that actually have a table loaded.
    pub fn languages(&self) -> Vec<LanguageCode> {
        LanguageCode::ALL
            .into_iter()
            .filter(|code| self.tables.contains_key(code))
            .collect()
    }

    /// All translation keys defined for `code`, unordered.
    pub fn keys(&self, code: LanguageCode) -> Vec<&str> {
        self.tables
            .get(&code)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
