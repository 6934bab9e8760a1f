// SPDX-License-Identifier: MPL-2.0
//! Storage-access interface for the selected language.
//!
//! The page only ever persists one value: the language the user last
//! picked. [`SelectionStore`] abstracts where that value lives so the
//! localizer can run against the real settings file or an in-memory stand-in.

use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::LanguageCode;
use std::path::PathBuf;

pub trait SelectionStore {
    /// Previously persisted selection, or `None` when nothing usable is
    /// stored. Unreadable or unrecognized values degrade to `None` so the
    /// startup resolution chain can continue.
    fn load(&self) -> Option<LanguageCode>;

    /// Replaces the stored selection with `code`.
    fn save(&mut self, code: LanguageCode) -> Result<()>;
}

/// Selection persisted through the settings file.
#[derive(Debug, Default)]
pub struct FileStore {
    // None means the platform default config location.
    path: Option<PathBuf>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store bound to an explicit file, used by tests.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl SelectionStore for FileStore {
    fn load(&self) -> Option<LanguageCode> {
        let config = match &self.path {
            Some(path) => config::load_from_path(path).ok()?,
            None => config::load().ok()?,
        };
        config.language.as_deref()?.parse().ok()
    }

    fn save(&mut self, code: LanguageCode) -> Result<()> {
        let config = Config {
            language: Some(code.to_string()),
        };
        match &self.path {
            Some(path) => config::save_to_path(&config, path),
            None => config::save(&config),
        }
    }
}

/// In-memory selection, for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    selected: Option<LanguageCode>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(code: LanguageCode) -> Self {
        Self {
            selected: Some(code),
        }
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> Option<LanguageCode> {
        self.selected
    }

    fn save(&mut self, code: LanguageCode) -> Result<()> {
        self.selected = Some(code);
        Ok(())
    }
}
