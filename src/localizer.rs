// SPDX-License-Identifier: MPL-2.0
//! The Localizer ties the translation catalog, the page model, and the
//! selection store together: it rewrites a page for a language, records the
//! choice, and resolves which language to start with.

use crate::i18n::{self, LanguageCode, TranslationCatalog};
use crate::page::Page;
use crate::storage::SelectionStore;

pub struct Localizer<S: SelectionStore> {
    catalog: TranslationCatalog,
    store: S,
}

impl<S: SelectionStore> Localizer<S> {
    pub fn new(catalog: TranslationCatalog, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rewrites every keyed element of `page` for `code` and persists the
    /// selection.
    ///
    /// A key the catalog does not know leaves that element untouched; this
    /// is best effort, not a failure. A storage failure is reported on
    /// stderr and otherwise ignored — the page keeps the language it was
    /// just given.
    pub fn apply_language(&mut self, page: &mut Page, code: LanguageCode) {
        for element in page.elements_mut() {
            let Some(key) = element.key() else {
                continue;
            };
            if let Some(translated) = self.catalog.lookup(code, key) {
                element.write_slot(translated);
            }
        }

        if let Err(error) = self.store.save(code) {
            eprintln!("Failed to save language selection: {:?}", error);
        }
    }

    /// Explicit user language change. Delegates to [`Self::apply_language`];
    /// kept as a separate entry point so call sites stay decoupled from the
    /// update routine.
    pub fn switch_language(&mut self, page: &mut Page, code: LanguageCode) {
        self.apply_language(page, code);
    }

    /// Startup: resolve a language (stored selection, then platform locale,
    /// then the default), apply it, and return it.
    pub fn initialize(&mut self, page: &mut Page) -> LanguageCode {
        let stored = self.store.load();
        let locale = i18n::platform_locale();
        let resolved = i18n::resolve_startup_language(stored, locale.as_deref());
        self.apply_language(page, resolved);
        resolved
    }
}
