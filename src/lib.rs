// SPDX-License-Identifier: MPL-2.0
//! `login-localizer` is the client-side internationalization layer of a
//! login/registration page.
//!
//! It holds the translation tables for the supported languages, rewrites a
//! page model for a selected language, persists the selection, and picks a
//! default language at startup from the stored preference or the platform
//! locale.

#![doc(html_root_url = "https://docs.rs/login-localizer/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod localizer;
pub mod page;
pub mod storage;
