// SPDX-License-Identifier: MPL-2.0
//! Canonical element layouts of the login and signup pages.
//!
//! These mirror the elements the real markup tags for translation: labels
//! and headings as blocks, text/password inputs with translated
//! placeholders, and button inputs with translated values. The email field
//! itself is untagged — its label carries the key.

use super::{Element, ElementKind, Page};

/// The login page: heading, email/password fields, the three login
/// buttons, and the registration / forgot-password links.
pub fn login_form() -> Page {
    [
        Element::block("title"),
        Element::block("email-label"),
        Element::untagged(ElementKind::TextInput),
        Element::block("password-label"),
        Element::password_input("password-placeholder"),
        Element::button_input("login-button"),
        Element::button_input("login-button-google"),
        Element::button_input("login-button-facebook"),
        Element::block("registration"),
        Element::block("forgot-password-button"),
    ]
    .into_iter()
    .collect()
}

/// The signup page: heading, credential fields with confirmation, the
/// email verification code flow, and the back link.
pub fn signup_form() -> Page {
    [
        Element::block("signup-title"),
        Element::block("email-label"),
        Element::untagged(ElementKind::TextInput),
        Element::block("password-label"),
        Element::password_input("password-placeholder"),
        Element::block("confirm-password-label"),
        Element::password_input("confirm-password-placeholder"),
        Element::block("password-message"),
        Element::button_input("send-code-email"),
        Element::text_input("verification-code-placeholder"),
        Element::button_input("confirm-button"),
        Element::block("send-again-countdown"),
        Element::button_input("signup-button"),
        Element::block("back-link-text"),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Slot;

    #[test]
    fn login_form_buttons_translate_into_value_slot() {
        let page = login_form();
        for key in ["login-button", "login-button-google", "login-button-facebook"] {
            let el = page.find(key).expect("button present");
            assert_eq!(el.slot(), Slot::Value);
        }
    }

    #[test]
    fn signup_form_password_fields_translate_into_placeholder_slot() {
        let page = signup_form();
        for key in ["password-placeholder", "confirm-password-placeholder"] {
            let el = page.find(key).expect("password field present");
            assert_eq!(el.slot(), Slot::Placeholder);
        }
    }

    #[test]
    fn forms_contain_exactly_one_untagged_element_each() {
        for page in [login_form(), signup_form()] {
            let untagged = page.elements().iter().filter(|el| el.key().is_none()).count();
            assert_eq!(untagged, 1);
        }
    }
}
