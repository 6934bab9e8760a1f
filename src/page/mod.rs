// SPDX-License-Identifier: MPL-2.0
//! The page model the localizer operates on.
//!
//! A [`Page`] is an ordered list of [`Element`]s. Elements carrying a
//! translation key are the localization consumers; untagged elements are
//! left alone. Each element knows, from the moment it is built, which of
//! its slots (placeholder, value, or text content) a translation lands in.

pub mod element;
pub mod forms;

pub use element::{Element, ElementKind, Slot};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    /// First element tagged with `key`, if any.
    pub fn find(&self, key: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.key() == Some(key))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<Element> for Page {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
