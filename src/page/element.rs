// SPDX-License-Identifier: MPL-2.0

/// What an element is in the markup, as far as localization cares.
///
/// The original page distinguishes inputs by their `type` attribute and
/// lumps everything else together; this is the same classification as a
/// closed set of variants instead of runtime tag inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    TextInput,
    PasswordInput,
    ButtonInput,
    /// Labels, headings, links, spans — anything that displays its text
    /// content directly.
    Block,
}

/// The one writable slot a translated string lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Placeholder,
    Value,
    Text,
}

impl ElementKind {
    pub const fn slot(self) -> Slot {
        match self {
            ElementKind::TextInput | ElementKind::PasswordInput => Slot::Placeholder,
            ElementKind::ButtonInput => Slot::Value,
            ElementKind::Block => Slot::Text,
        }
    }
}

/// One element of the page, with its translation key (if tagged) and its
/// current content. The slot is resolved once at construction and never
/// re-derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    key: Option<String>,
    kind: ElementKind,
    slot: Slot,
    text: String,
    placeholder: String,
    value: String,
}

impl Element {
    pub fn new(kind: ElementKind, key: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_owned),
            kind,
            slot: kind.slot(),
            text: String::new(),
            placeholder: String::new(),
            value: String::new(),
        }
    }

    pub fn text_input(key: &str) -> Self {
        Self::new(ElementKind::TextInput, Some(key))
    }

    pub fn password_input(key: &str) -> Self {
        Self::new(ElementKind::PasswordInput, Some(key))
    }

    pub fn button_input(key: &str) -> Self {
        Self::new(ElementKind::ButtonInput, Some(key))
    }

    pub fn block(key: &str) -> Self {
        Self::new(ElementKind::Block, Some(key))
    }

    /// An element without a translation key; the localizer never touches it.
    pub fn untagged(kind: ElementKind) -> Self {
        Self::new(kind, None)
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Content of the element's resolved slot.
    pub fn slot_content(&self) -> &str {
        match self.slot {
            Slot::Placeholder => &self.placeholder,
            Slot::Value => &self.value,
            Slot::Text => &self.text,
        }
    }

    pub(crate) fn write_slot(&mut self, content: &str) {
        let target = match self.slot {
            Slot::Placeholder => &mut self.placeholder,
            Slot::Value => &mut self.value,
            Slot::Text => &mut self.text,
        };
        target.clear();
        target.push_str(content);
    }
}
