//! Server-declared credential prompts and the per-attempt credential map.
//!
//! The authentication service decides which fields a login needs; the
//! catalog is therefore keyed by name at runtime rather than fixed in code.

use std::collections::BTreeMap;
use std::fmt;

pub const USERNAME_PROMPT: &str = "username";
pub const PASSWORD_PROMPT: &str = "password";
pub const PASSCODE_PROMPT: &str = "passcode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates supported `PromptKind` values.
pub enum PromptKind {
    Text,
    Secret,
}

impl PromptKind {
    /// Maps the service's wire kind; anything other than `password` is plain text.
    pub fn from_wire(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("password") {
            Self::Secret
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub name: String,
    pub kind: PromptKind,
    pub display_label: String,
}

impl PromptSpec {
    pub fn new(name: impl Into<String>, kind: PromptKind, display_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            display_label: display_label.into(),
        }
    }
}

/// Name-keyed prompt set; iteration order is by prompt name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptCatalog {
    prompts: BTreeMap<String, PromptSpec>,
}

impl PromptCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, prompt: PromptSpec) {
        self.prompts.insert(prompt.name.clone(), prompt);
    }

    pub fn with(mut self, prompt: PromptSpec) -> Self {
        self.insert(prompt);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PromptSpec> {
        self.prompts.get(name)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PromptSpec> {
        self.prompts.values()
    }
}

impl FromIterator<PromptSpec> for PromptCatalog {
    fn from_iter<T: IntoIterator<Item = PromptSpec>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for prompt in iter {
            catalog.insert(prompt);
        }
        catalog
    }
}

/// Values collected for one authentication attempt, keyed by prompt name.
///
/// Never persisted. `Debug` lists the field names only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    values: BTreeMap<String, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}
