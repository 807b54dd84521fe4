use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single submitted form value.
///
/// Text inputs, selects and date pickers all submit strings; checkboxes
/// submit flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// The string, or `None` for a checkbox flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            FieldValue::Flag(_) => None,
        }
    }

    /// Only a ticked checkbox is true; the text `"true"` is not.
    pub fn is_true(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Flat mapping from field name to submitted value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldInput(BTreeMap<String, FieldValue>);

impl FieldInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper for text values.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Builder helper for checkbox values.
    pub fn flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.0.insert(name.into(), FieldValue::Flag(value));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Text of a field. Absent fields read as the empty string, flags as
    /// `None`.
    pub fn text_of(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(value) => value.as_text(),
            None => Some(""),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, FieldValue> {
        self.0
    }
}

impl IntoIterator for FieldInput {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, FieldValue)> for FieldInput {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
