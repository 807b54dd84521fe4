use serde::{Deserialize, Serialize};

use crate::validation::{FieldInput, FieldValue};

/// Accumulated registration record across submitted steps.
///
/// Only validated step output is ever merged in, so the draft never holds a
/// value its step rejected. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationDraft(FieldInput);

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a step's validated output. Same-named fields are overwritten,
    /// all others are kept.
    pub fn merge(&mut self, fields: FieldInput) {
        for (name, value) in fields {
            self.0.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Text of a collected field, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &FieldInput {
        &self.0
    }

    pub fn into_fields(self) -> FieldInput {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_same_name_and_keeps_others() {
        let mut draft = RegistrationDraft::new();
        draft.merge(FieldInput::new().text("mobile", "9876543210").text("pin", "1111"));
        draft.merge(FieldInput::new().text("pin", "2222"));

        assert_eq!(draft.text("mobile"), Some("9876543210"));
        assert_eq!(draft.text("pin"), Some("2222"));
        assert_eq!(draft.len(), 2);
    }
}
