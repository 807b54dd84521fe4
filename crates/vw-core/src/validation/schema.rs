use std::collections::HashSet;

use tracing::debug;

use crate::error::ConfigurationError;

use super::{FieldInput, FieldRule, FieldValue, ValidationErrors};

/// Declaration of one field: its name, constraints and optionality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub rules: Vec<FieldRule>,
    /// Optional fields skip their rules while empty and stay absent from the
    /// output when they were not submitted.
    pub optional: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            optional: false,
        }
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Validator for one form: an ordered set of field declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl StepSchema {
    /// Build a schema, rejecting duplicate fields and equality rules that
    /// point at undeclared fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigurationError::DuplicateField(field.name.clone()));
            }
        }
        for field in &fields {
            for rule in &field.rules {
                if let FieldRule::EqualsField { other, .. } = rule {
                    if !seen.contains(other.as_str()) {
                        return Err(ConfigurationError::UnknownEqualityTarget {
                            field: field.name.clone(),
                            other: other.clone(),
                        });
                    }
                }
            }
        }
        Ok(Self {
            name: name.into(),
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate `input` against every declared field.
    ///
    /// On success returns the normalized input: undeclared keys are dropped,
    /// absent required fields read as empty text, absent optional fields stay
    /// absent. On failure returns every violated rule of every field.
    pub fn validate(&self, input: &FieldInput) -> Result<FieldInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut output = FieldInput::new();

        for field in &self.fields {
            let submitted = input.get(&field.name);
            let empty = input.text_of(&field.name) == Some("");

            if field.optional && empty {
                if let Some(value) = submitted {
                    output.insert(field.name.clone(), value.clone());
                }
                continue;
            }

            for rule in &field.rules {
                if let Some(message) = rule.check(&field.name, input) {
                    errors.push(field.name.clone(), message);
                }
            }

            let value = submitted
                .cloned()
                .unwrap_or_else(|| FieldValue::Text(String::new()));
            output.insert(field.name.clone(), value);
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            debug!(schema = %self.name, invalid_fields = errors.len(), "form validation failed");
            Err(errors)
        }
    }
}
