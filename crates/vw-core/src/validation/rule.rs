use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldInput, FieldValue};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Shape predicates a text value can be checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFormat {
    /// `local@domain.tld`; the local part may not start with a dot or
    /// contain consecutive dots.
    Email,
    /// ASCII digits only, exactly `len` of them.
    Digits { len: usize },
}

impl FieldFormat {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => {
                !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
            }
            FieldFormat::Digits { len } => {
                value.chars().count() == *len && value.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

/// One declarative constraint on a field.
///
/// Every rule carries the message shown next to the field when it fails.
/// Lengths count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    Required { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    Pattern { format: FieldFormat, message: String },
    /// Byte-for-byte equality with another field of the same schema.
    EqualsField { other: String, message: String },
    /// Checkbox that must be ticked.
    MustBeTrue { message: String },
}

impl FieldRule {
    pub fn required(message: impl Into<String>) -> Self {
        FieldRule::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        FieldRule::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        FieldRule::MaxLength {
            max,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        FieldRule::Pattern {
            format: FieldFormat::Email,
            message: message.into(),
        }
    }

    pub fn digits(len: usize, message: impl Into<String>) -> Self {
        FieldRule::Pattern {
            format: FieldFormat::Digits { len },
            message: message.into(),
        }
    }

    pub fn equals_field(other: impl Into<String>, message: impl Into<String>) -> Self {
        FieldRule::EqualsField {
            other: other.into(),
            message: message.into(),
        }
    }

    pub fn must_be_true(message: impl Into<String>) -> Self {
        FieldRule::MustBeTrue {
            message: message.into(),
        }
    }

    /// Evaluate the rule for `field` against the whole input.
    ///
    /// Returns the violation message, or `None` when the rule holds. Text
    /// rules fail on a checkbox flag; `MustBeTrue` fails on any text.
    pub fn check(&self, field: &str, input: &FieldInput) -> Option<&str> {
        let holds = match (self, input.text_of(field)) {
            (FieldRule::MustBeTrue { .. }, _) => input.get(field).is_some_and(FieldValue::is_true),
            (_, None) => false,
            (FieldRule::Required { .. }, Some(value)) => !value.is_empty(),
            (FieldRule::MinLength { min, .. }, Some(value)) => value.chars().count() >= *min,
            (FieldRule::MaxLength { max, .. }, Some(value)) => value.chars().count() <= *max,
            (FieldRule::Pattern { format, .. }, Some(value)) => format.matches(value),
            (FieldRule::EqualsField { other, .. }, Some(value)) => {
                input.text_of(other).is_some_and(|o| o.as_bytes() == value.as_bytes())
            }
        };
        if holds {
            None
        } else {
            Some(self.message())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FieldRule::Required { message }
            | FieldRule::MinLength { message, .. }
            | FieldRule::MaxLength { message, .. }
            | FieldRule::Pattern { message, .. }
            | FieldRule::EqualsField { message, .. }
            | FieldRule::MustBeTrue { message } => message,
        }
    }
}
