use serde::{Deserialize, Serialize};

use crate::validation::FieldInput;

/// Which form produced a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Registration,
    SignIn,
    Contact,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Registration => "registration",
            SubmissionKind::SignIn => "sign_in",
            SubmissionKind::Contact => "contact",
        }
    }
}

/// Validated form data handed to the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub kind: SubmissionKind,
    pub fields: FieldInput,
    pub submitted_at_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_snake_case_kind_and_flat_fields() {
        let submission = Submission {
            kind: SubmissionKind::SignIn,
            fields: FieldInput::new().text("mobile", "9876543210").flag("remember", true),
            submitted_at_ms: 7,
        };

        let value = serde_json::to_value(&submission).unwrap();

        assert_eq!(value["kind"], SubmissionKind::SignIn.as_str());
        assert_eq!(value["fields"]["mobile"], "9876543210");
        assert_eq!(value["fields"]["remember"], true);
        assert_eq!(value["submitted_at_ms"], 7);
    }
}
