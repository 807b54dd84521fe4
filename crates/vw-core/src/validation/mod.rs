//! Declarative field validation.
//!
//! A [`StepSchema`] is a list of [`FieldSpec`]s, each carrying tagged
//! [`FieldRule`]s. One generic evaluator runs all rules and either returns the
//! normalized input or a [`ValidationErrors`] map for inline display.

mod errors;
mod rule;
mod schema;
mod value;

pub use errors::ValidationErrors;
pub use rule::{FieldFormat, FieldRule};
pub use schema::{FieldSpec, StepSchema};
pub use value::{FieldInput, FieldValue};
