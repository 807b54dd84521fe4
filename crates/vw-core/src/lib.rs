//! # vw-core
//!
//! Core domain models and state machines for the Visdom Wave web client.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! form validation, the registration flow, and the autoplay carousel.

pub mod carousel;
pub mod config;
pub mod error;
pub mod forms;
pub mod ids;
pub mod ports;
pub mod registration;
pub mod submission;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use error::ConfigurationError;
pub use ids::{CarouselId, FlowId};
pub use submission::{Submission, SubmissionKind};
pub use validation::{FieldInput, FieldValue, ValidationErrors};
