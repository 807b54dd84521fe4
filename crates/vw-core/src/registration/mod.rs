//! Registration domain module.
//!
//! This module defines the multi-step sign-up flow: the step catalog, the
//! accumulated draft, the progress stepper projection and the pure state
//! machine.

mod draft;
mod error;
mod progress;
pub mod state_machine;
mod step;

pub use draft::RegistrationDraft;
pub use error::RegistrationError;
pub use progress::{ProgressSnapshot, StepMarker};
pub use state_machine::{
    RegistrationAction, RegistrationEvent, RegistrationState, RegistrationStateMachine,
};
pub use step::{StepCatalog, StepDefinition, StepTransition};
