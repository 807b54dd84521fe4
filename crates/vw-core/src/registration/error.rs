use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Reasons a registration event was refused.
///
/// All of them leave the flow state and the draft untouched.
///
/// 注册流程拒绝事件的原因；被拒绝时状态与草稿保持不变。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RegistrationError {
    #[error("step {step} input is invalid: {errors}")]
    Invalid { step: usize, errors: ValidationErrors },

    #[error("step {submitted} submitted while step {current} is active")]
    StepMismatch { current: usize, submitted: usize },

    #[error("step {step} is the final step; use submit_final")]
    FinalStepRequiresSubmitFinal { step: usize },

    #[error("final submission attempted at step {current}")]
    NotAtFinalStep { current: usize },

    #[error("registration already completed")]
    AlreadyCompleted,

    #[error("step {0} is not part of the catalog")]
    UnknownStep(usize),
}

impl RegistrationError {
    /// Field messages when the refusal came from validation.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RegistrationError::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
