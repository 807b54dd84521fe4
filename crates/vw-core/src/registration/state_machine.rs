//! Registration state machine.
//!
//! Defines a pure state transition function for the sign-up flow. The draft
//! itself is not part of the state; merges are emitted as actions so the
//! caller decides where the draft lives.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{RegistrationError, StepCatalog, StepTransition};
use crate::validation::FieldInput;

/// Registration flow state.
///
/// 注册流程状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationState {
    /// Filling in step `step` (1-based).
    ///
    /// 正在填写第 `step` 步。
    InProgress { step: usize },
    /// Final step accepted.
    ///
    /// 注册完成。
    Completed,
}

impl RegistrationState {
    pub fn initial() -> Self {
        RegistrationState::InProgress { step: 1 }
    }

    /// Active step; `None` once completed.
    pub fn step(&self) -> Option<usize> {
        match self {
            RegistrationState::InProgress { step } => Some(*step),
            RegistrationState::Completed => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RegistrationState::Completed)
    }
}

/// Events that drive the registration flow.
///
/// 驱动注册流程的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// Submit a non-final step.
    SubmitStep { step: usize, input: FieldInput },
    /// Submit the terminal step.
    SubmitFinal { input: FieldInput },
    /// Navigate one step back.
    Back,
    /// Leave the flow; collected data is dropped.
    Abandon,
}

impl RegistrationEvent {
    /// Event name for logs. Inputs carry PINs and are never logged.
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationEvent::SubmitStep { .. } => "SubmitStep",
            RegistrationEvent::SubmitFinal { .. } => "SubmitFinal",
            RegistrationEvent::Back => "Back",
            RegistrationEvent::Abandon => "Abandon",
        }
    }
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Merge validated step output into the draft.
    MergeIntoDraft { fields: FieldInput },
    /// Hand the finished draft to the submission collaborator.
    SubmitDraft,
    /// Drop everything collected so far.
    ClearDraft,
    /// The event was refused; state is unchanged.
    Reject { error: RegistrationError },
}

/// Pure registration state machine over a fixed step catalog.
#[derive(Debug, Clone)]
pub struct RegistrationStateMachine {
    catalog: Arc<StepCatalog>,
}

impl RegistrationStateMachine {
    pub fn new(catalog: Arc<StepCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn transition(
        &self,
        state: RegistrationState,
        event: RegistrationEvent,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        match (state, event) {
            (_, RegistrationEvent::Abandon) => (
                RegistrationState::initial(),
                vec![RegistrationAction::ClearDraft],
            ),
            (RegistrationState::InProgress { step }, RegistrationEvent::Back) => {
                let previous = step.saturating_sub(1).max(1);
                (RegistrationState::InProgress { step: previous }, Vec::new())
            }
            (
                RegistrationState::InProgress { step: current },
                RegistrationEvent::SubmitStep { step, input },
            ) => {
                if step != current {
                    return reject(
                        RegistrationState::InProgress { step: current },
                        RegistrationError::StepMismatch {
                            current,
                            submitted: step,
                        },
                    );
                }
                self.submit_step(current, input)
            }
            (
                RegistrationState::InProgress { step: current },
                RegistrationEvent::SubmitFinal { input },
            ) => self.submit_final(current, input),
            (
                RegistrationState::Completed,
                RegistrationEvent::SubmitStep { .. } | RegistrationEvent::SubmitFinal { .. },
            ) => reject(
                RegistrationState::Completed,
                RegistrationError::AlreadyCompleted,
            ),
            (RegistrationState::Completed, RegistrationEvent::Back) => {
                (RegistrationState::Completed, Vec::new())
            }
        }
    }

    fn submit_step(
        &self,
        current: usize,
        input: FieldInput,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        let unchanged = RegistrationState::InProgress { step: current };
        let Some(definition) = self.catalog.step(current) else {
            return reject(unchanged, RegistrationError::UnknownStep(current));
        };
        let next = match definition.transition {
            StepTransition::Next => current + 1,
            StepTransition::JumpTo(target) => target,
            StepTransition::Complete => {
                return reject(
                    unchanged,
                    RegistrationError::FinalStepRequiresSubmitFinal { step: current },
                );
            }
        };
        match definition.schema.validate(&input) {
            Ok(fields) => (
                RegistrationState::InProgress { step: next },
                vec![RegistrationAction::MergeIntoDraft { fields }],
            ),
            Err(errors) => reject(
                unchanged,
                RegistrationError::Invalid {
                    step: current,
                    errors,
                },
            ),
        }
    }

    fn submit_final(
        &self,
        current: usize,
        input: FieldInput,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        let unchanged = RegistrationState::InProgress { step: current };
        let Some(definition) = self.catalog.step(current) else {
            return reject(unchanged, RegistrationError::UnknownStep(current));
        };
        if !definition.is_final() {
            return reject(unchanged, RegistrationError::NotAtFinalStep { current });
        }
        match definition.schema.validate(&input) {
            Ok(fields) => (
                RegistrationState::Completed,
                vec![
                    RegistrationAction::MergeIntoDraft { fields },
                    RegistrationAction::SubmitDraft,
                ],
            ),
            Err(errors) => reject(
                unchanged,
                RegistrationError::Invalid {
                    step: current,
                    errors,
                },
            ),
        }
    }
}

fn reject(
    state: RegistrationState,
    error: RegistrationError,
) -> (RegistrationState, Vec<RegistrationAction>) {
    (state, vec![RegistrationAction::Reject { error }])
}
