//! Registration flow.
//!
//! This module drives the registration state machine, keeps the in-memory
//! draft and hands the completed record to the submission port.

use std::sync::Arc;

use tracing::{debug, info, info_span};

use vw_core::{
    ports::{ClockPort, SubmissionPort},
    registration::{
        ProgressSnapshot, RegistrationAction, RegistrationDraft, RegistrationError,
        RegistrationEvent, RegistrationState, RegistrationStateMachine, StepCatalog,
        StepDefinition,
    },
    FieldInput, FlowId, Submission, SubmissionKind,
};

/// One sign-up session from the first step to submission.
///
/// 一次注册会话：从第一步到最终提交。草稿只保存在内存中。
pub struct RegistrationFlow {
    id: FlowId,
    machine: RegistrationStateMachine,
    state: RegistrationState,
    draft: RegistrationDraft,
    submissions: Arc<dyn SubmissionPort>,
    clock: Arc<dyn ClockPort>,
}

impl RegistrationFlow {
    pub fn new(
        catalog: Arc<StepCatalog>,
        submissions: Arc<dyn SubmissionPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            id: FlowId::new(),
            machine: RegistrationStateMachine::new(catalog),
            state: RegistrationState::initial(),
            draft: RegistrationDraft::new(),
            submissions,
            clock,
        }
    }

    pub fn id(&self) -> &FlowId {
        &self.id
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    /// Active step, or the total step count once completed.
    pub fn current_step(&self) -> usize {
        self.state
            .step()
            .unwrap_or_else(|| self.machine.catalog().total_steps())
    }

    /// Definition of the active step; `None` once completed.
    pub fn current_definition(&self) -> Option<&StepDefinition> {
        self.state
            .step()
            .and_then(|step| self.machine.catalog().step(step))
    }

    pub fn catalog(&self) -> &StepCatalog {
        self.machine.catalog()
    }

    /// Data collected so far. Emptied when the flow completes or is abandoned.
    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot::project(&self.state, self.machine.catalog().total_steps())
    }

    /// Validate and store a non-final step, then advance.
    pub fn submit_step(
        &mut self,
        step: usize,
        input: FieldInput,
    ) -> Result<RegistrationState, RegistrationError> {
        self.dispatch(RegistrationEvent::SubmitStep { step, input })
    }

    /// Validate the final step and hand the whole record to the collector.
    pub fn submit_final(&mut self, input: FieldInput) -> Result<RegistrationState, RegistrationError> {
        self.dispatch(RegistrationEvent::SubmitFinal { input })
    }

    /// Step back once. Never fails and keeps the draft.
    pub fn go_back(&mut self) -> RegistrationState {
        self.apply(RegistrationEvent::Back)
    }

    /// Drop everything and start over at step 1.
    pub fn abandon(&mut self) -> RegistrationState {
        self.apply(RegistrationEvent::Abandon)
    }

    fn dispatch(&mut self, event: RegistrationEvent) -> Result<RegistrationState, RegistrationError> {
        let event_name = event.name();
        let span = info_span!(
            "usecase.registration_flow.dispatch",
            flow_id = %self.id,
            event = event_name
        );
        let _enter = span.enter();

        let from = self.state.clone();
        let (next, actions) = self.machine.transition(from.clone(), event);

        // A refusal is always the sole action; nothing else may apply.
        if let Some(error) = actions.iter().find_map(|action| match action {
            RegistrationAction::Reject { error } => Some(error.clone()),
            _ => None,
        }) {
            debug!(state = ?from, error = %error, "registration event rejected");
            return Err(error);
        }

        Ok(self.commit(from, next, actions, event_name))
    }

    /// Events the machine accepts in every state.
    fn apply(&mut self, event: RegistrationEvent) -> RegistrationState {
        let event_name = event.name();
        let span = info_span!(
            "usecase.registration_flow.apply",
            flow_id = %self.id,
            event = event_name
        );
        let _enter = span.enter();

        let from = self.state.clone();
        let (next, actions) = self.machine.transition(from.clone(), event);
        self.commit(from, next, actions, event_name)
    }

    fn commit(
        &mut self,
        from: RegistrationState,
        next: RegistrationState,
        actions: Vec<RegistrationAction>,
        event_name: &'static str,
    ) -> RegistrationState {
        self.execute_actions(actions);
        info!(from = ?from, to = ?next, event = event_name, "registration state transition");
        self.state = next;
        self.state.clone()
    }

    fn execute_actions(&mut self, actions: Vec<RegistrationAction>) {
        for action in actions {
            match action {
                RegistrationAction::MergeIntoDraft { fields } => {
                    debug!(fields = fields.len(), "registration merging step output");
                    self.draft.merge(fields);
                }
                RegistrationAction::SubmitDraft => self.submit_draft(),
                RegistrationAction::ClearDraft => {
                    debug!(fields = self.draft.len(), "registration draft cleared");
                    self.draft = RegistrationDraft::new();
                }
                RegistrationAction::Reject { .. } => {}
            }
        }
    }

    fn submit_draft(&mut self) {
        let draft = std::mem::take(&mut self.draft);
        let submission = Submission {
            kind: SubmissionKind::Registration,
            fields: draft.into_fields(),
            submitted_at_ms: self.clock.now_ms(),
        };
        info!(
            flow_id = %self.id,
            fields = submission.fields.len(),
            "registration submitted"
        );
        self.submissions.submit(submission);
    }
}
