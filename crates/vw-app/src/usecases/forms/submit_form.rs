use std::sync::Arc;

use tracing::{debug, info, info_span};

use vw_core::{
    forms,
    ports::{ClockPort, SubmissionPort},
    validation::StepSchema,
    ConfigurationError, FieldInput, Submission, SubmissionKind, ValidationErrors,
};

/// Single-page form submission: validate, then hand off.
///
/// 单页表单（登录 / 联系我们）：校验通过后直接交给收集器。
pub struct SubmitForm {
    kind: SubmissionKind,
    schema: StepSchema,
    submissions: Arc<dyn SubmissionPort>,
    clock: Arc<dyn ClockPort>,
}

impl SubmitForm {
    pub fn new(
        kind: SubmissionKind,
        schema: StepSchema,
        submissions: Arc<dyn SubmissionPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            kind,
            schema,
            submissions,
            clock,
        }
    }

    pub fn sign_in(
        submissions: Arc<dyn SubmissionPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(SubmissionKind::SignIn, forms::sign_in()?, submissions, clock))
    }

    pub fn contact(
        submissions: Arc<dyn SubmissionPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(SubmissionKind::Contact, forms::contact()?, submissions, clock))
    }

    pub fn kind(&self) -> SubmissionKind {
        self.kind
    }

    pub fn schema(&self) -> &StepSchema {
        &self.schema
    }

    /// Validate `input` and submit it. Nothing is submitted on failure.
    pub fn execute(&self, input: &FieldInput) -> Result<(), ValidationErrors> {
        let span = info_span!("usecase.submit_form.execute", kind = self.kind.as_str());
        let _enter = span.enter();

        let fields = self.schema.validate(input).map_err(|errors| {
            debug!(fields = errors.len(), "form rejected");
            errors
        })?;
        let submission = Submission {
            kind: self.kind,
            fields,
            submitted_at_ms: self.clock.now_ms(),
        };
        info!(fields = submission.fields.len(), "form submitted");
        self.submissions.submit(submission);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSubmissions {
        received: Mutex<Vec<Submission>>,
    }

    impl SubmissionPort for RecordingSubmissions {
        fn submit(&self, submission: Submission) {
            self.received.lock().unwrap().push(submission);
        }
    }

    struct FixedClock;

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            42
        }
    }

    #[test]
    fn valid_sign_in_is_submitted() {
        let recorder = Arc::new(RecordingSubmissions::default());
        let use_case = SubmitForm::sign_in(recorder.clone(), Arc::new(FixedClock)).unwrap();

        use_case
            .execute(&FieldInput::new().text("mobile", "9876543210").text("pin", "1234"))
            .unwrap();

        let received = recorder.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind, SubmissionKind::SignIn);
        assert_eq!(received[0].submitted_at_ms, 42);
        assert_eq!(received[0].fields.text_of("pin"), Some("1234"));
    }

    #[test]
    fn invalid_contact_reports_every_field_and_submits_nothing() {
        let recorder = Arc::new(RecordingSubmissions::default());
        let use_case = SubmitForm::contact(recorder.clone(), Arc::new(FixedClock)).unwrap();

        let errors = use_case
            .execute(
                &FieldInput::new()
                    .text("name", "")
                    .text("email", "not-an-email")
                    .text("phone", "123")
                    .text("message", "short"),
            )
            .unwrap_err();

        assert_eq!(errors.messages("name"), ["Name is required"]);
        assert_eq!(errors.messages("email"), ["Please enter a valid email"]);
        assert_eq!(errors.messages("phone"), ["Please enter a valid phone number"]);
        assert_eq!(
            errors.messages("message"),
            ["Message must be at least 10 characters"]
        );
        assert!(recorder.received.lock().unwrap().is_empty());
    }

    #[test]
    fn undeclared_fields_are_not_forwarded() {
        let recorder = Arc::new(RecordingSubmissions::default());
        let use_case = SubmitForm::sign_in(recorder.clone(), Arc::new(FixedClock)).unwrap();

        use_case
            .execute(
                &FieldInput::new()
                    .text("mobile", "9876543210")
                    .text("pin", "1234")
                    .text("remember", "yes"),
            )
            .unwrap();

        let received = recorder.received.lock().unwrap();
        assert!(!received[0].fields.contains("remember"));
    }
}
