use crate::submission::Submission;

/// Receives validated submissions.
///
/// Fire-and-forget: the caller never waits for an acknowledgement and a
/// collector must not block.
pub trait SubmissionPort: Send + Sync {
    fn submit(&self, submission: Submission);
}
