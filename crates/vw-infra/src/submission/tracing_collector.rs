use tracing::info;
use vw_core::{ports::SubmissionPort, Submission};

/// Logs each submission as a structured event.
///
/// Field values are not logged; submissions carry PINs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCollector;

impl SubmissionPort for TracingCollector {
    fn submit(&self, submission: Submission) {
        let fields: Vec<&str> = submission.fields.iter().map(|(name, _)| name.as_str()).collect();
        info!(
            kind = submission.kind.as_str(),
            submitted_at_ms = submission.submitted_at_ms,
            fields = ?fields,
            "submission received"
        );
    }
}
