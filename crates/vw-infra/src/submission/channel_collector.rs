use tokio::sync::mpsc;
use tracing::warn;
use vw_core::{ports::SubmissionPort, Submission};

/// Forwards submissions to an in-process consumer.
#[derive(Debug, Clone)]
pub struct ChannelCollector {
    tx: mpsc::UnboundedSender<Submission>,
}

impl ChannelCollector {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Submission>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SubmissionPort for ChannelCollector {
    fn submit(&self, submission: Submission) {
        let kind = submission.kind;
        if self.tx.send(submission).is_err() {
            warn!(kind = kind.as_str(), "submission dropped, consumer has gone away");
        }
    }
}
