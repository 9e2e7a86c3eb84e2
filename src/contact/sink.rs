// SPDX-License-Identifier: MPL-2.0
//! Delivery of accepted submissions.
//!
//! Nothing is persisted and nothing is sent anywhere: the only shipped sink
//! writes one structured log line per submission.

use crate::domain::contact::ContactPayload;
use crate::error::Result;
use chrono::{DateTime, Utc};

/// A sanitized, validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub payload: ContactPayload,
    pub received_at: DateTime<Utc>,
}

impl Submission {
    #[must_use]
    pub fn new(payload: ContactPayload) -> Self {
        Self {
            payload,
            received_at: Utc::now(),
        }
    }
}

/// Receives submissions that passed validation.
///
/// An error makes the endpoint answer with its generic server error.
pub trait SubmissionSink: Send + Sync {
    fn deliver(&self, submission: &Submission) -> Result<()>;
}

/// Logs submissions at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, submission: &Submission) -> Result<()> {
        let payload = &submission.payload;
        tracing::info!(
            name = %payload.name,
            email = %payload.email,
            subject = %payload.subject,
            message = %payload.message,
            received_at = %submission.received_at.to_rfc3339(),
            "contact form submission"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_accepts_everything() {
        let submission = Submission::new(ContactPayload::new("a", "a@b.co", "s", "0123456789"));
        assert!(LogSink.deliver(&submission).is_ok());
    }

    #[test]
    fn submission_is_stamped_on_creation() {
        let before = Utc::now();
        let submission = Submission::new(ContactPayload::default());
        assert!(submission.received_at >= before);
    }
}
