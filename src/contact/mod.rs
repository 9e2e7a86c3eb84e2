// SPDX-License-Identifier: MPL-2.0
//! The contact endpoint and its client.
//!
//! - [`server`]: axum router for `POST /api/contact`
//! - [`sink`]: where accepted submissions go (a log line)
//! - [`client`]: reqwest-based submitter used by the CLI

pub mod client;
pub mod server;
pub mod sink;

pub use client::ContactClient;
pub use server::{router, ApiMessages, AppState};
pub use sink::{LogSink, Submission, SubmissionSink};

/// How one submission attempt ended, from the sender's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx with the server's confirmation text.
    Accepted { message: String },
    /// Any other status, with the server's message.
    Rejected { status: u16, message: String },
    /// No response, or one without a readable `ContactResponse` body.
    NetworkError(String),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
