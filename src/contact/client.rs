// SPDX-License-Identifier: MPL-2.0
//! Submits contact payloads to a running endpoint.

use super::SubmitOutcome;
use crate::domain::contact::{ContactPayload, ContactResponse};
use crate::error::Result;

const USER_AGENT: &str = concat!("Folio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request. Never retries.
    ///
    /// A response whose body is not a `ContactResponse` is reported as a
    /// network error, even with a success status.
    pub async fn submit(&self, payload: &ContactPayload) -> SubmitOutcome {
        let response = match self.http.post(&self.endpoint).json(payload).send().await {
            Ok(response) => response,
            Err(err) => return SubmitOutcome::NetworkError(err.to_string()),
        };

        let status = response.status();
        // Without a ContactResponse body the outcome is unknown, whatever the status.
        let message = match response.json::<ContactResponse>().await {
            Ok(body) => body.message,
            Err(err) => {
                tracing::warn!(%status, error = %err, "contact endpoint returned an unreadable body");
                return SubmitOutcome::NetworkError(format!("unreadable response ({status}): {err}"));
            }
        };

        if status.is_success() {
            SubmitOutcome::Accepted { message }
        } else {
            SubmitOutcome::Rejected {
                status: status.as_u16(),
                message,
            }
        }
    }
}
