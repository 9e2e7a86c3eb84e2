// SPDX-License-Identifier: MPL-2.0
//! `POST /api/contact`.
//!
//! Request handling order:
//!
//! 1. any other method: 405
//! 2. body that is not JSON: 500
//! 3. sanitize every field (non-string values count as missing)
//! 4. missing or empty field: 400
//! 5. malformed email: 400
//! 6. message under the minimum length: 400
//! 7. sink failure: 500
//! 8. otherwise 200
//!
//! Every response body is a [`ContactResponse`].

use super::sink::{Submission, SubmissionSink};
use crate::domain::contact::{sanitize_field, ContactPayload, ContactResponse};
use crate::error::{Error, Result, ValidationError};
use crate::i18n::fluent::I18n;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Response texts, resolved once from the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMessages {
    pub method_not_allowed: String,
    pub fields_required: String,
    pub invalid_email: String,
    pub message_too_short: String,
    pub server_error: String,
    pub accepted: String,
}

impl ApiMessages {
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            method_not_allowed: i18n.tr("api-method-not-allowed"),
            fields_required: i18n.tr(ValidationError::MissingFields.api_key()),
            invalid_email: i18n.tr(ValidationError::InvalidEmail.api_key()),
            message_too_short: i18n.tr(ValidationError::MessageTooShort.api_key()),
            server_error: i18n.tr("api-server-error"),
            accepted: i18n.tr("api-accepted"),
        }
    }

    #[must_use]
    pub fn for_validation(&self, err: ValidationError) -> &str {
        match err {
            ValidationError::MissingFields => &self.fields_required,
            ValidationError::InvalidEmail => &self.invalid_email,
            ValidationError::MessageTooShort => &self.message_too_short,
        }
    }
}

impl Default for ApiMessages {
    fn default() -> Self {
        Self::from_i18n(&I18n::default())
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn SubmissionSink>,
    pub messages: Arc<ApiMessages>,
}

impl AppState {
    pub fn new(sink: impl SubmissionSink + 'static, messages: ApiMessages) -> Self {
        Self {
            sink: Arc::new(sink),
            messages: Arc::new(messages),
        }
    }
}

type ApiReply = (StatusCode, Json<ContactResponse>);

fn reply(status: StatusCode, message: &str) -> ApiReply {
    (
        status,
        Json(ContactResponse {
            success: status.is_success(),
            message: message.to_string(),
        }),
    )
}

/// Builds the router serving the endpoint at `path`.
pub fn router(state: AppState, path: &str) -> Router {
    Router::new()
        .route(path, post(submit).fallback(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState, path: &str) -> Result<()> {
    let app = router(state, path);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, path, "contact endpoint listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("contact endpoint stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "failed to listen for shutdown signal");
    }
}

async fn method_not_allowed(State(state): State<AppState>) -> ApiReply {
    reply(StatusCode::METHOD_NOT_ALLOWED, &state.messages.method_not_allowed)
}

async fn submit(State(state): State<AppState>, body: Bytes) -> ApiReply {
    let messages = &state.messages;
    let payload = match parse_body(&body) {
        Ok(payload) => payload,
        Err(err) => {
            error!(%err, "contact form error");
            return reply(StatusCode::INTERNAL_SERVER_ERROR, &messages.server_error);
        }
    };

    if let Err(err) = payload.validate() {
        return reply(StatusCode::BAD_REQUEST, messages.for_validation(err));
    }

    match state.sink.deliver(&Submission::new(payload)) {
        Ok(()) => reply(StatusCode::OK, &messages.accepted),
        Err(err) => {
            error!(%err, "contact form error");
            reply(StatusCode::INTERNAL_SERVER_ERROR, &messages.server_error)
        }
    }
}

/// Parses and sanitizes the body. Only malformed JSON is an error here.
fn parse_body(body: &[u8]) -> Result<ContactPayload> {
    let value: Value =
        serde_json::from_slice(body).map_err(|err| Error::Http(format!("malformed body: {err}")))?;
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .map(sanitize_field)
            .unwrap_or_default()
    };
    Ok(ContactPayload {
        name: field("name"),
        email: field("email"),
        subject: field("subject"),
        message: field("message"),
    })
}
