// SPDX-License-Identifier: MPL-2.0
//! Contact form client: inline validation, busy state and the feedback line.
//!
//! ```text
//! Idle --submit(valid)--> Sending --Accepted--> Idle (success, reset, redirect)
//!                                  --Rejected / NetworkError--> Idle (error)
//! ```
//!
//! Validation failures never leave `Idle`. The request itself is issued by
//! the embedder in response to [`Effect::SendContact`]; its outcome comes back
//! through [`ContactForm::on_response`].

use crate::config::{LayoutConfig, Timing};
use crate::contact::SubmitOutcome;
use crate::domain::contact::ContactPayload;
use crate::ui::effect::{Effect, MessageKind, Update};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Hide the feedback line if it still shows the message of this generation.
    HideMessage(u64),
    Redirect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    has_message_line: bool,
    sending: bool,
    message_generation: u64,
    message_hide: Duration,
    redirect_delay: Duration,
    thank_you_path: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(has_message_line: bool, timing: &Timing, layout: &LayoutConfig) -> Self {
        Self {
            has_message_line,
            sending: false,
            message_generation: 0,
            message_hide: timing.message_hide,
            redirect_delay: timing.redirect,
            thank_you_path: layout.thank_you_path.clone(),
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Validates and, when valid, asks for the request to be sent.
    ///
    /// Ignored while a request is in flight (the submit button is disabled).
    pub fn submit(&mut self, payload: ContactPayload) -> Update<Timer> {
        if self.sending {
            return Update::none();
        }
        if let Err(err) = payload.trimmed().validate() {
            tracing::debug!(%err, "contact form rejected locally");
            return self.show(MessageKind::Error, err.form_key());
        }

        self.sending = true;
        let mut update = self.show(MessageKind::Info, "form-sending");
        update.push(Effect::SubmitBusy(true));
        update.push(Effect::SendContact(payload));
        update
    }

    /// Maps the request outcome to the feedback line. No retry.
    pub fn on_response(&mut self, outcome: SubmitOutcome) -> Update<Timer> {
        if !self.sending {
            return Update::none();
        }
        self.sending = false;

        let mut update = match outcome {
            SubmitOutcome::Accepted { .. } => {
                let mut update = self.show(MessageKind::Success, "form-sent");
                update.push(Effect::ResetForm);
                update.after(self.redirect_delay, Timer::Redirect);
                update
            }
            SubmitOutcome::Rejected { status, message } => {
                tracing::warn!(status, %message, "contact submission rejected");
                self.show(MessageKind::Error, "form-send-failed")
            }
            SubmitOutcome::NetworkError(err) => {
                tracing::warn!(%err, "contact submission failed");
                self.show(MessageKind::Error, "form-send-failed")
            }
        };
        update.push(Effect::SubmitBusy(false));
        update
    }

    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::HideMessage(generation) if generation == self.message_generation => {
                vec![Effect::HideFormMessage]
            }
            Timer::HideMessage(_) => Vec::new(),
            Timer::Redirect => vec![Effect::Navigate {
                href: self.thank_you_path.clone(),
            }],
        }
    }

    /// Non-error messages auto-hide.
    fn show(&mut self, kind: MessageKind, key: &'static str) -> Update<Timer> {
        if !self.has_message_line {
            return Update::none();
        }
        self.message_generation += 1;
        let mut update = Update::effect(Effect::FormMessage { kind, key });
        if kind != MessageKind::Error {
            update.after(self.message_hide, Timer::HideMessage(self.message_generation));
        }
        update
    }
}
