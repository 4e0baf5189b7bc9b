use std::time::{Duration, Instant};

use lubricants_contact::{ContactInput, SUCCESS_MESSAGE};
use serde::Deserialize;

use crate::{Field, Fields, Reply, Transport, TransportError, Validity};

pub const SUCCESS_TEXT: &str =
    "Thank you for your message! We will get back to you within 24 hours.";
pub const GENERIC_ERROR_TEXT: &str =
    "There was an error sending your message. Please try again.";
pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

/// Alerts close themselves after this long.
pub const FEEDBACK_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Ignored,
    /// Constraint validation failed; nothing was sent.
    Blocked(Vec<Field>),
    Completed(Feedback),
}

#[derive(Deserialize)]
struct ServerMessage {
    #[serde(default)]
    message: Option<String>,
}

pub struct FormController<T> {
    transport: T,
    values: Fields<String>,
    validity: Fields<Validity>,
    state: FormState,
    feedback: Option<(Feedback, Instant)>,
    scroll_to_feedback: bool,
}

impl<T: Transport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            values: Fields::default(),
            validity: Fields::default(),
            state: FormState::Idle,
            feedback: None,
            scroll_to_feedback: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field]
    }

    pub fn validity(&self, field: Field) -> Validity {
        self.validity[field]
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref().map(|(feedback, _)| feedback)
    }

    pub fn button(&self) -> SubmitButton {
        if self.state == FormState::Submitting {
            SubmitButton {
                label: SENDING_LABEL,
                disabled: true,
            }
        } else {
            SubmitButton {
                label: SEND_LABEL,
                disabled: false,
            }
        }
    }

    /// Returns whether the feedback region should be scrolled into view,
    /// clearing the request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_feedback)
    }

    /// Input event: only clears an invalid mark once the field passes.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.values[field] = value.into();

        if self.validity[field] == Validity::Invalid && field.check(&self.values[field]) {
            self.validity[field] = Validity::Valid;
        }
    }

    /// Blur event: marks the field valid or invalid.
    pub fn blur(&mut self, field: Field) {
        self.validity[field] = if field.check(&self.values[field]) {
            Validity::Valid
        } else {
            Validity::Invalid
        };
    }

    /// Closes the alert once it has been visible for [`FEEDBACK_TTL`].
    pub fn dismiss_expired(&mut self, now: Instant) -> bool {
        match self.feedback {
            Some((_, shown_at)) if now.saturating_duration_since(shown_at) >= FEEDBACK_TTL => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let input = match self.begin_submit() {
            Ok(input) => input,
            Err(outcome) => return outcome,
        };

        let reply = self.transport.post_contact(&input).await;

        self.finish_submit(reply)
    }

    /// Validates the form and enters `Submitting`, returning the body to post.
    pub fn begin_submit(&mut self) -> Result<ContactInput, SubmitOutcome> {
        if self.state == FormState::Submitting {
            return Err(SubmitOutcome::Ignored);
        }

        let invalid: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| !field.check(&self.values[*field]))
            .collect();

        if !invalid.is_empty() {
            for field in &invalid {
                self.validity[*field] = Validity::Invalid;
            }
            tracing::debug!(?invalid, "Contact form blocked by constraint validation");
            return Err(SubmitOutcome::Blocked(invalid));
        }

        self.state = FormState::Submitting;

        Ok(ContactInput {
            name: Some(self.values.name.to_owned()),
            email: Some(self.values.email.to_owned()),
            mobile: Some(self.values.mobile.to_owned()),
            message: Some(self.values.message.to_owned()),
        })
    }

    /// Applies the endpoint's answer and leaves `Submitting`.
    pub fn finish_submit(&mut self, reply: Result<Reply, TransportError>) -> SubmitOutcome {
        let feedback = match interpret(reply) {
            Ok(()) => {
                self.state = FormState::Success;
                self.values = Fields::default();
                self.validity = Fields::default();
                Feedback {
                    kind: FeedbackKind::Success,
                    text: SUCCESS_TEXT.to_string(),
                }
            }
            Err(message) => {
                self.state = FormState::Error(message.to_owned());
                Feedback {
                    kind: FeedbackKind::Error,
                    text: message,
                }
            }
        };

        self.feedback = Some((feedback.clone(), Instant::now()));
        self.scroll_to_feedback = true;

        SubmitOutcome::Completed(feedback)
    }
}

fn interpret(reply: Result<Reply, TransportError>) -> Result<(), String> {
    let reply = match reply {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(error = %err, "Contact form request failed");
            return Err(GENERIC_ERROR_TEXT.to_string());
        }
    };

    let message = serde_json::from_str::<ServerMessage>(&reply.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty());

    if reply.is_success() && message.as_deref() == Some(SUCCESS_MESSAGE) {
        return Ok(());
    }

    tracing::warn!(status = reply.status, ?message, "Contact form rejected");

    Err(message.unwrap_or_else(|| GENERIC_ERROR_TEXT.to_string()))
}
