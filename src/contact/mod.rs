//! Contact form submission: verify the sender address, then hand the message
//! to the email relay.

mod error;
mod flow;
mod relay;
mod verify;

pub use error::{ContactError, RelayError, VerifyError};
pub use flow::{ContactFlow, ContactUi, SubmissionOutcome, SUCCESS_CLEAR_DELAY, SUCCESS_MESSAGE};
pub use relay::{EmailJsRelay, EmailRelay};
pub use verify::{interpret_verification, EmailVerdict, EmailVerifier, RapidApiVerifier};

use crate::config::SiteConfig;
use serde::Serialize;

/// Raw values from the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormSubmission {
    /// First required field that is blank, in form order.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Template variables passed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub firstname: String,
    pub name: String,
    pub subject: String,
    pub message: String,
    pub email: String,
}

impl TemplateParams {
    pub fn from_submission(submission: &FormSubmission) -> Self {
        Self {
            firstname: first_name(&submission.name),
            name: submission.name.clone(),
            subject: submission.subject.clone(),
            message: submission.message.clone(),
            email: submission.email.clone(),
        }
    }
}

/// First whitespace-delimited token of `full_name`, with only its first
/// letter upper-cased: `"jOHN smith"` becomes `"John"`.
pub fn first_name(full_name: &str) -> String {
    let token = full_name.split_whitespace().next().unwrap_or("");
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed(ContactError),
}

impl SubmissionStatus {
    /// While busy the submit button is disabled and shows a spinner.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionStatus::Validating | SubmissionStatus::Sending)
    }
}

/// The flow wired to the real verification API and EmailJS.
pub type LiveContactFlow = ContactFlow<RapidApiVerifier, EmailJsRelay>;

impl LiveContactFlow {
    pub fn from_config(config: &SiteConfig) -> Self {
        let client = reqwest::Client::new();
        ContactFlow::new(
            RapidApiVerifier::new(client.clone(), config.verification.clone()),
            EmailJsRelay::new(client, config.relay.clone()),
        )
    }
}
