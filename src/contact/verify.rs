use super::error::VerifyError;
use crate::config::VerificationConfig;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailVerdict {
    Valid,
    Invalid,
}

#[async_trait(?Send)]
pub trait EmailVerifier {
    async fn verify(&self, email: &str) -> Result<EmailVerdict, VerifyError>;
}

#[derive(Deserialize)]
struct VerificationBody {
    #[serde(default)]
    status: Option<String>,
}

/// Only a 200 answer whose JSON body says `"status": "valid"` counts as valid.
pub fn interpret_verification(http_status: u16, body: &str) -> EmailVerdict {
    if http_status != 200 {
        return EmailVerdict::Invalid;
    }
    match serde_json::from_str::<VerificationBody>(body) {
        Ok(VerificationBody {
            status: Some(status),
        }) if status == "valid" => EmailVerdict::Valid,
        _ => EmailVerdict::Invalid,
    }
}

/// Mailok verification API on RapidAPI.
pub struct RapidApiVerifier {
    client: reqwest::Client,
    config: VerificationConfig,
}

impl RapidApiVerifier {
    pub fn new(client: reqwest::Client, config: VerificationConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl EmailVerifier for RapidApiVerifier {
    async fn verify(&self, email: &str) -> Result<EmailVerdict, VerifyError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("email", email)])
            .header("x-rapidapi-host", &self.config.api_host)
            .header("x-rapidapi-key", &self.config.api_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        let verdict = interpret_verification(status, &body);
        log::debug!("email verification answered {} -> {:?}", status, verdict);
        Ok(verdict)
    }
}
