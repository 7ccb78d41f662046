use super::error::RelayError;
use super::TemplateParams;
use crate::config::RelayConfig;
use async_trait::async_trait;
use serde::Serialize;

#[async_trait(?Send)]
pub trait EmailRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError>;
}

/// Request body of the EmailJS REST `email/send` endpoint.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

pub struct EmailJsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(client: reqwest::Client, config: RelayConfig) -> Self {
        Self { client, config }
    }

    fn request<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

#[async_trait(?Send)]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request(params))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
