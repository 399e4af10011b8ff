//! HTTP API email service
//!
//! Posts a JSON message to a transactional email endpoint with a bearer key.
//! The endpoint is expected to accept `{from, to, subject, text}`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use ba_core::errors::DomainError;
use ba_core::services::registration::EmailServiceTrait;
use ba_shared::config::EmailConfig;

use super::{confirmation_body, CONFIRMATION_SUBJECT};
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

/// Email service backed by an HTTP API
#[derive(Debug, Clone)]
pub struct HttpEmailService {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    from_address: String,
}

impl HttpEmailService {
    /// Create the service; `api_url` is required
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let api_url = config
            .api_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("EMAIL_API_URL not set".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailServiceTrait for HttpEmailService {
    async fn send_confirmation_email(
        &self,
        email: &str,
        link: &str,
    ) -> Result<DateTime<Utc>, DomainError> {
        let message = OutboundEmail {
            from: &self.from_address,
            to: email,
            subject: CONFIRMATION_SUBJECT,
            text: confirmation_body(link),
        };

        let mut request = self.client.post(&self.api_url).json(&message);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!(to = %email, error = %e, "Email API request failed");
                DomainError::internal(format!("email api: {e}"))
            })?;

        tracing::debug!(to = %email, status = %response.status(), "Confirmation email accepted");
        Ok(Utc::now())
    }
}
