//! Email service that logs confirmation links instead of sending them

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use ba_core::errors::DomainError;
use ba_core::services::registration::EmailServiceTrait;

/// Development email service
#[derive(Debug, Clone)]
pub struct LogEmailService {
    from_address: String,
}

impl LogEmailService {
    pub fn new(from_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
        }
    }
}

#[async_trait]
impl EmailServiceTrait for LogEmailService {
    async fn send_confirmation_email(
        &self,
        email: &str,
        link: &str,
    ) -> Result<DateTime<Utc>, DomainError> {
        tracing::info!(
            from = %self.from_address,
            to = %email,
            link = %link,
            "Confirmation email (not sent, log provider)"
        );
        Ok(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_send_time() {
        let service = LogEmailService::new("noreply@bank.test");
        let before = Utc::now();

        let sent_at = service
            .send_confirmation_email("a@x.com", "http://localhost:3000/register/check?ott=t")
            .await
            .unwrap();

        assert!(sent_at >= before);
    }
}
