//! Traits for email delivery integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

/// Trait for email service integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send the registration confirmation link, returning when it was sent
    async fn send_confirmation_email(
        &self,
        email: &str,
        link: &str,
    ) -> Result<DateTime<Utc>, DomainError>;
}

#[async_trait]
impl<T: EmailServiceTrait + ?Sized> EmailServiceTrait for Box<T> {
    async fn send_confirmation_email(
        &self,
        email: &str,
        link: &str,
    ) -> Result<DateTime<Utc>, DomainError> {
        (**self).send_confirmation_email(email, link).await
    }
}
