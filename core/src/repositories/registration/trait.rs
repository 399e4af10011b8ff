//! Registration repository trait for pending sign-ups and account provisioning.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::registration::Registration;
use crate::errors::DomainError;

/// Persistence for [`Registration`] records, keyed by email
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Check whether any registration uses this email
    async fn is_email_used(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether a user or a pending registration holds this username
    async fn is_username_taken(&self, username: &str) -> Result<bool, DomainError>;

    /// Persist a new registration.
    ///
    /// Uniqueness of email and username is enforced here atomically, so a
    /// concurrent duplicate fails with `RegistrationError::EmailAlreadyUsed`
    /// or `RegistrationError::UsernameTaken` even when both callers passed
    /// the pre-checks.
    async fn save(&self, registration: &Registration) -> Result<(), DomainError>;

    /// Find a registration by email
    ///
    /// # Returns
    /// * `Ok(Some(Registration))` - Registration found
    /// * `Ok(None)` - No registration with this email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError>;

    /// Stamp the time a confirmation email was sent
    async fn update_last_emailed(
        &self,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// Provision the customer and its user for a registration in one
    /// transaction, returning the new customer id
    async fn create_necessary_accounts(
        &self,
        registration: &Registration,
    ) -> Result<String, DomainError>;

    /// Persist the confirmation state of a registration
    async fn update(&self, registration: &Registration) -> Result<(), DomainError>;
}
