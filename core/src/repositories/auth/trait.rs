//! Auth repository trait for credential lookups and authorization checks.

use async_trait::async_trait;

use crate::domain::entities::auth::{Auth, Role};
use crate::errors::DomainError;

/// Read-only access to user credentials and account ownership
///
/// Implementations must never expose the underlying storage error; failures
/// are reported as `DomainError::Internal`.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Find the credential record of a user
    ///
    /// # Returns
    /// * `Ok(Some(Auth))` - User found
    /// * `Ok(None)` - No user with this username
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<Auth>, DomainError>;

    /// Check that a user exists with exactly this username, role and customer.
    ///
    /// `customer_id = None` matches only users that have no customer.
    async fn user_exists(
        &self,
        username: &str,
        role: Role,
        customer_id: Option<&str>,
    ) -> Result<bool, DomainError>;

    /// Check that the account belongs to the customer
    async fn is_account_under_customer(
        &self,
        account_id: &str,
        customer_id: &str,
    ) -> Result<bool, DomainError>;
}
