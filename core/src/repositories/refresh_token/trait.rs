//! Refresh token store trait.
//!
//! The store holds the set of refresh tokens that have been issued and not
//! yet revoked. A signed refresh token is only honoured while it is a member.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Set of currently valid refresh tokens, keyed by the token string
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Add a freshly issued refresh token
    async fn put(&self, token: &str) -> Result<(), DomainError>;

    /// Check whether the token is still in the store
    async fn exists(&self, token: &str) -> Result<bool, DomainError>;

    /// Remove the token, returning how many entries were removed.
    ///
    /// The caller decides what a count other than one means.
    async fn delete(&self, token: &str) -> Result<u64, DomainError>;
}
