//! Capability traits used by the authentication service

use async_trait::async_trait;

use crate::errors::DomainError;

/// Trait for password hashing integration
#[async_trait]
pub trait PasswordHasherTrait: Send + Sync {
    /// Hash a plaintext password for storage
    async fn hash(&self, password: &str) -> Result<String, DomainError>;
    /// Compare a stored hash with a plaintext password
    async fn verify(&self, hash: &str, password: &str) -> Result<bool, DomainError>;
}
