//! bcrypt implementation of the password hashing capability

use async_trait::async_trait;

use ba_core::errors::DomainError;
use ba_core::services::auth::PasswordHasherTrait;

/// bcrypt cost factor used in production
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Password hasher backed by bcrypt.
///
/// Hashing and verification run on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_BCRYPT_COST)
    }

    /// Use a custom cost; lower costs are only meant for tests
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasherTrait for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("bcrypt task: {e}")))?
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to hash password");
                DomainError::internal(format!("bcrypt hash: {e}"))
            })
    }

    async fn verify(&self, hash: &str, password: &str) -> Result<bool, DomainError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("bcrypt task: {e}")))?
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to verify password hash");
                DomainError::internal(format!("bcrypt verify: {e}"))
            })
    }
}
