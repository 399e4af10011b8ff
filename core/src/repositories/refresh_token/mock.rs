//! Mock implementation of RefreshTokenStore for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::DomainError;

use super::r#trait::RefreshTokenStore;

/// In-memory refresh token store.
///
/// Backed by a list rather than a set so tests can model a store that holds
/// duplicates.
#[derive(Clone, Default)]
pub struct MockRefreshTokenStore {
    tokens: Arc<Mutex<Vec<String>>>,
}

impl MockRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.tokens.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.lock().await.is_empty()
    }
}

#[async_trait]
impl RefreshTokenStore for MockRefreshTokenStore {
    async fn put(&self, token: &str) -> Result<(), DomainError> {
        self.tokens.lock().await.push(token.to_string());
        Ok(())
    }

    async fn exists(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.lock().await.iter().any(|t| t == token))
    }

    async fn delete(&self, token: &str) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.lock().await;
        let before = tokens.len();
        tokens.retain(|t| t != token);
        Ok((before - tokens.len()) as u64)
    }
}
