//! Mock implementation of AuthRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::auth::{Auth, Role};
use crate::errors::DomainError;

use super::r#trait::AuthRepository;

/// In-memory users and accounts
#[derive(Clone, Default)]
pub struct MockAuthRepository {
    users: Arc<RwLock<HashMap<String, Auth>>>,
    /// (customer_id, account_id)
    accounts: Arc<RwLock<Vec<(String, String)>>>,
}

impl MockAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user
    pub async fn insert_user(&self, auth: Auth) {
        self.users.write().await.insert(auth.username.clone(), auth);
    }

    /// Attach an account to a customer
    pub async fn insert_account(&self, customer_id: &str, account_id: &str) {
        self.accounts
            .write()
            .await
            .push((customer_id.to_string(), account_id.to_string()));
    }
}

#[async_trait]
impl AuthRepository for MockAuthRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Auth>, DomainError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn user_exists(
        &self,
        username: &str,
        role: Role,
        customer_id: Option<&str>,
    ) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .get(username)
            .map(|auth| auth.role == role && auth.customer_id.as_deref() == customer_id)
            .unwrap_or(false))
    }

    async fn is_account_under_customer(
        &self,
        account_id: &str,
        customer_id: &str,
    ) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .any(|(cid, aid)| cid == customer_id && aid == account_id))
    }
}
