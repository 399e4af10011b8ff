//! Mock implementations for testing authentication service

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::auth::{Auth, Role};
use crate::domain::entities::token::AccessClaims;
use crate::errors::DomainError;
use crate::repositories::{MockAuthRepository, MockRefreshTokenStore};
use crate::services::auth::{AuthService, PasswordHasherTrait};
use crate::services::token::{TokenService, TokenServiceConfig};

/// Reversible "hash" so tests can build credential records by hand
pub struct MockPasswordHasher;

#[async_trait]
impl PasswordHasherTrait for MockPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, hash: &str, password: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

pub type TestAuthService = AuthService<MockAuthRepository, MockRefreshTokenStore, MockPasswordHasher>;

pub struct TestContext {
    pub service: TestAuthService,
    pub auth_repository: Arc<MockAuthRepository>,
    pub store: Arc<MockRefreshTokenStore>,
    pub tokens: Arc<TokenService>,
}

pub fn token_config() -> TokenServiceConfig {
    TokenServiceConfig::default().with_secret("auth-test-secret")
}

pub async fn context_with(config: TokenServiceConfig) -> TestContext {
    let auth_repository = Arc::new(MockAuthRepository::new());
    auth_repository
        .insert_user(Auth {
            username: "alice".to_string(),
            hashed_password: "hashed:wonderland".to_string(),
            role: Role::User,
            customer_id: Some("2000".to_string()),
        })
        .await;
    auth_repository
        .insert_user(Auth {
            username: "admin".to_string(),
            hashed_password: "hashed:rootroot".to_string(),
            role: Role::Admin,
            customer_id: None,
        })
        .await;
    auth_repository.insert_account("2000", "95470").await;

    let store = Arc::new(MockRefreshTokenStore::new());
    let tokens = Arc::new(TokenService::new(config));
    let service = AuthService::new(
        Arc::clone(&auth_repository),
        Arc::clone(&store),
        Arc::new(MockPasswordHasher),
        Arc::clone(&tokens),
    );

    TestContext {
        service,
        auth_repository,
        store,
        tokens,
    }
}

pub async fn context() -> TestContext {
    context_with(token_config()).await
}

/// Claims for alice issued two hours ago that expired an hour ago
pub fn expired_alice_claims() -> AccessClaims {
    AccessClaims::issued_at(
        "alice",
        Role::User,
        Some("2000".to_string()),
        Utc::now() - Duration::hours(2),
        Duration::hours(1),
    )
}
