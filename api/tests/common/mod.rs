//! Shared setup for HTTP tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use ba_api::AppState;
use ba_core::domain::entities::auth::{Auth, Role};
use ba_core::errors::DomainError;
use ba_core::repositories::{MockAuthRepository, MockRefreshTokenStore, MockRegistrationRepository};
use ba_core::services::{
    AuthService, EmailServiceTrait, PasswordHasherTrait, RegistrationService,
    RegistrationServiceConfig, TokenService, TokenServiceConfig,
};
use ba_infra::BcryptPasswordHasher;

/// Keeps every confirmation link instead of sending it
#[derive(Default)]
pub struct RecordingEmailService {
    links: Mutex<Vec<String>>,
}

impl RecordingEmailService {
    pub fn sent_count(&self) -> usize {
        self.links.lock().map(|links| links.len()).unwrap_or_default()
    }

    pub fn last_link(&self) -> Option<String> {
        self.links.lock().ok().and_then(|links| links.last().cloned())
    }
}

#[async_trait]
impl EmailServiceTrait for RecordingEmailService {
    async fn send_confirmation_email(
        &self,
        _email: &str,
        link: &str,
    ) -> Result<DateTime<Utc>, DomainError> {
        self.links
            .lock()
            .map_err(|e| DomainError::internal(e.to_string()))?
            .push(link.to_string());
        Ok(Utc::now())
    }
}

pub type TestState = AppState<
    MockAuthRepository,
    MockRefreshTokenStore,
    BcryptPasswordHasher,
    MockRegistrationRepository,
    RecordingEmailService,
>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub tokens: Arc<TokenService>,
    pub store: Arc<MockRefreshTokenStore>,
    pub registrations: Arc<MockRegistrationRepository>,
    pub email: Arc<RecordingEmailService>,
    pub hasher: Arc<BcryptPasswordHasher>,
}

pub async fn context_with(registration_config: RegistrationServiceConfig) -> TestContext {
    let tokens = Arc::new(TokenService::new(
        TokenServiceConfig::default().with_secret("api-test-secret"),
    ));
    let hasher = Arc::new(BcryptPasswordHasher::with_cost(4));

    let auth_repository = Arc::new(MockAuthRepository::new());
    let alice_hash = hasher
        .hash("wonderland")
        .await
        .expect("hashing with a valid cost succeeds");
    auth_repository
        .insert_user(Auth {
            username: "alice".to_string(),
            hashed_password: alice_hash,
            role: Role::User,
            customer_id: Some("2000".to_string()),
        })
        .await;

    let store = Arc::new(MockRefreshTokenStore::new());
    let registrations = Arc::new(MockRegistrationRepository::new());
    let email = Arc::new(RecordingEmailService::default());

    let auth_service = Arc::new(AuthService::new(
        auth_repository,
        Arc::clone(&store),
        Arc::clone(&hasher),
        Arc::clone(&tokens),
    ));
    let registration_service = Arc::new(RegistrationService::new(
        Arc::clone(&registrations),
        Arc::clone(&email),
        Arc::clone(&hasher),
        Arc::clone(&tokens),
        registration_config,
    ));

    TestContext {
        state: web::Data::new(AppState::new(auth_service, registration_service)),
        tokens,
        store,
        registrations,
        email,
        hasher,
    }
}

pub async fn context() -> TestContext {
    context_with(RegistrationServiceConfig::default()).await
}

pub fn no_cooldown() -> RegistrationServiceConfig {
    RegistrationServiceConfig {
        resend_cooldown: Duration::zero(),
        ..RegistrationServiceConfig::default()
    }
}

pub fn registration_body(email: &str, username: &str) -> serde_json::Value {
    serde_json::json!({
        "full_name": "Alice Liddell",
        "country": "UK",
        "zipcode": "OX1 1DP",
        "date_of_birth": "1990-05-04",
        "email": email,
        "username": username,
        "password": "wonderland"
    })
}

/// The `ott` query value of a confirmation link
pub fn ott_from_link(link: &str) -> String {
    link.split("ott=").nth(1).unwrap_or_default().to_string()
}
