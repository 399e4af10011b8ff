//! Mock implementations for testing registration service

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::registration::Registration;
use crate::domain::value_objects::RegistrationRequest;
use crate::errors::DomainError;
use crate::repositories::{MockRegistrationRepository, RegistrationRepository};
use crate::services::auth::PasswordHasherTrait;
use crate::services::registration::{
    EmailServiceTrait, RegistrationService, RegistrationServiceConfig,
};
use crate::services::token::{TokenService, TokenServiceConfig};

/// Records every confirmation email instead of sending it
#[derive(Default)]
pub struct MockEmailService {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: AtomicBool,
}

impl MockEmailService {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_link(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, link)| link.clone())
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_confirmation_email(
        &self,
        email: &str,
        link: &str,
    ) -> Result<DateTime<Utc>, DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("smtp unavailable"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), link.to_string()));
        Ok(Utc::now())
    }
}

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

/// Repository whose pre-checks always pass, as if a concurrent request
/// inserted between the check and the write
#[derive(Clone, Default)]
pub struct RacingRegistrationRepository {
    pub inner: MockRegistrationRepository,
}

#[async_trait]
impl RegistrationRepository for RacingRegistrationRepository {
    async fn is_email_used(&self, _email: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn is_username_taken(&self, _username: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn save(&self, registration: &Registration) -> Result<(), DomainError> {
        self.inner.save(registration).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError> {
        self.inner.find_by_email(email).await
    }

    async fn update_last_emailed(
        &self,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.inner.update_last_emailed(email, at).await
    }

    async fn create_necessary_accounts(
        &self,
        registration: &Registration,
    ) -> Result<String, DomainError> {
        self.inner.create_necessary_accounts(registration).await
    }

    async fn update(&self, registration: &Registration) -> Result<(), DomainError> {
        self.inner.update(registration).await
    }
}

pub struct TestContext<R: RegistrationRepository> {
    pub service: Arc<RegistrationService<R, MockEmailService, MockPasswordHasher>>,
    pub repository: Arc<R>,
    pub email: Arc<MockEmailService>,
    pub tokens: Arc<TokenService>,
}

pub fn context_with<R: RegistrationRepository>(
    repository: R,
    config: RegistrationServiceConfig,
) -> TestContext<R> {
    let repository = Arc::new(repository);
    let email = Arc::new(MockEmailService::default());
    let tokens = Arc::new(TokenService::new(
        TokenServiceConfig::default().with_secret("registration-test-secret"),
    ));
    let service = Arc::new(RegistrationService::new(
        Arc::clone(&repository),
        Arc::clone(&email),
        Arc::new(MockPasswordHasher),
        Arc::clone(&tokens),
        config,
    ));

    TestContext {
        service,
        repository,
        email,
        tokens,
    }
}

pub fn context() -> TestContext<MockRegistrationRepository> {
    context_with(
        MockRegistrationRepository::new(),
        RegistrationServiceConfig::default(),
    )
}

pub fn request(email: &str, username: &str) -> RegistrationRequest {
    RegistrationRequest {
        full_name: "Alice Liddell".to_string(),
        country: "UK".to_string(),
        zipcode: "OX1 1DP".to_string(),
        date_of_birth: "1990-05-04".to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password: "wonderland".to_string(),
    }
}

/// Extracts the one-time token from a confirmation link
pub fn ott_from_link(link: &str) -> String {
    let url = url::Url::parse(link).unwrap();
    url.query_pairs()
        .find(|(key, _)| key == "ott")
        .map(|(_, value)| value.into_owned())
        .unwrap()
}
