//! Main registration service implementation

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::registration::Registration;
use crate::domain::entities::token::ExpiryPolicy;
use crate::domain::value_objects::{RegistrationRequest, RegistrationSummary, ResendRequest};
use crate::errors::{DomainResult, RegistrationError, ValidationError};
use crate::repositories::RegistrationRepository;
use crate::services::auth::PasswordHasherTrait;
use crate::services::token::TokenService;

use super::config::RegistrationServiceConfig;
use super::link::build_confirmation_url;
use super::traits::EmailServiceTrait;

/// Registration workflow service
pub struct RegistrationService<R, E, H>
where
    R: RegistrationRepository,
    E: EmailServiceTrait,
    H: PasswordHasherTrait,
{
    /// Registration persistence and account provisioning
    repository: Arc<R>,
    /// Confirmation email delivery
    email_service: Arc<E>,
    /// Password hashing for new registrations
    password_hasher: Arc<H>,
    /// One-time token signing and validation
    token_service: Arc<TokenService>,
    /// Service configuration
    config: RegistrationServiceConfig,
}

impl<R, E, H> RegistrationService<R, E, H>
where
    R: RegistrationRepository,
    E: EmailServiceTrait,
    H: PasswordHasherTrait,
{
    /// Create a new registration service
    pub fn new(
        repository: Arc<R>,
        email_service: Arc<E>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
        config: RegistrationServiceConfig,
    ) -> Self {
        Self {
            repository,
            email_service,
            password_hasher,
            token_service,
            config,
        }
    }

    /// Register a new user and email the confirmation link
    ///
    /// This method:
    /// 1. Validates the request
    /// 2. Rejects a used email, then a taken username
    /// 3. Persists the registration; the repository enforces uniqueness
    /// 4. Sends the confirmation link
    ///
    /// A failure in step 4 is returned, but the registration stays stored and
    /// can be retried with [`Self::resend_link`].
    pub async fn register(&self, request: RegistrationRequest) -> DomainResult<RegistrationSummary> {
        let request = request.normalized();
        request.validate()?;

        if self.repository.is_email_used(&request.email).await? {
            tracing::warn!(email = %request.email, "Registration with used email");
            return Err(RegistrationError::EmailAlreadyUsed.into());
        }
        if self.repository.is_username_taken(&request.username).await? {
            tracing::warn!(username = %request.username, "Registration with taken username");
            return Err(RegistrationError::UsernameTaken.into());
        }

        let password_hash = self.password_hasher.hash(&request.password).await?;
        let mut registration = Registration::new(&request, password_hash, Utc::now())?;
        self.repository.save(&registration).await?;

        tracing::info!(
            email = %registration.email,
            username = %registration.username,
            "Registration created"
        );

        self.send_link(&mut registration).await?;
        Ok(registration.to_summary())
    }

    /// Report whether the registration bound to a one-time token is confirmed
    pub async fn check_registration(&self, one_time_token: &str) -> DomainResult<bool> {
        let registration = self
            .registration_for_token(one_time_token, ExpiryPolicy::Strict)
            .await?;
        Ok(registration.is_confirmed())
    }

    /// Send the confirmation link again, subject to the resend policy.
    ///
    /// A one-time token identifying the registration may have expired.
    pub async fn resend_link(&self, request: ResendRequest) -> DomainResult<()> {
        let mut registration = match request {
            ResendRequest::UsingToken(token) => {
                self.registration_for_token(&token, ExpiryPolicy::AllowExpired)
                    .await?
            }
            ResendRequest::UsingEmail(email) => {
                let email = email.trim().to_lowercase();
                if email.is_empty() {
                    return Err(ValidationError::RequiredField {
                        field: "email".to_string(),
                    }
                    .into());
                }
                self.find_registration(&email).await?
            }
        };

        registration
            .can_resend_email(Utc::now(), self.config.resend_cooldown)
            .inspect_err(|e| {
                tracing::warn!(email = %registration.email, reason = %e, "Resend refused");
            })?;

        self.send_link(&mut registration).await
    }

    /// Provision the accounts of a registration and mark it confirmed.
    ///
    /// A registration that is already confirmed is rejected with
    /// `RegistrationError::AlreadyConfirmed` and nothing is changed.
    pub async fn finish_registration(&self, one_time_token: &str) -> DomainResult<()> {
        let registration = self
            .registration_for_token(one_time_token, ExpiryPolicy::Strict)
            .await?;

        if registration.is_confirmed() {
            tracing::warn!(email = %registration.email, "Registration already confirmed");
            return Err(RegistrationError::AlreadyConfirmed.into());
        }

        let customer_id = self
            .repository
            .create_necessary_accounts(&registration)
            .await?;
        let confirmed = registration.confirm(customer_id, Utc::now());
        self.repository.update(&confirmed).await?;

        tracing::info!(
            email = %confirmed.email,
            customer_id = ?confirmed.customer_id,
            "Registration confirmed"
        );
        Ok(())
    }

    /// Sign a one-time token, email the link and record when it was sent
    async fn send_link(&self, registration: &mut Registration) -> DomainResult<()> {
        let token = self
            .token_service
            .sign_one_time_token(&registration.email, self.config.one_time_token_ttl)?;
        let url = build_confirmation_url(&self.config.frontend, &token)?;

        let sent_at = self
            .email_service
            .send_confirmation_email(&registration.email, url.as_str())
            .await
            .inspect_err(|e| {
                tracing::error!(email = %registration.email, error = %e, "Failed to send confirmation email");
            })?;

        self.repository
            .update_last_emailed(&registration.email, sent_at)
            .await?;
        registration.mark_emailed(sent_at);

        tracing::info!(email = %registration.email, "Confirmation link sent");
        Ok(())
    }

    async fn registration_for_token(
        &self,
        one_time_token: &str,
        policy: ExpiryPolicy,
    ) -> DomainResult<Registration> {
        let claims = self
            .token_service
            .validate_one_time_token(one_time_token, policy)?;
        self.find_registration(&claims.email).await
    }

    async fn find_registration(&self, email: &str) -> DomainResult<Registration> {
        match self.repository.find_by_email(email).await? {
            Some(registration) => Ok(registration),
            None => {
                tracing::warn!(email = %email, "No registration for email");
                Err(RegistrationError::NotFound.into())
            }
        }
    }
}
