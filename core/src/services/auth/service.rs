//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::auth::Role;
use crate::domain::entities::token::{ExpiryPolicy, TokenPair};
use crate::errors::{AuthError, DomainError, DomainResult, LOGOUT_FAILED_MESSAGE};
use crate::repositories::{AuthRepository, RefreshTokenStore};
use crate::services::token::TokenService;

use super::traits::PasswordHasherTrait;

/// Authentication service for credential checks and the token lifecycle
pub struct AuthService<A, S, H>
where
    A: AuthRepository,
    S: RefreshTokenStore,
    H: PasswordHasherTrait,
{
    /// Credential and ownership lookups
    auth_repository: Arc<A>,
    /// Set of valid refresh tokens
    refresh_token_store: Arc<S>,
    /// Password verification
    password_hasher: Arc<H>,
    /// Token signing and validation
    token_service: Arc<TokenService>,
}

impl<A, S, H> AuthService<A, S, H>
where
    A: AuthRepository,
    S: RefreshTokenStore,
    H: PasswordHasherTrait,
{
    /// Create a new authentication service
    pub fn new(
        auth_repository: Arc<A>,
        refresh_token_store: Arc<S>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_repository,
            refresh_token_store,
            password_hasher,
            token_service,
        }
    }

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// Unknown users and wrong passwords fail with the same error. The
    /// refresh token is added to the store before the pair is returned.
    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let auth = match self.auth_repository.find_by_username(username).await? {
            Some(auth) => auth,
            None => {
                tracing::warn!(username = %username, "Login attempt for unknown user");
                return Err(AuthError::IncorrectCredentials.into());
            }
        };

        if !self
            .password_hasher
            .verify(&auth.hashed_password, password)
            .await?
        {
            tracing::warn!(username = %username, "Login attempt with wrong password");
            return Err(AuthError::IncorrectCredentials.into());
        }

        let claims = auth.access_claims(self.token_service.access_token_ttl());
        let access_token = self.token_service.sign_access_token(&claims)?;
        let refresh_token = self.token_service.derive_refresh_token(&claims)?;

        self.refresh_token_store.put(&refresh_token).await?;

        tracing::info!(username = %username, role = %auth.role, "User authenticated");
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Issue a new access token once the presented one has expired.
    ///
    /// The access token may be expired but must otherwise be valid; the
    /// refresh token must be valid, unexpired, present in the store and
    /// belong to the same subject. The old refresh token stays valid.
    pub async fn refresh(&self, access_token: &str, refresh_token: &str) -> DomainResult<String> {
        let access = self
            .token_service
            .validate_access_token(access_token, ExpiryPolicy::AllowExpired)?;
        if !access.is_expired() {
            tracing::warn!(username = %access.sub, "Refresh requested for a live access token");
            return Err(AuthError::AccessTokenNotExpired.into());
        }

        let refresh = self
            .token_service
            .validate_refresh_token(refresh_token, ExpiryPolicy::Strict)?;

        if !self.refresh_token_store.exists(refresh_token).await? {
            tracing::warn!(username = %refresh.sub, "Refresh token not in store");
            return Err(AuthError::RefreshTokenRevoked.into());
        }

        if access.sub != refresh.sub {
            tracing::warn!(
                access_subject = %access.sub,
                refresh_subject = %refresh.sub,
                "Access and refresh tokens belong to different users"
            );
            return Err(AuthError::TokenSubjectMismatch.into());
        }

        let claims = refresh.as_access_claims(self.token_service.access_token_ttl());
        let token = self.token_service.sign_access_token(&claims)?;

        tracing::info!(username = %claims.sub, "Access token refreshed");
        Ok(token)
    }

    /// Revoke a refresh token. Exactly one store entry must be removed.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let refresh = self
            .token_service
            .validate_refresh_token(refresh_token, ExpiryPolicy::AllowExpired)?;

        let removed = self.refresh_token_store.delete(refresh_token).await?;
        if removed != 1 {
            tracing::error!(username = %refresh.sub, removed, "Logout removed an unexpected number of refresh tokens");
            return Err(DomainError::Invariant {
                message: format!("logout removed {removed} refresh tokens"),
                public: LOGOUT_FAILED_MESSAGE.to_string(),
            });
        }

        tracing::info!(username = %refresh.sub, "User logged out");
        Ok(())
    }

    /// Confirm that a user with this role (and customer, when given) exists
    pub async fn authorize(
        &self,
        username: &str,
        role: Role,
        customer_id: Option<&str>,
    ) -> DomainResult<()> {
        if self
            .auth_repository
            .user_exists(username, role, customer_id)
            .await?
        {
            Ok(())
        } else {
            tracing::warn!(username = %username, role = %role, "Authorization denied");
            Err(DomainError::Authorization {
                message: "Cannot continue".to_string(),
            })
        }
    }

    /// Confirm that an account belongs to a customer
    pub async fn check_account_ownership(
        &self,
        account_id: &str,
        customer_id: &str,
    ) -> DomainResult<()> {
        if self
            .auth_repository
            .is_account_under_customer(account_id, customer_id)
            .await?
        {
            Ok(())
        } else {
            tracing::warn!(account_id = %account_id, customer_id = %customer_id, "Account ownership check failed");
            Err(DomainError::Authorization {
                message: "Account does not belong to customer".to_string(),
            })
        }
    }
}
