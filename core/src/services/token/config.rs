//! Configuration for the token service

use ba_shared::config::JwtConfig;
use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HMAC secret shared by every token kind
    pub jwt_secret: String,
    /// The only algorithm accepted in token headers
    pub algorithm: Algorithm,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime, counted from the access token's issue time
    pub refresh_token_ttl: Duration,
    /// Default one-time token lifetime
    pub one_time_token_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            algorithm: Algorithm::HS256,
            access_token_ttl: Duration::seconds(jwt.access_token_expiry),
            refresh_token_ttl: Duration::seconds(jwt.refresh_token_expiry),
            one_time_token_ttl: Duration::seconds(jwt.one_time_token_expiry),
        }
    }
}

impl TokenServiceConfig {
    /// Build from the loaded JWT settings.
    ///
    /// Only the HMAC family is supported since every token is signed with
    /// the shared secret.
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = match config.algorithm.to_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(DomainError::internal(format!(
                    "unsupported JWT algorithm {other}"
                )))
            }
        };

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_ttl: Duration::seconds(config.access_token_expiry),
            refresh_token_ttl: Duration::seconds(config.refresh_token_expiry),
            one_time_token_ttl: Duration::seconds(config.one_time_token_expiry),
        })
    }

    /// Same settings with a different secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = secret.into();
        self
    }
}
