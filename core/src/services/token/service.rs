//! Token codec: signs and validates access, refresh and one-time tokens

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, decode_header, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{
    is_expired_at, AccessClaims, ClaimKind, ExpiryPolicy, OneTimeClaims, RefreshClaims,
    TokenClaims,
};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Stateless JWT codec pinned to a single HMAC algorithm.
///
/// Immutable after construction; share it behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked against the claims after decoding so that
        // `ExpiryPolicy::AllowExpired` can still return them.
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Lifetime of newly issued access tokens
    pub fn access_token_ttl(&self) -> Duration {
        self.config.access_token_ttl
    }

    /// Default lifetime of one-time tokens
    pub fn one_time_token_ttl(&self) -> Duration {
        self.config.one_time_token_ttl
    }

    /// Signs access claims
    pub fn sign_access_token(&self, claims: &AccessClaims) -> DomainResult<String> {
        self.encode_jwt(&TokenClaims::Access(claims.clone()))
    }

    /// Signs the refresh token paired with an issued access token.
    ///
    /// Refresh claims are always derived from the access claims, so the same
    /// access claims always yield the same refresh token.
    pub fn derive_refresh_token(&self, access: &AccessClaims) -> DomainResult<String> {
        let refresh = access.as_refresh_claims(self.config.refresh_token_ttl);
        self.encode_jwt(&TokenClaims::Refresh(refresh))
    }

    /// Signs a one-time token binding `email`
    pub fn sign_one_time_token(&self, email: &str, ttl: Duration) -> DomainResult<String> {
        self.encode_jwt(&TokenClaims::OneTime(OneTimeClaims::new(email, ttl)))
    }

    /// Parses a token and validates it as `expected`.
    ///
    /// Order of checks:
    /// 1. the header algorithm must be the configured one
    /// 2. the signature must verify
    /// 3. the claims must be of the expected kind
    /// 4. under [`ExpiryPolicy::Strict`] the token must not be expired
    pub fn parse_and_validate(
        &self,
        token: &str,
        expected: ClaimKind,
        policy: ExpiryPolicy,
    ) -> DomainResult<TokenClaims> {
        let header = decode_header(token).map_err(|e| {
            tracing::warn!(kind = %expected, error = %e, "Malformed token header");
            TokenError::InvalidToken { kind: expected }
        })?;

        if header.alg != self.config.algorithm {
            tracing::warn!(
                kind = %expected,
                found = ?header.alg,
                "Rejected token signed with unexpected algorithm"
            );
            return Err(TokenError::AlgorithmMismatch {
                expected: format!("{:?}", self.config.algorithm),
                found: format!("{:?}", header.alg),
            }
            .into());
        }

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::Json(_) => {
                    tracing::error!(kind = %expected, error = %e, "Signed token carries undecodable claims");
                    DomainError::internal(format!("undecodable {expected} token claims: {e}"))
                }
                _ => {
                    tracing::warn!(kind = %expected, error = %e, "Token failed verification");
                    TokenError::InvalidToken { kind: expected }.into()
                }
            })?;

        if claims.kind() != expected {
            tracing::error!(expected = %expected, found = %claims.kind(), "Token of unexpected kind");
            return Err(TokenError::UnexpectedClaims {
                expected,
                found: claims.kind(),
            }
            .into());
        }

        if policy == ExpiryPolicy::Strict && self.is_expired(&claims) {
            tracing::warn!(kind = %expected, "Token expired");
            return Err(TokenError::ExpiredToken { kind: expected }.into());
        }

        Ok(claims)
    }

    /// Validates an access token
    pub fn validate_access_token(
        &self,
        token: &str,
        policy: ExpiryPolicy,
    ) -> DomainResult<AccessClaims> {
        match self.parse_and_validate(token, ClaimKind::Access, policy)? {
            TokenClaims::Access(claims) => Ok(claims),
            other => Err(Self::unexpected(ClaimKind::Access, &other)),
        }
    }

    /// Validates the signature and expiry of a refresh token.
    ///
    /// Store membership is checked by the caller.
    pub fn validate_refresh_token(
        &self,
        token: &str,
        policy: ExpiryPolicy,
    ) -> DomainResult<RefreshClaims> {
        match self.parse_and_validate(token, ClaimKind::Refresh, policy)? {
            TokenClaims::Refresh(claims) => Ok(claims),
            other => Err(Self::unexpected(ClaimKind::Refresh, &other)),
        }
    }

    /// Validates a one-time registration token
    pub fn validate_one_time_token(
        &self,
        token: &str,
        policy: ExpiryPolicy,
    ) -> DomainResult<OneTimeClaims> {
        match self.parse_and_validate(token, ClaimKind::OneTime, policy)? {
            TokenClaims::OneTime(claims) => Ok(claims),
            other => Err(Self::unexpected(ClaimKind::OneTime, &other)),
        }
    }

    /// True when the claims expire now or earlier
    pub fn is_expired(&self, claims: &TokenClaims) -> bool {
        is_expired_at(claims.exp(), Utc::now())
    }

    fn encode_jwt(&self, claims: &TokenClaims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(kind = %claims.kind(), error = %e, "Failed to sign token");
            TokenError::SigningFailed {
                kind: claims.kind(),
            }
            .into()
        })
    }

    fn unexpected(expected: ClaimKind, found: &TokenClaims) -> DomainError {
        TokenError::UnexpectedClaims {
            expected,
            found: found.kind(),
        }
        .into()
    }
}
