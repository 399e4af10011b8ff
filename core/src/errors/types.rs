//! Specific error types for authentication, tokens, registration and validation
//!
//! These errors carry enough detail for logging. What a caller is allowed to
//! see is decided by [`super::DomainError::public_message`].

use thiserror::Error;

use crate::domain::entities::token::ClaimKind;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user or wrong password; the two cases are deliberately indistinguishable
    #[error("Incorrect username or password")]
    IncorrectCredentials,

    #[error("Cannot generate new access token until current one expires")]
    AccessTokenNotExpired,

    #[error("Refresh token has been revoked")]
    RefreshTokenRevoked,

    #[error("Access token and refresh token belong to different users")]
    TokenSubjectMismatch,

    #[error("Missing token")]
    MissingToken,
}

/// Token signing and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unexpected signing method: expected {expected}, found {found}")]
    AlgorithmMismatch { expected: String, found: String },

    #[error("Invalid {kind} token")]
    InvalidToken { kind: ClaimKind },

    #[error("Expired {kind} token")]
    ExpiredToken { kind: ClaimKind },

    #[error("Unexpected token claims: expected {expected}, found {found}")]
    UnexpectedClaims { expected: ClaimKind, found: ClaimKind },

    #[error("Failed to sign {kind} token")]
    SigningFailed { kind: ClaimKind },
}

/// Registration workflow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Email is already used")]
    EmailAlreadyUsed,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Registration not found")]
    NotFound,

    #[error("Registration already confirmed")]
    AlreadyConfirmed,

    #[error("Confirmation email was sent recently, retry in {retry_after_seconds} seconds")]
    ResendTooSoon { retry_after_seconds: i64 },
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid date: {field}")]
    InvalidDate { field: String },
}
