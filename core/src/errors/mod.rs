//! Domain-specific error types and error handling.
//!
//! Every core operation fails with a [`DomainError`]. Callers that only need the
//! coarse taxonomy (status code and short message) use [`DomainError::kind`] and
//! [`DomainError::public_message`]; the detailed variants are for logging.

mod types;


pub use types::{AuthError, RegistrationError, TokenError, ValidationError};

use thiserror::Error;

/// Message shown for every unexpected failure
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected server-side error";

/// Message shown when a logout did not remove exactly one refresh token
pub const LOGOUT_FAILED_MESSAGE: &str = "Failed to log out";

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Authorization error: {message}")]
    Authorization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// An invariant was violated; `public` is safe to show, `message` is for logs
    #[error("Invariant violated: {message}")]
    Invariant { message: String, public: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Caller-facing error classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input
    Validation,
    /// Bad credentials, invalid/expired/malformed/missing token
    Authentication,
    /// Role or ownership mismatch
    Authorization,
    /// Storage failure, signing failure, invariant violation
    Unexpected,
}

impl ErrorKind {
    /// HTTP status code for this error class
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Authentication => 401,
            ErrorKind::Authorization => 403,
            ErrorKind::Unexpected => 500,
        }
    }
}

impl DomainError {
    /// Build an internal error from any displayable cause
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Collapse this error into the caller-facing taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ValidationErr(_) => ErrorKind::Validation,
            DomainError::Authorization { .. } => ErrorKind::Authorization,
            DomainError::Internal { .. } | DomainError::Invariant { .. } => ErrorKind::Unexpected,
            DomainError::Auth(_) => ErrorKind::Authentication,
            DomainError::Token(err) => match err {
                TokenError::UnexpectedClaims { .. } | TokenError::SigningFailed { .. } => {
                    ErrorKind::Unexpected
                }
                TokenError::AlgorithmMismatch { .. }
                | TokenError::InvalidToken { .. }
                | TokenError::ExpiredToken { .. } => ErrorKind::Authentication,
            },
            DomainError::Registration(err) => match err {
                RegistrationError::NotFound => ErrorKind::Authentication,
                RegistrationError::EmailAlreadyUsed
                | RegistrationError::UsernameTaken
                | RegistrationError::AlreadyConfirmed
                | RegistrationError::ResendTooSoon { .. } => ErrorKind::Validation,
            },
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Short message that is safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Internal { .. } => UNEXPECTED_ERROR_MESSAGE.to_string(),
            DomainError::Invariant { public, .. } => public.clone(),
            DomainError::Token(TokenError::UnexpectedClaims { .. })
            | DomainError::Token(TokenError::SigningFailed { .. }) => {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            }
            DomainError::Token(TokenError::AlgorithmMismatch { .. }) => {
                "Invalid token".to_string()
            }
            DomainError::Authorization { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
