//! # Infrastructure Layer
//!
//! Concrete implementations of the core contracts for the banking auth
//! service.
//!
//! - **Database**: MySQL repositories and the refresh token store using SQLx
//! - **Email**: confirmation email delivery (log output or HTTP API)
//! - **Security**: bcrypt password hashing
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email delivery implementations
pub mod email;

/// Password hashing
pub mod security;

#[cfg(feature = "mysql")]
pub use database::{
    DatabasePool, MySqlAuthRepository, MySqlRefreshTokenStore, MySqlRegistrationRepository,
};
pub use email::{create_email_service, HttpEmailService, LogEmailService};
pub use security::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
