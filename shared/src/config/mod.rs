//! Configuration module with business-specific sub-modules
//!
//! - `auth` - token signing and expiry
//! - `database` - MySQL connection pool
//! - `email` - confirmation email delivery and resend policy
//! - `environment` - environment detection and logging
//! - `server` - HTTP server and frontend address

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use email::{EmailConfig, EmailProvider, RegistrationConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{FrontendConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Confirmation link target
    pub frontend: FrontendConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// Registration policy
    pub registration: RegistrationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            frontend: FrontendConfig::from_env(),
            email: EmailConfig::from_env(),
            registration: RegistrationConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}

/// Read and parse an environment variable, falling back to `default` when it is
/// missing or malformed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
