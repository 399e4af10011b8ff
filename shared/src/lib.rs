//! Shared utilities and common types for the banking auth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Input validation helpers

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, EmailConfig, EmailProvider, Environment, FrontendConfig, JwtConfig,
    LogFormat, LoggingConfig, RegistrationConfig, ServerConfig,
};
pub use utils::validation;
