//! # Banking Auth Core
//!
//! Domain layer of the banking auth service: token claims and the token
//! codec, authentication and authorization, the registration confirmation
//! workflow, repository contracts, and the error taxonomy.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::{
    AuthError, DomainError, DomainResult, ErrorKind, RegistrationError, TokenError,
    ValidationError,
};
pub use repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
pub use services::{
    AuthService, EmailServiceTrait, PasswordHasherTrait, RegistrationService,
    RegistrationServiceConfig, TokenService, TokenServiceConfig,
};
