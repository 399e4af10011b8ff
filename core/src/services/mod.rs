//! Business services containing domain logic and use cases.

pub mod auth;
pub mod registration;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasherTrait};
pub use registration::{EmailServiceTrait, RegistrationService, RegistrationServiceConfig};
pub use token::{TokenService, TokenServiceConfig};
