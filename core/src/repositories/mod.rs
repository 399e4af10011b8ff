//! Repository and store traits implemented by the infrastructure layer.

pub mod auth;
pub mod refresh_token;
pub mod registration;

pub use auth::AuthRepository;
pub use refresh_token::RefreshTokenStore;
pub use registration::RegistrationRepository;

#[cfg(any(test, feature = "mock-services"))]
pub use auth::MockAuthRepository;
#[cfg(any(test, feature = "mock-services"))]
pub use refresh_token::MockRefreshTokenStore;
#[cfg(any(test, feature = "mock-services"))]
pub use registration::MockRegistrationRepository;
