//! Domain entities representing core business objects.

pub mod auth;
pub mod registration;
pub mod token;

// Re-export commonly used types
pub use auth::{Auth, Role};
pub use registration::{Registration, RegistrationStatus};
pub use token::{
    AccessClaims, ClaimKind, ExpiryPolicy, OneTimeClaims, RefreshClaims, TokenClaims, TokenPair,
};
