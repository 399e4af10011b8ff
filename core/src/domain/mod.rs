//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{
    AccessClaims, Auth, ClaimKind, ExpiryPolicy, OneTimeClaims, RefreshClaims, Registration,
    RegistrationStatus, Role, TokenClaims, TokenPair,
};
pub use value_objects::{RegistrationRequest, RegistrationSummary, ResendRequest};
