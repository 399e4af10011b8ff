//! Value objects representing immutable domain concepts.

pub mod registration;

// Re-export commonly used types
pub use registration::{RegistrationRequest, RegistrationSummary, ResendRequest};
