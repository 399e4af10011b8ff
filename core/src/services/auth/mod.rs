//! Authentication service module
//!
//! Credential checks, token pair issuance, access token refresh, logout and
//! authorization of protected actions.

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::AuthService;
pub use traits::PasswordHasherTrait;
