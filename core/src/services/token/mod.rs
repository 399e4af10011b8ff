//! Token service module for JWT management
//!
//! Signs and validates the three token kinds (access, refresh, one-time)
//! with a single pinned HMAC algorithm and explicit expiry policy.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
