//! Registration service module
//!
//! Drives a sign-up from submission through the emailed one-time link to
//! account provisioning.

mod config;
mod link;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::RegistrationServiceConfig;
pub use link::{build_confirmation_url, ONE_TIME_TOKEN_PARAM};
pub use service::RegistrationService;
pub use traits::EmailServiceTrait;
