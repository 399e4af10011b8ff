//! Email delivery module
//!
//! Implementations of the core `EmailServiceTrait`:
//! - **Log**: writes the confirmation link to the log, for development
//! - **HTTP**: posts the message to a transactional email API

pub mod http_sender;
pub mod log_sender;

pub use http_sender::HttpEmailService;
pub use log_sender::LogEmailService;

use ba_core::services::registration::EmailServiceTrait;
use ba_shared::config::{EmailConfig, EmailProvider};

use crate::InfrastructureError;

/// Subject line of the confirmation email
pub const CONFIRMATION_SUBJECT: &str = "Confirm your registration";

/// Body of the confirmation email
pub fn confirmation_body(link: &str) -> String {
    format!("Please confirm your registration by opening the following link:\n\n{link}\n")
}

/// Create the email service selected by configuration
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Box<dyn EmailServiceTrait>, InfrastructureError> {
    match config.provider {
        EmailProvider::Log => {
            tracing::info!("Using log email service");
            Ok(Box::new(LogEmailService::new(&config.from_address)))
        }
        EmailProvider::Http => {
            let service = HttpEmailService::new(config)?;
            tracing::info!("Using HTTP email service");
            Ok(Box::new(service))
        }
    }
}
