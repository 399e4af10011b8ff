//! Email delivery and registration policy configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Email provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Write the confirmation link to the log instead of sending it
    Log,
    /// POST the message to an HTTP email API
    Http,
}

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Provider used to deliver confirmation emails
    pub provider: EmailProvider,

    /// Endpoint of the HTTP email API
    #[serde(default)]
    pub api_url: Option<String>,

    /// Bearer key for the HTTP email API
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address
    pub from_address: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Log,
            api_url: None,
            api_key: None,
            from_address: String::from("no-reply@banking.local"),
            timeout_seconds: 10,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let provider = match std::env::var("EMAIL_PROVIDER").as_deref() {
            Ok("http") => EmailProvider::Http,
            _ => EmailProvider::Log,
        };
        Self {
            provider,
            api_url: std::env::var("EMAIL_API_URL").ok(),
            api_key: std::env::var("EMAIL_API_KEY").ok(),
            from_address: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_address),
            timeout_seconds: env_or("EMAIL_TIMEOUT", defaults.timeout_seconds),
        }
    }
}

/// Registration workflow policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Minimum number of seconds between two confirmation emails
    pub resend_cooldown_seconds: i64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: 300,
        }
    }
}

impl RegistrationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            resend_cooldown_seconds: env_or(
                "REGISTRATION_RESEND_COOLDOWN",
                Self::default().resend_cooldown_seconds,
            ),
        }
    }
}
