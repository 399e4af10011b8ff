//! Configuration for the registration service

use ba_shared::config::{FrontendConfig, JwtConfig, RegistrationConfig};
use chrono::Duration;

/// Configuration for the registration service
#[derive(Debug, Clone)]
pub struct RegistrationServiceConfig {
    /// Frontend serving the confirmation page
    pub frontend: FrontendConfig,
    /// Lifetime of the one-time token embedded in confirmation links
    pub one_time_token_ttl: Duration,
    /// Minimum delay between two confirmation emails
    pub resend_cooldown: Duration,
}

impl Default for RegistrationServiceConfig {
    fn default() -> Self {
        Self::new(
            &FrontendConfig::default(),
            &JwtConfig::default(),
            &RegistrationConfig::default(),
        )
    }
}

impl RegistrationServiceConfig {
    pub fn new(
        frontend: &FrontendConfig,
        jwt: &JwtConfig,
        registration: &RegistrationConfig,
    ) -> Self {
        Self {
            frontend: frontend.clone(),
            one_time_token_ttl: Duration::seconds(jwt.one_time_token_expiry),
            resend_cooldown: Duration::seconds(registration.resend_cooldown_seconds),
        }
    }
}
