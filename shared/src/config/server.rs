//! Server and frontend address configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8181,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env_or("SERVER_PORT", defaults.port),
            workers: env_or("SERVER_WORKERS", defaults.workers),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Address of the frontend that serves the registration confirmation page.
///
/// Only used to build the link embedded in confirmation emails.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrontendConfig {
    /// URL scheme (`http` or `https`)
    pub scheme: String,

    /// Host name or address
    pub address: String,

    /// Port
    pub port: u16,

    /// Path of the confirmation page, without a leading slash
    pub confirmation_path: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            scheme: String::from("http"),
            address: String::from("localhost"),
            port: 3000,
            confirmation_path: String::from("register/check"),
        }
    }
}

impl FrontendConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            scheme: std::env::var("FRONTEND_SERVER_SCHEME").unwrap_or(defaults.scheme),
            address: std::env::var("FRONTEND_SERVER_ADDRESS").unwrap_or(defaults.address),
            port: env_or("FRONTEND_SERVER_PORT", defaults.port),
            confirmation_path: defaults.confirmation_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("0.0.0.0", 9000);
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_frontend_from_env() {
        temp_env::with_vars(
            [
                ("FRONTEND_SERVER_ADDRESS", Some("bank.example")),
                ("FRONTEND_SERVER_PORT", Some("8443")),
                ("FRONTEND_SERVER_SCHEME", Some("https")),
            ],
            || {
                let config = FrontendConfig::from_env();
                assert_eq!(config.scheme, "https");
                assert_eq!(config.address, "bank.example");
                assert_eq!(config.port, 8443);
                assert_eq!(config.confirmation_path, "register/check");
            },
        );
    }
}
