//! Credential record used to authenticate users.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::token::AccessClaims;

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Bank staff with access to every customer
    Admin,
    /// Customer-facing account bound to one customer
    User,
}

impl Role {
    /// Storage representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Credential record loaded from storage; used only for verification
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    pub username: String,
    pub hashed_password: String,
    pub role: Role,
    pub customer_id: Option<String>,
}

impl Auth {
    /// Builds the access claims for a freshly authenticated user
    pub fn access_claims(&self, ttl: Duration) -> AccessClaims {
        AccessClaims::new(&self.username, self.role, self.customer_id.clone(), ttl)
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("username", &self.username)
            .field("role", &self.role)
            .field("customer_id", &self.customer_id)
            .finish_non_exhaustive()
    }
}
