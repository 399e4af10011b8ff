//! Token claim entities for JWT-based authentication.
//!
//! Every signed payload carries an explicit `kind` discriminator, so a token
//! of one kind can never be mistaken for another when decoded.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::Role;

/// Discriminator of the three token kinds issued by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    /// Short-lived credential for protected operations
    Access,
    /// Store-backed credential used to mint new access tokens
    Refresh,
    /// Short-lived token gating registration confirmation
    OneTime,
}

impl std::fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimKind::Access => write!(f, "access"),
            ClaimKind::Refresh => write!(f, "refresh"),
            ClaimKind::OneTime => write!(f, "one-time"),
        }
    }
}

/// How validation treats a token whose expiry has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Expired tokens are rejected
    Strict,
    /// Expired tokens are accepted; only for refreshing an access token,
    /// logging out with a stale refresh token, and resending a confirmation link
    AllowExpired,
}

/// Returns true when `exp` is at or before `now`.
pub fn is_expired_at(exp: i64, now: DateTime<Utc>) -> bool {
    exp <= now.timestamp()
}

/// Claims of an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (username)
    pub sub: String,

    /// Role of the user
    pub role: Role,

    /// Customer the user acts for, if any
    pub customer_id: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique per issued access token; shared with its refresh token
    pub jti: String,
}

impl AccessClaims {
    /// Creates access claims issued now
    pub fn new(username: &str, role: Role, customer_id: Option<String>, ttl: Duration) -> Self {
        Self::issued_at(username, role, customer_id, Utc::now(), ttl)
    }

    /// Creates access claims issued at `now`
    pub fn issued_at(
        username: &str,
        role: Role,
        customer_id: Option<String>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: username.to_string(),
            role,
            customer_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Derives the refresh claims paired with this access token.
    ///
    /// The result depends only on these claims and `ttl`: same identity,
    /// same issue time and token id, longer expiry.
    pub fn as_refresh_claims(&self, ttl: Duration) -> RefreshClaims {
        RefreshClaims {
            sub: self.sub.clone(),
            role: self.role,
            customer_id: self.customer_id.clone(),
            iat: self.iat,
            exp: self.iat + ttl.num_seconds(),
            jti: self.jti.clone(),
        }
    }

    /// Gets the username from the claims
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        is_expired_at(self.exp, Utc::now())
    }
}

/// Claims of a refresh token.
///
/// Only built from [`AccessClaims::as_refresh_claims`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (username)
    pub sub: String,

    /// Role needed to re-derive an access token
    pub role: Role,

    /// Customer needed to re-derive an access token
    pub customer_id: Option<String>,

    /// Issued at timestamp (of the originating access token)
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Token id of the originating access token
    pub jti: String,
}

impl RefreshClaims {
    /// Builds fresh access claims carrying the same identity
    pub fn as_access_claims(&self, ttl: Duration) -> AccessClaims {
        AccessClaims::new(&self.sub, self.role, self.customer_id.clone(), ttl)
    }

    /// Gets the username from the claims
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        is_expired_at(self.exp, Utc::now())
    }
}

/// Claims of a one-time registration token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeClaims {
    /// Email address of the registration
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl OneTimeClaims {
    /// Creates one-time claims issued now
    pub fn new(email: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        is_expired_at(self.exp, Utc::now())
    }
}

/// The signed payload of any token, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenClaims {
    Access(AccessClaims),
    Refresh(RefreshClaims),
    OneTime(OneTimeClaims),
}

impl TokenClaims {
    /// The kind of token these claims belong to
    pub fn kind(&self) -> ClaimKind {
        match self {
            TokenClaims::Access(_) => ClaimKind::Access,
            TokenClaims::Refresh(_) => ClaimKind::Refresh,
            TokenClaims::OneTime(_) => ClaimKind::OneTime,
        }
    }

    /// Expiration timestamp
    pub fn exp(&self) -> i64 {
        match self {
            TokenClaims::Access(c) => c.exp,
            TokenClaims::Refresh(c) => c.exp,
            TokenClaims::OneTime(c) => c.exp,
        }
    }

    /// Checks expiry against `now`; the boundary is exclusive
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        is_expired_at(self.exp(), now)
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Token pair returned after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token, present in the refresh token store
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
