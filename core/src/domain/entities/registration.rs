//! Registration entity tracking a sign-up from submission to confirmation.
//!
//! Lifecycle: `Created` → `LinkSent` (resent any number of times) → `Confirmed`.
//! `Confirmed` is terminal.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RegistrationRequest, RegistrationSummary};
use crate::errors::{RegistrationError, ValidationError};

/// Lifecycle state derived from the registration timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Persisted, no confirmation email sent yet
    Created,
    /// At least one confirmation email sent
    LinkSent,
    /// Accounts provisioned
    Confirmed,
}

/// Pending-signup record, keyed by its unique email
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub country: String,
    pub zipcode: String,
    pub date_of_birth: NaiveDate,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_emailed_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Assigned when the registration is confirmed
    pub customer_id: Option<String>,
}

impl Registration {
    /// Creates a registration in the `Created` state from a validated request
    pub fn new(
        request: &RegistrationRequest,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            email: request.email.clone(),
            username: request.username.clone(),
            full_name: request.full_name.clone(),
            country: request.country.clone(),
            zipcode: request.zipcode.clone(),
            date_of_birth: request.parsed_date_of_birth()?,
            password_hash,
            created_at: now,
            last_emailed_at: None,
            confirmed_at: None,
            customer_id: None,
        })
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }

    pub fn status(&self) -> RegistrationStatus {
        if self.is_confirmed() {
            RegistrationStatus::Confirmed
        } else if self.last_emailed_at.is_some() {
            RegistrationStatus::LinkSent
        } else {
            RegistrationStatus::Created
        }
    }

    /// Resend policy: never after confirmation, and not within `cooldown` of
    /// the previous email. A registration that was never emailed may always
    /// be resent.
    pub fn can_resend_email(
        &self,
        now: DateTime<Utc>,
        cooldown: Duration,
    ) -> Result<(), RegistrationError> {
        if self.is_confirmed() {
            return Err(RegistrationError::AlreadyConfirmed);
        }

        match self.last_emailed_at {
            Some(last) if now < last + cooldown => Err(RegistrationError::ResendTooSoon {
                retry_after_seconds: (last + cooldown - now).num_seconds().max(1),
            }),
            _ => Ok(()),
        }
    }

    /// Records a successful confirmation email
    pub fn mark_emailed(&mut self, at: DateTime<Utc>) {
        self.last_emailed_at = Some(at);
    }

    /// Transitions to `Confirmed` with the provisioned customer
    pub fn confirm(self, customer_id: String, at: DateTime<Utc>) -> Self {
        Self {
            confirmed_at: Some(at),
            customer_id: Some(customer_id),
            ..self
        }
    }

    pub fn to_summary(&self) -> RegistrationSummary {
        RegistrationSummary {
            email: self.email.clone(),
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            created_at: self.created_at,
            last_emailed_at: self.last_emailed_at,
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("status", &self.status())
            .field("customer_id", &self.customer_id)
            .finish_non_exhaustive()
    }
}
