//! Registration input and output value objects.

use ba_shared::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Sign-up request submitted by a prospective customer
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub country: String,
    pub zipcode: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegistrationRequest {
    /// Trims every field and lower-cases the email so that uniqueness checks
    /// are not defeated by formatting
    pub fn normalized(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            country: self.country.trim().to_string(),
            zipcode: self.zipcode.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            username: self.username.trim().to_string(),
            password: self.password,
        }
    }

    /// Checks every field, reporting the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("full_name", &self.full_name),
            ("country", &self.country),
            ("zipcode", &self.zipcode),
            ("date_of_birth", &self.date_of_birth),
            ("email", &self.email),
            ("username", &self.username),
            ("password", &self.password),
        ];
        for (field, value) in required {
            if !validation::not_empty(value) {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                });
            }
        }

        if !validation::is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !validation::is_valid_username(&self.username) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            });
        }
        if !validation::is_valid_password(&self.password) {
            return Err(ValidationError::InvalidFormat {
                field: "password".to_string(),
            });
        }
        self.parsed_date_of_birth().map(|_| ())
    }

    /// Parses the date of birth
    pub fn parsed_date_of_birth(&self) -> Result<NaiveDate, ValidationError> {
        validation::parse_date_of_birth(&self.date_of_birth).ok_or_else(|| {
            ValidationError::InvalidDate {
                field: "date_of_birth".to_string(),
            }
        })
    }
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Where `resend_link` finds the recipient's email
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendRequest {
    /// From a previously issued one-time token, which may have expired
    UsingToken(String),
    /// From an email address typed by the user
    UsingEmail(String),
}

/// Summary returned after a successful `register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSummary {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub last_emailed_at: Option<DateTime<Utc>>,
}
