use serde::{Deserialize, Serialize};
use validator::Validate;

use ba_core::domain::value_objects::{RegistrationRequest, ResendRequest};

/// Body of `POST /register`.
///
/// The registration workflow applies the full field rules again after
/// normalizing the input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 128))]
    pub full_name: String,
    #[validate(length(max = 64))]
    pub country: String,
    #[validate(length(max = 16))]
    pub zipcode: String,
    /// `YYYY-MM-DD`
    #[validate(length(max = 10))]
    pub date_of_birth: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

impl From<RegisterRequest> for RegistrationRequest {
    fn from(body: RegisterRequest) -> Self {
        RegistrationRequest {
            full_name: body.full_name,
            country: body.country,
            zipcode: body.zipcode,
            date_of_birth: body.date_of_birth,
            email: body.email,
            username: body.username,
            password: body.password,
        }
    }
}

/// Query of `GET /register/check`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckQuery {
    pub ott: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResendKind {
    Token,
    Email,
}

/// Body of `POST /register/resend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendLinkRequest {
    #[serde(rename = "type")]
    pub kind: ResendKind,
    #[serde(default)]
    pub ott: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ResendLinkRequest {
    /// Pick the identifier named by `type`, or `None` when it is absent
    pub fn into_resend_request(self) -> Option<ResendRequest> {
        match self.kind {
            ResendKind::Token => self
                .ott
                .filter(|ott| !ott.trim().is_empty())
                .map(ResendRequest::UsingToken),
            ResendKind::Email => self.email.map(ResendRequest::UsingEmail),
        }
    }
}
