use actix_web::{web, HttpResponse};

use ba_core::errors::{AuthError, DomainError, ValidationError};
use ba_core::repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
use ba_core::services::{EmailServiceTrait, PasswordHasherTrait};

use crate::dto::{MessageResponse, ResendKind, ResendLinkRequest};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /register/resend
///
/// # Request Body
///
/// ```json
/// { "type": "token", "ott": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
/// or
/// ```json
/// { "type": "email", "email": "alice@example.com" }
/// ```
///
/// The token may have expired. Resends are refused while the cooldown since
/// the previous email is running and after the registration is confirmed.
pub async fn resend<A, S, H, R, E>(
    state: web::Data<AppState<A, S, H, R, E>>,
    request: web::Json<ResendLinkRequest>,
) -> HttpResponse
where
    A: AuthRepository + 'static,
    S: RefreshTokenStore + 'static,
    H: PasswordHasherTrait + 'static,
    R: RegistrationRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    let kind = request.kind;
    let Some(resend_request) = request.into_inner().into_resend_request() else {
        let error: DomainError = match kind {
            ResendKind::Token => AuthError::MissingToken.into(),
            ResendKind::Email => ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into(),
        };
        return handle_domain_error(error);
    };

    match state.registration_service.resend_link(resend_request).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Confirmation link sent")),
        Err(error) => handle_domain_error(error),
    }
}
