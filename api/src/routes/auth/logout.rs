use actix_web::{web, HttpResponse};
use validator::Validate;

use ba_core::repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
use ba_core::services::{EmailServiceTrait, PasswordHasherTrait};

use crate::dto::{LogoutRequest, MessageResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /auth/logout
///
/// Revokes the given refresh token. An expired token is accepted; a token
/// that was already revoked is not.
pub async fn logout<A, S, H, R, E>(
    state: web::Data<AppState<A, S, H, R, E>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    A: AuthRepository + 'static,
    S: RefreshTokenStore + 'static,
    H: PasswordHasherTrait + 'static,
    R: RegistrationRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.logout(&request.refresh_token).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Logged out")),
        Err(error) => handle_domain_error(error),
    }
}
