use actix_web::{web, HttpResponse};

use ba_core::repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
use ba_core::services::{EmailServiceTrait, PasswordHasherTrait};

use crate::dto::{CheckQuery, ErrorResponse, MessageResponse};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

pub const ALREADY_CONFIRMED_MESSAGE: &str = "Registration already confirmed";

/// Handler for GET /register/check?ott=<token>
///
/// Answers `{"message": ""}` for a pending registration and
/// `{"message": "Registration already confirmed"}` once it is confirmed.
pub async fn check<A, S, H, R, E>(
    state: web::Data<AppState<A, S, H, R, E>>,
    query: web::Query<CheckQuery>,
) -> HttpResponse
where
    A: AuthRepository + 'static,
    S: RefreshTokenStore + 'static,
    H: PasswordHasherTrait + 'static,
    R: RegistrationRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    let Some(ott) = query.ott.as_deref().filter(|ott| !ott.is_empty()) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new("missing token"));
    };

    match state.registration_service.check_registration(ott).await {
        Ok(true) => HttpResponse::Ok().json(MessageResponse::new(ALREADY_CONFIRMED_MESSAGE)),
        Ok(false) => HttpResponse::Ok().json(MessageResponse::new("")),
        Err(error) => handle_domain_error(error),
    }
}
