use actix_web::{web, HttpResponse};
use validator::Validate;

use ba_core::repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
use ba_core::services::{EmailServiceTrait, PasswordHasherTrait};

use crate::dto::RegisterRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /register
///
/// Stores a pending registration and emails the confirmation link.
///
/// # Request Body
///
/// ```json
/// {
///     "full_name": "Alice Liddell",
///     "country": "UK",
///     "zipcode": "OX1 1DP",
///     "date_of_birth": "1990-05-04",
///     "email": "alice@example.com",
///     "username": "alice",
///     "password": "wonderland"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// The registration summary.
///
/// ## Errors
/// - 400 Bad Request: invalid field, email already used, username taken
/// - 500 Internal Server Error: storage or email failure
pub async fn register<A, S, H, R, E>(
    state: web::Data<AppState<A, S, H, R, E>>,
    request: web::Json<RegisterRequest>,
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

    match state
        .registration_service
        .register(request.into_inner().into())
        .await
    {
        Ok(summary) => HttpResponse::Created().json(summary),
        Err(error) => handle_domain_error(error),
    }
}
