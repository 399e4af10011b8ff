use actix_web::{web, HttpResponse};
use validator::Validate;

use ba_core::repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
use ba_core::services::{EmailServiceTrait, PasswordHasherTrait};

use crate::dto::{RefreshRequest, RefreshResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /auth/refresh
///
/// Trades an expired access token and its refresh token for a new access
/// token.
///
/// # Request Body
///
/// ```json
/// {
///     "access_token": "eyJhbGciOiJIUzI1NiIs...",
///     "refresh_token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "new_access_token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: access token still live, refresh token invalid, expired or revoked
/// - 500 Internal Server Error: storage or signing failure
pub async fn refresh<A, S, H, R, E>(
    state: web::Data<AppState<A, S, H, R, E>>,
    request: web::Json<RefreshRequest>,
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
        .auth_service
        .refresh(&request.access_token, &request.refresh_token)
        .await
    {
        Ok(new_access_token) => HttpResponse::Ok().json(RefreshResponse { new_access_token }),
        Err(error) => handle_domain_error(error),
    }
}
