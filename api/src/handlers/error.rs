//! Conversion of domain errors into HTTP responses

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use ba_core::errors::{DomainError, ErrorKind};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Map a domain error to its status code and a `{message}` body.
///
/// Internal details are logged but never sent to the caller.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error.kind() {
        ErrorKind::Unexpected => tracing::error!(error = ?error, "Request failed"),
        _ => tracing::debug!(error = %error, "Request rejected"),
    }

    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ErrorResponse::new(error.public_message()).to_response(status)
}

/// 400 response for a body that failed `validator` checks
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut fields = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect::<Vec<_>>();
    fields.sort();
    tracing::debug!(fields = ?fields, "Request body failed validation");

    ErrorResponse::new(format!("Invalid request data: {}", fields.join(", ")))
        .to_response(StatusCode::BAD_REQUEST)
}
