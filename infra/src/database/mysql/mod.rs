//! MySQL repository implementations

mod auth_repository_impl;
mod refresh_token_store_impl;
mod registration_repository_impl;

pub use auth_repository_impl::MySqlAuthRepository;
pub use refresh_token_store_impl::MySqlRefreshTokenStore;
pub use registration_repository_impl::MySqlRegistrationRepository;

use ba_core::errors::DomainError;

/// Log a database failure and hide it behind an internal error
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, "{}", context);
    DomainError::internal(format!("{context}: {error}"))
}
