//! Route handlers and the state they share

use std::sync::Arc;

use ba_core::repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
use ba_core::services::{AuthService, EmailServiceTrait, PasswordHasherTrait, RegistrationService};

pub mod auth;
pub mod registration;

/// Application state that holds shared services
pub struct AppState<A, S, H, R, E>
where
    A: AuthRepository,
    S: RefreshTokenStore,
    H: PasswordHasherTrait,
    R: RegistrationRepository,
    E: EmailServiceTrait,
{
    pub auth_service: Arc<AuthService<A, S, H>>,
    pub registration_service: Arc<RegistrationService<R, E, H>>,
}

impl<A, S, H, R, E> AppState<A, S, H, R, E>
where
    A: AuthRepository,
    S: RefreshTokenStore,
    H: PasswordHasherTrait,
    R: RegistrationRepository,
    E: EmailServiceTrait,
{
    pub fn new(
        auth_service: Arc<AuthService<A, S, H>>,
        registration_service: Arc<RegistrationService<R, E, H>>,
    ) -> Self {
        Self {
            auth_service,
            registration_service,
        }
    }
}
