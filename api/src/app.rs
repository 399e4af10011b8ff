//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`].

use actix_cors::Cors;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ba_core::repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
use ba_core::services::{EmailServiceTrait, PasswordHasherTrait};

use crate::dto::ErrorResponse;
use crate::routes::auth::{logout::logout, refresh::refresh};
use crate::routes::registration::{check::check, register::register, resend::resend};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<A, S, H, R, E>(
    app_state: web::Data<AppState<A, S, H, R, E>>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AuthRepository + 'static,
    S: RefreshTokenStore + 'static,
    H: PasswordHasherTrait + 'static,
    R: RegistrationRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/register")
                .route("", web::post().to(register::<A, S, H, R, E>))
                .route("/check", web::get().to(check::<A, S, H, R, E>))
                .route("/resend", web::post().to(resend::<A, S, H, R, E>)),
        )
        .service(
            web::scope("/auth")
                .route("/refresh", web::post().to(refresh::<A, S, H, R, E>))
                .route("/logout", web::post().to(logout::<A, S, H, R, E>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ba-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}
