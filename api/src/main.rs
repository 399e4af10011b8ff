use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ba_api::middleware::{allowed_origins, create_cors};
use ba_api::{create_app, AppState};
use ba_core::services::{
    AuthService, RegistrationService, RegistrationServiceConfig, TokenService, TokenServiceConfig,
};
use ba_infra::{
    create_email_service, BcryptPasswordHasher, DatabasePool, MySqlAuthRepository,
    MySqlRefreshTokenStore, MySqlRegistrationRepository,
};
use ba_shared::{AppConfig, LogFormat, LoggingConfig};

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting banking auth API server");
    if config.auth.jwt.is_using_default_secret() && !config.environment.is_development() {
        tracing::warn!(environment = %config.environment, "Using the default JWT secret; set JWT_SECRET");
    }

    let database = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to the database")?;
    let pool = database.get_pool().clone();

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from_jwt_config(
        &config.auth.jwt,
    )?));
    let password_hasher = Arc::new(BcryptPasswordHasher::new());
    let email_service = Arc::new(
        create_email_service(&config.email).context("failed to configure email delivery")?,
    );

    let auth_service = Arc::new(AuthService::new(
        Arc::new(MySqlAuthRepository::new(pool.clone())),
        Arc::new(MySqlRefreshTokenStore::new(pool.clone())),
        password_hasher.clone(),
        token_service.clone(),
    ));
    let registration_service = Arc::new(RegistrationService::new(
        Arc::new(MySqlRegistrationRepository::new(pool)),
        email_service,
        password_hasher,
        token_service,
        RegistrationServiceConfig::new(&config.frontend, &config.auth.jwt, &config.registration),
    ));

    let app_state = web::Data::new(AppState::new(auth_service, registration_service));
    let environment = config.environment;
    let origins = allowed_origins(&config.frontend);

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), create_cors(environment, &origins))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {bind_address}"))?;
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;

    database.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
