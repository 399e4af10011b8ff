//! CORS configuration for the browser frontend.
//!
//! Development accepts any origin. Elsewhere only the confirmation frontend
//! and the origins listed in `ALLOWED_ORIGINS` may call the API.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ba_shared::{Environment, FrontendConfig};

const MAX_AGE_SECONDS: usize = 3600;

/// Origins allowed outside development: the frontend itself plus the
/// comma-separated `ALLOWED_ORIGINS` list
pub fn allowed_origins(frontend: &FrontendConfig) -> Vec<String> {
    let mut origins = vec![format!(
        "{}://{}:{}",
        frontend.scheme, frontend.address, frontend.port
    )];

    if let Ok(extra) = std::env::var("ALLOWED_ORIGINS") {
        origins.extend(
            extra
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from),
        );
    }
    origins
}

/// Creates a CORS middleware instance for the given environment
pub fn create_cors(environment: Environment, origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .max_age(MAX_AGE_SECONDS);

    if environment.is_development() {
        tracing::debug!("Configuring permissive CORS for development");
        return cors.allow_any_origin();
    }

    origins.iter().fold(cors, |cors, origin| {
        tracing::info!(origin = %origin, "Allowing CORS origin");
        cors.allowed_origin(origin)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_is_first_allowed_origin() {
        let origins = allowed_origins(&FrontendConfig::default());
        assert_eq!(origins[0], "http://localhost:3000");
    }

    #[test]
    fn test_create_cors_for_each_environment() {
        let origins = vec!["https://bank.example:443".to_string()];
        let _dev = create_cors(Environment::Development, &origins);
        let _prod = create_cors(Environment::Production, &origins);
    }
}
