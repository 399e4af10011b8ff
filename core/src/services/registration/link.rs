//! Confirmation link construction

use ba_shared::config::FrontendConfig;
use url::Url;

use crate::errors::{DomainError, DomainResult};

/// Query parameter carrying the one-time token
pub const ONE_TIME_TOKEN_PARAM: &str = "ott";

/// Builds `{scheme}://{address}:{port}/{confirmation_path}?ott={token}`
pub fn build_confirmation_url(frontend: &FrontendConfig, token: &str) -> DomainResult<Url> {
    let base = format!(
        "{}://{}:{}/",
        frontend.scheme, frontend.address, frontend.port
    );

    let mut url = Url::parse(&base)
        .and_then(|base| base.join(frontend.confirmation_path.trim_start_matches('/')))
        .map_err(|e| {
            tracing::error!(base = %base, error = %e, "Invalid frontend address");
            DomainError::internal(format!("invalid confirmation url {base}: {e}"))
        })?;

    url.query_pairs_mut()
        .append_pair(ONE_TIME_TOKEN_PARAM, token);
    Ok(url)
}
