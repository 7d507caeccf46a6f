//! Middleware CORS

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::config::environment::EnvironmentConfig;

/// Capa permisiva para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Capa restringida a los orígenes dados. Los orígenes inválidos se ignoran.
pub fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Capa según la configuración: orígenes explícitos si los hay, permisiva en
/// desarrollo y cerrada a otros orígenes en cualquier otro entorno
pub fn cors_for(config: &EnvironmentConfig) -> CorsLayer {
    if !config.cors_origins.is_empty() {
        cors_middleware_with_origins(&config.cors_origins)
    } else if config.is_development() {
        cors_middleware()
    } else {
        warn!(
            "⚠️ CORS_ORIGINS empty in '{}' environment, cross-origin requests are refused",
            config.environment
        );
        cors_middleware_with_origins(&[])
    }
}
