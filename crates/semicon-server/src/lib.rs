// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Semicon Server
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! HTTP/JSON surface of the teaching backend.
//!
//! ```text
//! GET  /                      service info
//! GET  /health                liveness
//! GET  {prefix}/materials/list | /{name}
//! POST {prefix}/materials/calculate-properties
//! GET  {prefix}/devices/list   | /{name}
//! POST {prefix}/devices/diode-characteristics
//! POST {prefix}/devices/transistor-characteristics
//! POST {prefix}/math/fermi-function | band-structure | carrier-concentration | plot-data
//! ```

pub mod error;
pub mod routes;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use semicon_types::config::ServerConfig;
use semicon_types::error::{SemiconError, SemiconResult};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router from a validated configuration.
pub fn build_router(config: &ServerConfig) -> SemiconResult<Router> {
    config.validate()?;

    let api = Router::new()
        .nest("/materials", routes::materials::router())
        .nest("/devices", routes::devices::router())
        .nest("/math", routes::math::router());

    Ok(Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .nest(&config.api_prefix, api)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)?))
}

/// CORS for the configured site origins, with credentials.
/// Methods and headers mirror the preflight request.
pub fn cors_layer(origins: &[String]) -> SemiconResult<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|e| SemiconError::ConfigError(format!("invalid CORS origin '{o}': {e}")))
        })
        .collect::<SemiconResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
