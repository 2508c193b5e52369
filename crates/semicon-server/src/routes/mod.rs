// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Routes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Request handlers, grouped by resource.

pub mod devices;
pub mod materials;
pub mod math;

use axum::http::Uri;
use axum::Json;
use serde::Serialize;
use semicon_types::error::SemiconError;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "SCPN Semiconductor Lab API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Structured 404 for paths no router claims.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError(SemiconError::NotFound {
        kind: "Route",
        name: uri.path().to_string(),
    })
}
