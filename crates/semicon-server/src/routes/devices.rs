//! `/devices`: catalog lookup and the diode / transistor curve calculators.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use semicon_catalog::devices::{get_device, list_devices};
use semicon_physics::diode::{diode_characteristics, DiodeCurve, DiodeParams};
use semicon_physics::transistor::{
    transistor_characteristics, TransistorFamily, TransistorParams,
};
use semicon_types::records::DeviceRecord;

use crate::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/list", get(list))
        .route("/diode-characteristics", post(diode))
        .route("/transistor-characteristics", post(transistor))
        .route("/:name", get(by_name))
}

async fn list() -> Json<&'static [DeviceRecord]> {
    Json(list_devices())
}

async fn by_name(Path(name): Path<String>) -> Result<Json<&'static DeviceRecord>, ApiError> {
    let record = get_device(&name)?;
    tracing::debug!(query = %name, matched = record.name, "device lookup");
    Ok(Json(record))
}

async fn diode(
    payload: Result<Json<DiodeParams>, JsonRejection>,
) -> Result<Json<DiodeCurve>, ApiError> {
    let Json(params) = payload?;
    tracing::debug!(points = params.num_points, t = params.temperature, "diode sweep");
    Ok(Json(diode_characteristics(&params)?))
}

async fn transistor(
    payload: Result<Json<TransistorParams>, JsonRejection>,
) -> Result<Json<TransistorFamily>, ApiError> {
    let Json(params) = payload?;
    if params.has_unrecognized_type() {
        tracing::warn!(
            device_type = params.device_type.as_deref().unwrap_or_default(),
            "unrecognized device_type, using MOSFET"
        );
    }
    tracing::debug!(device_type = ?params.resolved_type(), "transistor family");
    Ok(Json(transistor_characteristics(&params)?))
}
