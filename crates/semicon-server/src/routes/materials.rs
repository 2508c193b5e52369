//! `/materials`: catalog lookup and the material property calculator.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use semicon_catalog::materials::{get_material, list_materials};
use semicon_physics::material::{material_properties, MaterialParams, MaterialProperties};
use semicon_types::records::MaterialRecord;

use crate::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/list", get(list))
        .route("/calculate-properties", post(calculate_properties))
        .route("/:name", get(by_name))
}

async fn list() -> Json<&'static [MaterialRecord]> {
    Json(list_materials())
}

async fn by_name(Path(name): Path<String>) -> Result<Json<&'static MaterialRecord>, ApiError> {
    let record = get_material(&name)?;
    tracing::debug!(query = %name, matched = record.name, "material lookup");
    Ok(Json(record))
}

async fn calculate_properties(
    payload: Result<Json<MaterialParams>, JsonRejection>,
) -> Result<Json<MaterialProperties>, ApiError> {
    let Json(params) = payload?;
    tracing::debug!(material = ?params.material_type, t = params.temperature, "material properties");
    Ok(Json(material_properties(&params)?))
}
