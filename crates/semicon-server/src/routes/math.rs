//! `/math`: band-theory curves and canned plot shapes.
//!
//! These endpoints take the envelope `{"function_type": ..., "parameters": {...}}`
//! used by the chart widgets. Both keys are optional; any other top-level key is
//! rejected so that flat bodies are not silently evaluated with defaults.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use semicon_physics::band::{
    band_structure, carrier_concentration, fermi_function, BandStructure, BandStructureParams,
    CarrierConcentration, CarrierParams, FermiParams,
};
use semicon_physics::plot::{plot_data, PlotParams, XyData};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionRequest<P> {
    /// Informational label sent by the frontend; not used for dispatch.
    #[serde(default)]
    pub function_type: Option<String>,
    #[serde(default)]
    pub parameters: P,
}

type Envelope<P> = Result<Json<FunctionRequest<P>>, JsonRejection>;

pub fn router() -> Router {
    Router::new()
        .route("/fermi-function", post(fermi))
        .route("/band-structure", post(bands))
        .route("/carrier-concentration", post(carriers))
        .route("/plot-data", post(plot))
}

async fn fermi(payload: Envelope<FermiParams>) -> Result<Json<XyData>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(function_type = ?request.function_type, "fermi function");
    Ok(Json(fermi_function(&request.parameters)?))
}

async fn bands(payload: Envelope<BandStructureParams>) -> Result<Json<BandStructure>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(material = ?request.parameters.material_type, "band structure");
    Ok(Json(band_structure(&request.parameters)?))
}

async fn carriers(
    payload: Envelope<CarrierParams>,
) -> Result<Json<CarrierConcentration>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(eg = request.parameters.eg, "carrier concentration");
    Ok(Json(carrier_concentration(&request.parameters)?))
}

async fn plot(payload: Envelope<PlotParams>) -> Result<Json<XyData>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(plot_type = ?request.parameters.plot_type, "plot data");
    Ok(Json(plot_data(&request.parameters)?))
}
