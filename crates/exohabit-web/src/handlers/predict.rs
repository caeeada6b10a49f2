//! Single and batch prediction endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use exohabit_common::error::ExohabitError;
use exohabit_core::{BatchFailure, PlanetRecord, PredictionResult, PredictionService};

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub planets: Vec<PlanetRecord>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub status: &'static str,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<PredictionResult>,
    /// `null` when every record succeeded.
    pub errors: Option<Vec<BatchFailure>>,
}

fn service(state: &SharedState) -> Result<&PredictionService, ExohabitError> {
    state.prediction.as_ref().ok_or(ExohabitError::ModelUnavailable)
}

/// POST /predict — Predict habitability for a single exoplanet.
pub async fn predict(
    State(state): State<SharedState>,
    payload: Result<Json<PlanetRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ExohabitError> {
    let Json(record) = payload
        .map_err(|rejection| ExohabitError::Validation(format!("Invalid JSON body: {rejection}")))?;
    let result = service(&state)?.predict_one(&record)?;
    Ok(Json(result))
}

/// POST /batch_predict — Predict habitability for up to 100 exoplanets.
/// Per-record failures are reported alongside partial success.
pub async fn batch_predict(
    State(state): State<SharedState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ExohabitError> {
    let Json(request) = payload
        .map_err(|rejection| ExohabitError::Validation(format!("Invalid JSON body: {rejection}")))?;

    let outcome = service(&state)?.predict_batch(&request.planets)?;

    Ok(Json(BatchResponse {
        status: "success",
        total: request.planets.len(),
        successful: outcome.results.len(),
        failed: outcome.errors.len(),
        results: outcome.results,
        errors: if outcome.errors.is_empty() { None } else { Some(outcome.errors) },
    }))
}
