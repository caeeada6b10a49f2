//! Pre-computed ranking lookup endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use exohabit_common::error::ExohabitError;
use exohabit_core::RankingEntry;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct RankQuery {
    pub top: Option<usize>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub status: &'static str,
    pub count: usize,
    pub threshold: f64,
    pub candidates: Vec<RankingEntry>,
}

/// GET /rank?top=<int>&threshold=<float> — Retrieve pre-computed rankings.
pub async fn get_ranking(
    State(state): State<SharedState>,
    query: Result<Query<RankQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ExohabitError> {
    let Query(query) = query.map_err(|rejection| {
        ExohabitError::ParameterRange(format!("Invalid query parameters: {rejection}"))
    })?;

    let table = state.ranking.as_ref().ok_or(ExohabitError::RankingUnavailable)?;

    let top_n = query.top.unwrap_or(10);
    let threshold = query.threshold.unwrap_or(0.0);
    let candidates = table.rank(top_n, threshold, state.limits.max_rank_top)?;

    Ok(Json(RankResponse {
        status: "success",
        count: candidates.len(),
        threshold,
        candidates,
    }))
}
