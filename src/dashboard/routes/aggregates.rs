//! Aggregate Routes
//!
//! Read-only JSON views of the chart data computed at startup.
//!
//! - GET /api/v1/popularity - Applications per domain
//! - GET /api/v1/trends - Applications per year and domain

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::analytics::COUNT_LABEL;
use crate::dashboard::dto::{PopularityResponse, TrendResponse};
use crate::dashboard::state::AppState;

/// GET /api/v1/popularity
pub async fn popularity(State(state): State<Arc<AppState>>) -> Json<PopularityResponse> {
    Json(PopularityResponse {
        label: COUNT_LABEL.to_string(),
        rows: state.popularity.rows().to_vec(),
        total: state.popularity.total(),
    })
}

/// GET /api/v1/trends
pub async fn trends(State(state): State<Arc<AppState>>) -> Json<TrendResponse> {
    Json(TrendResponse {
        years: state.trend.years(),
        rows: state.trend.rows(),
        series: state.trend.series(),
        total: state.trend.total(),
    })
}
