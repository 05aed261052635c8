//! Threshold and default-input routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use lrf_engine::thresholds::ThresholdSet;
use lrf_engine::zone::{GaugeBand, gauge_bands};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/thresholds", get(get_thresholds))
        .route("/api/defaults", get(get_defaults))
}

/// Configured thresholds with their gauge bands.
#[derive(Debug, Serialize)]
pub struct ThresholdsResponse {
    pub thresholds: ThresholdSet,
    pub bands: Vec<GaugeBand>,
}

/// Values a form should start from.
#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    pub revenue: f64,
    pub expense: f64,
    pub revenue_delta_pct: f64,
    pub expense_delta_pct: f64,
    pub thresholds: ThresholdSet,
}

/// GET /api/thresholds — List the active thresholds and gauge bands.
async fn get_thresholds(State(state): State<AppState>) -> Json<ThresholdsResponse> {
    Json(ThresholdsResponse {
        bands: gauge_bands(&state.thresholds),
        thresholds: state.thresholds,
    })
}

/// GET /api/defaults — Default baseline, zero deltas and the active thresholds.
async fn get_defaults(State(state): State<AppState>) -> Json<DefaultsResponse> {
    let baseline = state.config.default_baseline();
    Json(DefaultsResponse {
        revenue: baseline.revenue,
        expense: baseline.expense,
        revenue_delta_pct: 0.0,
        expense_delta_pct: 0.0,
        thresholds: state.thresholds,
    })
}
