//! Liveness endpoint; also reports the active threshold set.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Names of the configured thresholds, in evaluation order.
    pub thresholds: Vec<String>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "lrf-simulator-api",
        version: env!("CARGO_PKG_VERSION"),
        thresholds: state.thresholds.iter().map(|t| t.name.clone()).collect(),
    })
}
