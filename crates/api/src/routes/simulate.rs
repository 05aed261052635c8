//! Simulation route — recomputes the scenario for a complete input set.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lrf_common::error::AppError;
use lrf_common::types::{Adjustment, FinancialBaseline, Threshold};
use lrf_engine::report::Report;
use lrf_engine::simulation::{Simulation, Simulator};
use lrf_engine::thresholds::ThresholdSet;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/simulate", post(simulate))
}

/// Request body for a simulation.
///
/// Omitted figures fall back to the configured defaults, omitted deltas to
/// zero and omitted thresholds to the configured set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulateRequest {
    pub revenue: Option<f64>,
    pub expense: Option<f64>,
    #[serde(default)]
    pub revenue_delta_pct: f64,
    #[serde(default)]
    pub expense_delta_pct: f64,
    pub thresholds: Option<Vec<Threshold>>,
}

/// Simulation results plus their formatted report.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    #[serde(flatten)]
    pub simulation: Simulation,
    #[serde(flatten)]
    pub report: Report,
    pub evaluated_at: DateTime<Utc>,
}

/// POST /api/simulate — Compute actual vs. simulated ratios and threshold status.
///
/// A body that is not valid JSON for `SimulateRequest` is a 400 validation error.
async fn simulate(
    State(state): State<AppState>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> Result<Json<SimulateResponse>, AppError> {
    let Json(req) = payload?;
    let defaults = state.config.default_baseline();
    let baseline = FinancialBaseline::new(
        req.revenue.unwrap_or(defaults.revenue),
        req.expense.unwrap_or(defaults.expense),
    );
    let adjustment = Adjustment::new(req.revenue_delta_pct, req.expense_delta_pct);

    let thresholds = match req.thresholds {
        Some(custom) => ThresholdSet::new(custom)?,
        None => state.thresholds,
    };

    let simulation = Simulator::run(baseline, adjustment, &thresholds).inspect_err(|e| {
        tracing::debug!(error = %e, "Simulation rejected");
    })?;
    let report = Report::from_simulation(&simulation);

    tracing::debug!(
        sim_ratio_pct = simulation.scenario.sim_ratio_pct(),
        zone_level = simulation.simulated_zone.level,
        "Simulation completed"
    );

    Ok(Json(SimulateResponse {
        simulation,
        report,
        evaluated_at: Utc::now(),
    }))
}
