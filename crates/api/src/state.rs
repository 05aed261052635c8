//! Shared application state for the Axum API server.

use lrf_common::config::AppConfig;
use lrf_common::error::CalcError;
use lrf_engine::thresholds::ThresholdSet;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Thresholds from `config`, validated once at startup.
    pub thresholds: ThresholdSet,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, CalcError> {
        let thresholds = ThresholdSet::new(config.thresholds())?;
        Ok(Self { config, thresholds })
    }
}
