use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::types::ScenarioKind;

/// Failures of the ratio and threshold computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Division by zero: {scenario} revenue is zero")]
    DivisionByZero { scenario: ScenarioKind },

    #[error("Invalid revenue: {revenue} (threshold evaluation requires revenue > 0)")]
    InvalidRevenue { revenue: f64 },

    #[error("Non-finite figures: {scenario} revenue, expense or ratio is not a finite number")]
    NonFinite { scenario: ScenarioKind },

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

/// Common error types used across the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Calculation error: {0}")]
    Calc(#[from] CalcError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Calc(CalcError::InvalidThreshold(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Calc(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_names_scenario() {
        let err = CalcError::DivisionByZero {
            scenario: ScenarioKind::Simulated,
        };
        assert_eq!(err.to_string(), "Division by zero: simulated revenue is zero");
    }

    #[test]
    fn test_status_codes() {
        let resp = AppError::from(CalcError::DivisionByZero {
            scenario: ScenarioKind::Actual,
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = AppError::from(CalcError::InvalidRevenue { revenue: 0.0 }).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = AppError::from(CalcError::InvalidThreshold("empty".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::from(CalcError::NonFinite {
            scenario: ScenarioKind::Simulated,
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = AppError::Validation("bad".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
