//! Ratio engine — derives the simulated scenario and both expense ratios.
//!
//! simulated = baseline * (1 + delta_pct / 100)
//! ratio_pct = expense / revenue * 100
//!
//! A zero revenue on either side is reported as `DivisionByZero` naming the
//! scenario; a figure or ratio that overflows to infinity (or is NaN) is
//! reported as `NonFinite`. Negative figures are computed as-is.

use lrf_common::error::CalcError;
use lrf_common::types::{
    Adjustment, FinancialBaseline, ScenarioComparison, ScenarioFigures, ScenarioKind,
};

/// Stateless ratio calculator.
pub struct RatioEngine;

impl RatioEngine {
    /// Compute actual and simulated figures for a baseline and adjustment.
    pub fn compute_scenario(
        baseline: FinancialBaseline,
        adjustment: Adjustment,
    ) -> Result<ScenarioComparison, CalcError> {
        let actual = Self::figures(baseline.revenue, baseline.expense, ScenarioKind::Actual)?;

        let sim_revenue = Self::apply_delta(baseline.revenue, adjustment.revenue_delta_pct);
        let sim_expense = Self::apply_delta(baseline.expense, adjustment.expense_delta_pct);
        let simulated = Self::figures(sim_revenue, sim_expense, ScenarioKind::Simulated)?;

        tracing::debug!(
            actual_ratio_pct = actual.ratio_pct,
            sim_ratio_pct = simulated.ratio_pct,
            sim_revenue,
            sim_expense,
            "Scenario computed"
        );

        Ok(ScenarioComparison { actual, simulated })
    }

    /// Apply a percentage delta to a value.
    pub fn apply_delta(value: f64, delta_pct: f64) -> f64 {
        value * (1.0 + delta_pct / 100.0)
    }

    /// Expense as a percentage of revenue.
    pub fn ratio_pct(expense: f64, revenue: f64, scenario: ScenarioKind) -> Result<f64, CalcError> {
        if revenue == 0.0 {
            return Err(CalcError::DivisionByZero { scenario });
        }
        Ok(expense / revenue * 100.0)
    }

    fn figures(
        revenue: f64,
        expense: f64,
        scenario: ScenarioKind,
    ) -> Result<ScenarioFigures, CalcError> {
        if !revenue.is_finite() || !expense.is_finite() {
            return Err(CalcError::NonFinite { scenario });
        }

        let ratio_pct = Self::ratio_pct(expense, revenue, scenario)?;
        if !ratio_pct.is_finite() {
            return Err(CalcError::NonFinite { scenario });
        }

        Ok(ScenarioFigures {
            revenue,
            expense,
            ratio_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identity_adjustment() {
        let baseline = FinancialBaseline::new(1_000_000.0, 520_000.0);
        let scenario = RatioEngine::compute_scenario(baseline, Adjustment::default()).unwrap();

        assert!(approx(scenario.actual_ratio_pct(), 52.0));
        assert!(approx(scenario.sim_ratio_pct(), 52.0));
        assert_eq!(scenario.actual, scenario.simulated);
    }

    #[test]
    fn test_expense_increase() {
        let baseline = FinancialBaseline::new(1_000_000.0, 520_000.0);
        let scenario =
            RatioEngine::compute_scenario(baseline, Adjustment::new(0.0, 10.0)).unwrap();

        assert!(approx(scenario.simulated.revenue, 1_000_000.0));
        assert!(approx(scenario.simulated.expense, 572_000.0));
        assert!(approx(scenario.sim_ratio_pct(), 57.2));
        assert!(approx(scenario.actual_ratio_pct(), 52.0));
    }

    #[test]
    fn test_revenue_drop_raises_ratio() {
        let baseline = FinancialBaseline::new(1_000_000.0, 520_000.0);
        let scenario =
            RatioEngine::compute_scenario(baseline, Adjustment::new(-20.0, 0.0)).unwrap();

        assert!(approx(scenario.simulated.revenue, 800_000.0));
        assert!(approx(scenario.sim_ratio_pct(), 65.0));
    }

    #[test]
    fn test_zero_actual_revenue() {
        let baseline = FinancialBaseline::new(0.0, 520_000.0);
        let err = RatioEngine::compute_scenario(baseline, Adjustment::default()).unwrap_err();
        assert_eq!(
            err,
            CalcError::DivisionByZero {
                scenario: ScenarioKind::Actual
            }
        );
    }

    #[test]
    fn test_minus_hundred_pct_zeroes_simulated_revenue() {
        let baseline = FinancialBaseline::new(1_000_000.0, 520_000.0);
        let err = RatioEngine::compute_scenario(baseline, Adjustment::new(-100.0, 0.0))
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::DivisionByZero {
                scenario: ScenarioKind::Simulated
            }
        );
    }

    #[test]
    fn test_delta_below_minus_hundred_flips_sign() {
        let baseline = FinancialBaseline::new(1_000.0, 500.0);
        let scenario =
            RatioEngine::compute_scenario(baseline, Adjustment::new(-200.0, 0.0)).unwrap();
        assert!(approx(scenario.simulated.revenue, -1_000.0));
        assert!(approx(scenario.sim_ratio_pct(), -50.0));
    }

    #[test]
    fn test_negative_figures_accepted() {
        let baseline = FinancialBaseline::new(-1_000.0, 250.0);
        let scenario = RatioEngine::compute_scenario(baseline, Adjustment::default()).unwrap();
        assert!(approx(scenario.actual_ratio_pct(), -25.0));
    }

    #[test]
    fn test_overflowing_simulated_expense() {
        let baseline = FinancialBaseline::new(1_000_000.0, 1e308);
        let err = RatioEngine::compute_scenario(baseline, Adjustment::new(0.0, 100.0))
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::NonFinite {
                scenario: ScenarioKind::Simulated
            }
        );
    }

    #[test]
    fn test_overflowing_actual_ratio() {
        let baseline = FinancialBaseline::new(1e-310, 1e10);
        let err = RatioEngine::compute_scenario(baseline, Adjustment::default()).unwrap_err();
        assert_eq!(
            err,
            CalcError::NonFinite {
                scenario: ScenarioKind::Actual
            }
        );
    }

    #[test]
    fn test_non_finite_baseline() {
        let baseline = FinancialBaseline::new(f64::INFINITY, 1.0);
        assert!(matches!(
            RatioEngine::compute_scenario(baseline, Adjustment::default()),
            Err(CalcError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_zero_expense() {
        let baseline = FinancialBaseline::new(1_000.0, 0.0);
        let scenario =
            RatioEngine::compute_scenario(baseline, Adjustment::new(5.0, 50.0)).unwrap();
        assert_eq!(scenario.sim_ratio_pct(), 0.0);
    }
}
