//! Simulation — one full recomputation for a complete input set.
//!
//! Runs the ratio engine, then evaluates the simulated figures against the
//! thresholds and places both ratios on the gauge. Any failure aborts the
//! whole run; callers never see a scenario without its evaluation.

use serde::Serialize;

use lrf_common::error::CalcError;
use lrf_common::types::{Adjustment, FinancialBaseline, ScenarioComparison};

use crate::evaluator::{Evaluation, ThresholdEvaluator};
use crate::ratio::RatioEngine;
use crate::thresholds::ThresholdSet;
use crate::zone::GaugeZone;

/// Everything the presentation layer needs for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub scenario: ScenarioComparison,
    /// Evaluation of the simulated figures.
    pub evaluation: Evaluation,
    pub actual_zone: GaugeZone,
    pub simulated_zone: GaugeZone,
}

pub struct Simulator;

impl Simulator {
    pub fn run(
        baseline: FinancialBaseline,
        adjustment: Adjustment,
        thresholds: &ThresholdSet,
    ) -> Result<Simulation, CalcError> {
        let scenario = RatioEngine::compute_scenario(baseline, adjustment)?;
        let evaluation = ThresholdEvaluator::evaluate(
            thresholds,
            scenario.simulated.revenue,
            scenario.simulated.expense,
        )?;

        let actual = &scenario.actual;
        let actual_zone = if actual.revenue > 0.0 {
            let actual_eval = ThresholdEvaluator::evaluate(thresholds, actual.revenue, actual.expense)?;
            GaugeZone::from_evaluation(actual.ratio_pct, &actual_eval)
        } else {
            GaugeZone::classify(actual.ratio_pct, thresholds)
        };
        let simulated_zone = GaugeZone::from_evaluation(scenario.sim_ratio_pct(), &evaluation);

        Ok(Simulation {
            scenario,
            evaluation,
            actual_zone,
            simulated_zone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrf_common::types::{ComplianceStatus, ScenarioKind};

    #[test]
    fn test_run_expense_increase() {
        let sim = Simulator::run(
            FinancialBaseline::new(1_000_000.0, 520_000.0),
            Adjustment::new(0.0, 10.0),
            &ThresholdSet::canonical(),
        )
        .unwrap();

        assert_eq!(sim.actual_zone.level, 0);
        assert_eq!(sim.simulated_zone.breached.as_deref(), Some("Prudential"));
        assert_eq!(
            sim.evaluation.get("Maximum").unwrap().status,
            ComplianceStatus::WithinLimit
        );
        assert_eq!(
            sim.evaluation.get("Alert").unwrap().status,
            ComplianceStatus::Exceeded
        );
    }

    #[test]
    fn test_zones_agree_with_evaluation_at_ceilings() {
        let thresholds = ThresholdSet::canonical();
        for k in 1..2000 {
            let revenue = k as f64 * 1.37;
            for limit in thresholds.iter() {
                let expense = revenue * limit.limit_pct / 100.0;
                let sim = Simulator::run(
                    FinancialBaseline::new(revenue, expense),
                    Adjustment::default(),
                    &thresholds,
                )
                .unwrap();

                let exceeded = sim.evaluation.iter().filter(|o| o.result.is_exceeded()).count();
                assert_eq!(sim.simulated_zone.level, exceeded, "revenue={revenue}");
                assert_eq!(sim.actual_zone.level, exceeded, "revenue={revenue}");
                assert_eq!(
                    sim.simulated_zone.breached.as_deref(),
                    sim.evaluation.highest_exceeded().map(|o| o.name.as_str())
                );
            }
        }
    }

    #[test]
    fn test_negative_actual_revenue_uses_ratio_zone() {
        let sim = Simulator::run(
            FinancialBaseline::new(-1_000.0, 500.0),
            Adjustment::new(-200.0, 0.0),
            &ThresholdSet::canonical(),
        )
        .unwrap();
        assert_eq!(sim.actual_zone.level, 0);
        assert_eq!(sim.simulated_zone.level, 0);
    }

    #[test]
    fn test_zero_simulated_revenue_fails_whole_run() {
        let err = Simulator::run(
            FinancialBaseline::new(1_000_000.0, 520_000.0),
            Adjustment::new(-100.0, 0.0),
            &ThresholdSet::canonical(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CalcError::DivisionByZero {
                scenario: ScenarioKind::Simulated
            }
        );
    }

    #[test]
    fn test_negative_simulated_revenue_fails_evaluation() {
        let err = Simulator::run(
            FinancialBaseline::new(1_000_000.0, 520_000.0),
            Adjustment::new(-150.0, 0.0),
            &ThresholdSet::canonical(),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidRevenue { .. }));
    }
}
