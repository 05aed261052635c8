//! Threshold evaluator — classifies an expense figure against each threshold
//! and computes the minimum reduction needed to comply.
//!
//! Per threshold:
//! 1. max_allowed = revenue * limit_pct / 100
//! 2. expense <= max_allowed → within limit, nothing to cut
//! 3. otherwise → exceeded, cut `expense - max_allowed`
//!
//! Thresholds are evaluated independently against the same revenue/expense
//! pair; the result keeps the caller's threshold order.

use serde::Serialize;

use lrf_common::error::CalcError;
use lrf_common::types::{AdjustmentResult, ComplianceStatus};

use crate::thresholds::ThresholdSet;

/// Result for a single named threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdOutcome {
    pub name: String,
    pub limit_pct: f64,
    #[serde(flatten)]
    pub result: AdjustmentResult,
}

/// Ordered mapping from threshold name to its adjustment result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Evaluation {
    outcomes: Vec<ThresholdOutcome>,
}

impl Evaluation {
    pub fn get(&self, name: &str) -> Option<&AdjustmentResult> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.result)
    }

    /// Outcomes in the order the thresholds were supplied.
    pub fn iter(&self) -> std::slice::Iter<'_, ThresholdOutcome> {
        self.outcomes.iter()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// True when no threshold is exceeded.
    pub fn is_compliant(&self) -> bool {
        self.outcomes.iter().all(|o| !o.result.is_exceeded())
    }

    /// The last exceeded threshold in order, i.e. the highest ceiling breached.
    pub fn highest_exceeded(&self) -> Option<&ThresholdOutcome> {
        self.outcomes.iter().rev().find(|o| o.result.is_exceeded())
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a ThresholdOutcome;
    type IntoIter = std::slice::Iter<'a, ThresholdOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stateless threshold evaluator.
pub struct ThresholdEvaluator;

impl ThresholdEvaluator {
    /// Evaluate `expense` against every threshold for the given `revenue`.
    ///
    /// Called with the simulated figures. Fails with `InvalidRevenue` when
    /// `revenue` is not strictly positive; no partial result is returned.
    pub fn evaluate(
        thresholds: &ThresholdSet,
        revenue: f64,
        expense: f64,
    ) -> Result<Evaluation, CalcError> {
        // Written as a negated comparison so NaN is rejected too
        if !(revenue > 0.0) {
            return Err(CalcError::InvalidRevenue { revenue });
        }

        let outcomes = thresholds
            .iter()
            .map(|threshold| {
                let result = Self::evaluate_one(threshold.limit_pct, revenue, expense);
                if result.is_exceeded() {
                    tracing::debug!(
                        threshold = %threshold.name,
                        limit_pct = threshold.limit_pct,
                        reduction_amount = result.reduction_amount,
                        reduction_pct = result.reduction_pct,
                        "Threshold exceeded"
                    );
                }
                ThresholdOutcome {
                    name: threshold.name.clone(),
                    limit_pct: threshold.limit_pct,
                    result,
                }
            })
            .collect();

        Ok(Evaluation { outcomes })
    }

    /// Check one limit against a revenue/expense pair.
    ///
    /// `revenue` must be positive and `limit_pct` non-negative, so the ceiling
    /// is never negative and an exceeded expense is always > 0. The division
    /// by `expense` below therefore cannot hit zero.
    pub fn evaluate_one(limit_pct: f64, revenue: f64, expense: f64) -> AdjustmentResult {
        let max_allowed_expense = revenue * limit_pct / 100.0;

        if expense <= max_allowed_expense {
            return AdjustmentResult {
                status: ComplianceStatus::WithinLimit,
                max_allowed_expense,
                reduction_amount: 0.0,
                reduction_pct: 0.0,
            };
        }

        debug_assert!(expense > 0.0, "exceeded expense must be positive");
        let reduction_amount = expense - max_allowed_expense;
        AdjustmentResult {
            status: ComplianceStatus::Exceeded,
            max_allowed_expense,
            reduction_amount,
            reduction_pct: reduction_amount / expense * 100.0,
        }
    }
}
