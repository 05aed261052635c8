//! Threshold set — the ordered, validated list of regulatory ceilings.
//!
//! Invariants enforced on construction:
//! - at least one threshold
//! - names are non-blank and unique
//! - every limit is finite and within [0, 100]
//! - limits never decrease in sequence order (Alert <= Prudential <= Maximum)

use serde::Serialize;

use lrf_common::config::{
    DEFAULT_ALERT_LIMIT_PCT, DEFAULT_MAXIMUM_LIMIT_PCT, DEFAULT_PRUDENTIAL_LIMIT_PCT,
};
use lrf_common::error::CalcError;
use lrf_common::types::Threshold;

/// An ordered, non-empty set of named thresholds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThresholdSet {
    thresholds: Vec<Threshold>,
}

impl ThresholdSet {
    /// Validate and wrap a caller-ordered list of thresholds.
    pub fn new(thresholds: Vec<Threshold>) -> Result<Self, CalcError> {
        if thresholds.is_empty() {
            return Err(CalcError::InvalidThreshold(
                "at least one threshold is required".to_string(),
            ));
        }

        for (i, threshold) in thresholds.iter().enumerate() {
            if threshold.name.trim().is_empty() {
                return Err(CalcError::InvalidThreshold(format!(
                    "threshold at position {} has a blank name",
                    i
                )));
            }

            if thresholds[..i].iter().any(|t| t.name == threshold.name) {
                return Err(CalcError::InvalidThreshold(format!(
                    "duplicate threshold name '{}'",
                    threshold.name
                )));
            }

            if !threshold.limit_pct.is_finite() || !(0.0..=100.0).contains(&threshold.limit_pct) {
                return Err(CalcError::InvalidThreshold(format!(
                    "'{}' limit {} is outside [0, 100]",
                    threshold.name, threshold.limit_pct
                )));
            }

            if let Some(prev) = i.checked_sub(1).map(|p| &thresholds[p])
                && threshold.limit_pct < prev.limit_pct
            {
                return Err(CalcError::InvalidThreshold(format!(
                    "'{}' limit {} is below the preceding '{}' limit {}",
                    threshold.name, threshold.limit_pct, prev.name, prev.limit_pct
                )));
            }
        }

        Ok(Self { thresholds })
    }

    /// The canonical LRF set: Alert 54%, Prudential 57%, Maximum 60%.
    pub fn canonical() -> Self {
        Self {
            thresholds: vec![
                Threshold::new("Alert", DEFAULT_ALERT_LIMIT_PCT),
                Threshold::new("Prudential", DEFAULT_PRUDENTIAL_LIMIT_PCT),
                Threshold::new("Maximum", DEFAULT_MAXIMUM_LIMIT_PCT),
            ],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Threshold> {
        self.thresholds.iter()
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// A validated set always holds at least one threshold.
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Threshold> {
        self.thresholds.iter().find(|t| t.name == name)
    }

    pub fn as_slice(&self) -> &[Threshold] {
        &self.thresholds
    }
}

impl<'a> IntoIterator for &'a ThresholdSet {
    type Item = &'a Threshold;
    type IntoIter = std::slice::Iter<'a, Threshold>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
