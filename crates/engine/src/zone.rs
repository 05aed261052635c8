//! Gauge zones — positions a ratio on the threshold scale for chart rendering.
//!
//! The scale runs from 0 to 100% and is cut at every threshold limit. When
//! figures are available the zone is taken from the threshold evaluation, so
//! the gauge and the per-threshold status always agree; an expense exactly on
//! a ceiling stays in the lower zone.

use serde::Serialize;

use crate::evaluator::Evaluation;
use crate::thresholds::ThresholdSet;

/// Zone colours from safest to most severe.
pub const ZONE_COLORS: &[&str] = &["lightgreen", "yellow", "orange", "red"];

/// Upper bound of the gauge axis.
pub const GAUGE_AXIS_MAX_PCT: f64 = 100.0;

/// Where a ratio falls on the threshold scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeZone {
    pub ratio_pct: f64,
    /// Number of thresholds strictly exceeded.
    pub level: usize,
    /// Highest threshold exceeded, if any.
    pub breached: Option<String>,
    pub color: &'static str,
}

impl GaugeZone {
    /// Zone for figures that were already evaluated against the thresholds.
    pub fn from_evaluation(ratio_pct: f64, evaluation: &Evaluation) -> Self {
        let level = evaluation.iter().filter(|o| o.result.is_exceeded()).count();
        let breached = evaluation.highest_exceeded().map(|o| o.name.clone());

        Self {
            ratio_pct,
            level,
            breached,
            color: zone_color(level),
        }
    }

    /// Zone from the ratio alone, for figures the evaluator does not accept
    /// (non-positive revenue).
    pub fn classify(ratio_pct: f64, thresholds: &ThresholdSet) -> Self {
        let level = thresholds.iter().filter(|t| ratio_pct > t.limit_pct).count();
        let breached = level
            .checked_sub(1)
            .and_then(|i| thresholds.as_slice().get(i))
            .map(|t| t.name.clone());

        Self {
            ratio_pct,
            level,
            breached,
            color: zone_color(level),
        }
    }
}

/// A coloured range on the gauge axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub from_pct: f64,
    pub to_pct: f64,
    pub level: usize,
    pub color: &'static str,
}

/// Contiguous bands `[0, t1], [t1, t2], ..., [tn, 100]`.
pub fn gauge_bands(thresholds: &ThresholdSet) -> Vec<GaugeBand> {
    let mut bands = Vec::with_capacity(thresholds.len() + 1);
    let mut from_pct = 0.0;

    for (level, threshold) in thresholds.iter().enumerate() {
        bands.push(GaugeBand {
            from_pct,
            to_pct: threshold.limit_pct,
            level,
            color: zone_color(level),
        });
        from_pct = threshold.limit_pct;
    }

    bands.push(GaugeBand {
        from_pct,
        to_pct: GAUGE_AXIS_MAX_PCT,
        level: thresholds.len(),
        color: zone_color(thresholds.len()),
    });

    bands
}

fn zone_color(level: usize) -> &'static str {
    ZONE_COLORS[level.min(ZONE_COLORS.len() - 1)]
}
