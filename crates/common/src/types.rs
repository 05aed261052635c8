use serde::{Deserialize, Serialize};

/// Current-period figures for the entity being evaluated.
///
/// `revenue` is the net current revenue (RCL) and `expense` the personnel
/// expense for the same period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialBaseline {
    pub revenue: f64,
    pub expense: f64,
}

impl FinancialBaseline {
    pub fn new(revenue: f64, expense: f64) -> Self {
        Self { revenue, expense }
    }
}

/// Percentage deltas applied to a baseline to obtain the simulated scenario.
///
/// Values are unbounded: `-100.0` zeroes a figure and anything below flips
/// its sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    #[serde(default)]
    pub revenue_delta_pct: f64,
    #[serde(default)]
    pub expense_delta_pct: f64,
}

impl Adjustment {
    pub fn new(revenue_delta_pct: f64, expense_delta_pct: f64) -> Self {
        Self {
            revenue_delta_pct,
            expense_delta_pct,
        }
    }
}

/// Which side of a comparison a figure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Actual,
    Simulated,
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioKind::Actual => write!(f, "actual"),
            ScenarioKind::Simulated => write!(f, "simulated"),
        }
    }
}

/// Revenue, expense and the resulting expense-to-revenue ratio for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFigures {
    pub revenue: f64,
    pub expense: f64,
    /// `expense / revenue * 100`
    pub ratio_pct: f64,
}

/// Actual vs. simulated figures, produced by the ratio engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub actual: ScenarioFigures,
    pub simulated: ScenarioFigures,
}

impl ScenarioComparison {
    pub fn actual_ratio_pct(&self) -> f64 {
        self.actual.ratio_pct
    }

    pub fn sim_ratio_pct(&self) -> f64 {
        self.simulated.ratio_pct
    }

    pub fn figures(&self, kind: ScenarioKind) -> &ScenarioFigures {
        match kind {
            ScenarioKind::Actual => &self.actual,
            ScenarioKind::Simulated => &self.simulated,
        }
    }
}

/// A named regulatory ceiling on the expense ratio, in percent of revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub name: String,
    pub limit_pct: f64,
}

impl Threshold {
    pub fn new(name: impl Into<String>, limit_pct: f64) -> Self {
        Self {
            name: name.into(),
            limit_pct,
        }
    }
}

/// Compliance of an expense figure against a single threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    WithinLimit,
    Exceeded,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::WithinLimit => write!(f, "within_limit"),
            ComplianceStatus::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Outcome of checking an expense figure against one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    pub status: ComplianceStatus,
    /// Ceiling the expense was compared against (`revenue * limit_pct / 100`).
    pub max_allowed_expense: f64,
    /// Minimum expense cut needed to reach the ceiling; zero when within limit.
    pub reduction_amount: f64,
    /// `reduction_amount` as a percentage of the expense.
    pub reduction_pct: f64,
}

impl AdjustmentResult {
    pub fn is_exceeded(&self) -> bool {
        self.status == ComplianceStatus::Exceeded
    }
}

/// Message severity for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}
