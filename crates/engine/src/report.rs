//! Report formatting — turns a simulation into display-ready rows and messages.

use serde::Serialize;

use lrf_common::types::{ComplianceStatus, ScenarioFigures, ScenarioKind, Severity};

use crate::evaluator::{Evaluation, ThresholdOutcome};
use crate::simulation::Simulation;

const CURRENCY_SYMBOL: &str = "R$";

/// One row of the actual-vs-simulated summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub scenario: ScenarioKind,
    pub label: String,
    pub revenue: String,
    pub expense: String,
    pub ratio: String,
}

/// Per-threshold status line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMessage {
    pub threshold: String,
    pub severity: Severity,
    pub text: String,
}

/// Formatted view of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: Vec<SummaryRow>,
    pub messages: Vec<StatusMessage>,
}

impl Report {
    pub fn from_simulation(simulation: &Simulation) -> Self {
        Self {
            summary: summary_rows(simulation),
            messages: status_messages(&simulation.evaluation),
        }
    }
}

pub fn summary_rows(simulation: &Simulation) -> Vec<SummaryRow> {
    [ScenarioKind::Actual, ScenarioKind::Simulated]
        .into_iter()
        .map(|kind| summary_row(kind, simulation.scenario.figures(kind)))
        .collect()
}

fn summary_row(scenario: ScenarioKind, figures: &ScenarioFigures) -> SummaryRow {
    let label = match scenario {
        ScenarioKind::Actual => "Actual",
        ScenarioKind::Simulated => "Simulated",
    };
    SummaryRow {
        scenario,
        label: label.to_string(),
        revenue: format_currency(figures.revenue),
        expense: format_currency(figures.expense),
        ratio: format_pct(figures.ratio_pct),
    }
}

/// Status messages in threshold order.
pub fn status_messages(evaluation: &Evaluation) -> Vec<StatusMessage> {
    evaluation.iter().map(status_message).collect()
}

pub fn status_message(outcome: &ThresholdOutcome) -> StatusMessage {
    let (text, severity) = match outcome.result.status {
        ComplianceStatus::WithinLimit => (format!("{}: within limit.", outcome.name), Severity::Info),
        ComplianceStatus::Exceeded => (
            format!(
                "{}: exceeded. Reduce {} ({}).",
                outcome.name,
                format_currency(outcome.result.reduction_amount),
                format_pct(outcome.result.reduction_pct)
            ),
            Severity::Critical,
        ),
    };

    StatusMessage {
        threshold: outcome.name.clone(),
        severity,
        text,
    }
}

/// `R$ 1,234,567.89`; negatives render as `R$ -1,000.00`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{} {}{}", CURRENCY_SYMBOL, sign, group_thousands(value.abs()))
}

/// `57.20%`
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
