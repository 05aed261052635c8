//! Personnel-expense ratio engine.
//!
//! - [`ratio`] derives the simulated scenario and both expense ratios
//! - [`evaluator`] checks an expense figure against each threshold
//! - [`thresholds`] holds the validated, ordered threshold set
//! - [`zone`] and [`report`] prepare results for display
//! - [`simulation`] runs the whole pipeline for one input set

pub mod evaluator;
pub mod ratio;
pub mod report;
pub mod simulation;
pub mod thresholds;
pub mod zone;
