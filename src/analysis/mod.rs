//! Descriptive statistics over a dataset of readings.

pub mod aggregator;
pub mod thresholds;

pub use aggregator::*;
pub use thresholds::*;
