//! Metric averages.
//!
//! Means are computed in `f64` over the full dataset. An empty dataset has
//! no defined mean and is rejected rather than reported as NaN.

use crate::error::EmptyDatasetError;
use crate::models::{Dataset, Metric, StatisticsSummary};

/// Calculate the mean of every analysed metric.
pub fn calculate_statistics(data: &Dataset) -> Result<StatisticsSummary, EmptyDatasetError> {
    Ok(StatisticsSummary {
        heart_rate: mean(data, Metric::HeartRate)?,
        blood_pressure_systolic: mean(data, Metric::BloodPressureSystolic)?,
        glucose_level: mean(data, Metric::GlucoseLevel)?,
    })
}

/// Arithmetic mean of one metric.
pub fn mean(data: &Dataset, metric: Metric) -> Result<f64, EmptyDatasetError> {
    if data.is_empty() {
        return Err(EmptyDatasetError);
    }

    let sum: f64 = data.iter().map(|r| f64::from(metric.value(r))).sum();
    Ok(sum / data.len() as f64)
}
