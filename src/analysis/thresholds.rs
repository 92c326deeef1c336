//! Abnormal reading counts.

use crate::config::Thresholds;
use crate::models::{AbnormalCounts, Dataset, Metric};

/// Count readings above threshold for every analysed metric.
pub fn find_abnormal_readings(data: &Dataset, thresholds: &Thresholds) -> AbnormalCounts {
    AbnormalCounts {
        heart_rate: count_above(data, Metric::HeartRate, thresholds.heart_rate),
        blood_pressure_systolic: count_above(
            data,
            Metric::BloodPressureSystolic,
            thresholds.blood_pressure_systolic,
        ),
        glucose_level: count_above(data, Metric::GlucoseLevel, thresholds.glucose_level),
    }
}

/// Number of readings whose metric value is strictly greater than `limit`.
pub fn count_above(data: &Dataset, metric: Metric, limit: i32) -> usize {
    data.iter().filter(|r| metric.value(r) > limit).count()
}
