//! Data models for the health sensor analysis.
//!
//! This module contains the reading record loaded from CSV, the set of
//! analysed metrics, and the summaries computed over a dataset.

/// A single sensor sample, one row of the input file.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)] // Not every column is analysed
pub struct Reading {
    /// Patient identifier.
    pub patient_id: String,
    /// Sample time as written in the file (ISO-like).
    pub timestamp: String,
    /// Heart rate in beats per minute.
    pub heart_rate: i32,
    /// Systolic blood pressure in mmHg.
    pub blood_pressure_systolic: i32,
    /// Diastolic blood pressure in mmHg.
    pub blood_pressure_diastolic: i32,
    /// Body temperature.
    pub temperature: f64,
    /// Blood glucose in mg/dL.
    pub glucose_level: i32,
    /// Identifier of the sensor that produced the sample.
    pub sensor_id: String,
}

/// Readings in file row order.
pub type Dataset = Vec<Reading>;

/// A numeric column that is averaged and checked against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    HeartRate,
    BloodPressureSystolic,
    GlucoseLevel,
}

impl Metric {
    /// All analysed metrics, in report order.
    pub const ALL: [Metric; 3] = [
        Metric::HeartRate,
        Metric::BloodPressureSystolic,
        Metric::GlucoseLevel,
    ];

    /// Returns this metric's value for a reading.
    pub fn value(&self, reading: &Reading) -> i32 {
        match self {
            Metric::HeartRate => reading.heart_rate,
            Metric::BloodPressureSystolic => reading.blood_pressure_systolic,
            Metric::GlucoseLevel => reading.glucose_level,
        }
    }

    /// Measurement unit shown next to averages.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::HeartRate => "bpm",
            Metric::BloodPressureSystolic => "mmHg",
            Metric::GlucoseLevel => "mg/dL",
        }
    }

    /// Label used in the averages section.
    pub fn average_label(&self) -> &'static str {
        match self {
            Metric::HeartRate => "Heart Rate",
            Metric::BloodPressureSystolic => "Systolic BP",
            Metric::GlucoseLevel => "Glucose Level",
        }
    }

    /// Label used in the abnormal readings section.
    pub fn abnormal_label(&self) -> &'static str {
        match self {
            Metric::HeartRate => "High Heart Rate",
            Metric::BloodPressureSystolic => "High Blood Pressure",
            Metric::GlucoseLevel => "High Glucose",
        }
    }
}

/// Mean value of each metric over a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsSummary {
    pub heart_rate: f64,
    pub blood_pressure_systolic: f64,
    pub glucose_level: f64,
}

impl StatisticsSummary {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::HeartRate => self.heart_rate,
            Metric::BloodPressureSystolic => self.blood_pressure_systolic,
            Metric::GlucoseLevel => self.glucose_level,
        }
    }
}

/// Number of readings above threshold for each metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbnormalCounts {
    pub heart_rate: usize,
    pub blood_pressure_systolic: usize,
    pub glucose_level: usize,
}

impl AbnormalCounts {
    pub fn get(&self, metric: Metric) -> usize {
        match metric {
            Metric::HeartRate => self.heart_rate,
            Metric::BloodPressureSystolic => self.blood_pressure_systolic,
            Metric::GlucoseLevel => self.glucose_level,
        }
    }

    /// Total abnormal flags across all metrics.
    pub fn total(&self) -> usize {
        self.heart_rate + self.blood_pressure_systolic + self.glucose_level
    }
}

#[cfg(test)]
pub(crate) fn sample_reading(heart_rate: i32, systolic: i32, glucose: i32) -> Reading {
    Reading {
        patient_id: "P001".to_string(),
        timestamp: "2024-01-15T08:00:00".to_string(),
        heart_rate,
        blood_pressure_systolic: systolic,
        blood_pressure_diastolic: 80,
        temperature: 36.6,
        glucose_level: glucose,
        sensor_id: "S01".to_string(),
    }
}
