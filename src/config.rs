//! Configuration file handling.
//!
//! This module handles loading the optional TOML file passed with
//! `--config` that overrides abnormal-reading thresholds and the report
//! location.

use crate::models::Metric;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the file written by `--init-config`.
pub const INIT_CONFIG_FILE: &str = "vitals-report.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Abnormal-reading thresholds.
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Values a metric must strictly exceed to count as abnormal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_heart_rate")]
    pub heart_rate: i32,

    #[serde(default = "default_systolic")]
    pub blood_pressure_systolic: i32,

    #[serde(default = "default_glucose")]
    pub glucose_level: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            heart_rate: default_heart_rate(),
            blood_pressure_systolic: default_systolic(),
            glucose_level: default_glucose(),
        }
    }
}

impl Thresholds {
    pub fn get(&self, metric: Metric) -> i32 {
        match metric {
            Metric::HeartRate => self.heart_rate,
            Metric::BloodPressureSystolic => self.blood_pressure_systolic,
            Metric::GlucoseLevel => self.glucose_level,
        }
    }
}

fn default_heart_rate() -> i32 {
    90
}

fn default_systolic() -> i32 {
    130
}

fn default_glucose() -> i32 {
    110
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report path, relative to the working directory.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output/analysis_report.txt")
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
