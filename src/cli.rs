//! Command-line interface argument parsing.
//!
//! This module handles CLI argument parsing using clap, including
//! validation of flag combinations.

use clap::Parser;
use std::path::PathBuf;

/// vitals-report - health sensor data analysis
///
/// Reads a CSV of sensor readings, computes average heart rate, systolic
/// blood pressure and glucose level, counts abnormal readings, and writes
/// a plain-text report to output/analysis_report.txt.
///
/// Examples:
///   vitals-report health_data.csv
///   vitals-report health_data.csv --config thresholds.toml
///   vitals-report --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    #[arg(value_name = "INPUT", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, the built-in thresholds and output path are used
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only, no report echo)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default vitals-report.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if !self.init_config && self.input.is_none() {
            return Err("An input CSV file is required".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
