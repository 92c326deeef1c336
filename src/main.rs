//! vitals-report - Health sensor data analysis
//!
//! A CLI tool that loads simulated health-sensor readings from CSV,
//! computes averages and abnormal-reading counts, and writes a
//! plain-text analysis report.
//!
//! Exit codes:
//!   0 - Success, report written
//!   1 - Any error (unreadable or malformed input, empty dataset, write failure)

mod analysis;
mod cli;
mod config;
mod error;
mod loader;
mod models;
mod report;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    init_logging(&args);

    info!("vitals-report v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(&args) {
        Ok(outcome) => {
            if !args.quiet {
                print!("{}", success_output(&outcome));
            }
        }
        Err(e) => {
            // The diagnostic is printed once; the log only keeps the debug form
            debug!("Analysis failed: {:?}", e);
            eprintln!("{}", failure_output(&e));
            std::process::exit(1);
        }
    }
}

/// Text printed to stdout after a successful run. The report already ends
/// with a newline.
fn success_output(outcome: &RunOutcome) -> String {
    format!(
        "{}✅ Analysis complete! Report saved to: {}\n",
        outcome.report,
        outcome.output_path.display()
    )
}

/// Single-line diagnostic printed to stderr when a run fails.
fn failure_output(e: &anyhow::Error) -> String {
    format!("❌ Error: {:#}", e)
}

/// Handle --init-config: generate a default vitals-report.toml.
///
/// The file is only read when passed with `--config`.
fn handle_init_config() -> Result<()> {
    let path = Path::new(config::INIT_CONFIG_FILE);

    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            path.display()
        );
    }

    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✅ Created {} with default settings.", path.display());
    println!("   Pass it with --config {} to use it.", path.display());
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout carries only the report.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Result of a successful run.
#[derive(Debug)]
struct RunOutcome {
    report: String,
    output_path: PathBuf,
}

fn run(args: &Args) -> Result<RunOutcome> {
    let config = load_config(args)?;
    let input = args
        .input
        .as_deref()
        .context("An input CSV file is required")?;

    run_analysis(input, &config)
}

/// Run the load → aggregate → threshold → report → write pipeline.
///
/// Every fallible stage before the write completes first, so a failed run
/// never creates or modifies the report file.
fn run_analysis(input: &Path, config: &Config) -> Result<RunOutcome> {
    info!("Loading readings from {}", input.display());
    let data = loader::load_data(input)?;
    let total = data.len();
    info!("Loaded {} readings", total);

    let stats = analysis::calculate_statistics(&data)?;
    debug!("Averages: {:?}", stats);

    let abnormal = analysis::find_abnormal_readings(&data, &config.thresholds);
    debug!("Abnormal counts: {:?}", abnormal);
    if abnormal.total() > 0 {
        info!("Flagged {} abnormal values", abnormal.total());
    }

    let report = report::generate_text_report(&stats, &abnormal, &config.thresholds, total);

    let output_path = config.output.path.clone();
    if let Some(dir) = output_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            debug!("Creating output directory {}", dir.display());
            std::fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create output directory {}", dir.display())
            })?;
        }
    }

    report::save_report(&report, &output_path)?;
    info!("Report written to {}", output_path.display());

    Ok(RunOutcome {
        report,
        output_path,
    })
}

/// Load configuration from `--config`, or use the built-in defaults.
///
/// No file is read implicitly, so a bare `vitals-report <INPUT>` always uses
/// the default thresholds and output path.
fn load_config(args: &Args) -> Result<Config> {
    match args.config {
        Some(ref config_path) => {
            info!("Loading config from: {}", config_path.display());
            Config::load(config_path)
        }
        None => {
            debug!("No --config given, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EmptyDatasetError, LoadError};
    use clap::Parser;
    use tempfile::TempDir;

    const HEADER: &str = "patient_id,timestamp,heart_rate,blood_pressure_systolic,blood_pressure_diastolic,temperature,glucose_level,sensor_id";

    fn write_input(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("health_data.csv");
        std::fs::write(&path, format!("{}\n{}", HEADER, body)).unwrap();
        path
    }

    fn config_in(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.output.path = dir.path().join("output").join("analysis_report.txt");
        config
    }

    #[test]
    fn test_pipeline_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            "P001,2024-01-15T08:00:00,100,135,85,37.1,120,S01\n\
             P002,2024-01-15T08:05:00,80,125,78,36.7,100,S02\n",
        );
        let config = config_in(&dir);

        let outcome = run_analysis(&input, &config).unwrap();

        assert_eq!(outcome.output_path, config.output.path);
        let written = std::fs::read_to_string(&config.output.path).unwrap();
        assert_eq!(written, outcome.report);
        assert!(written.contains("- Total readings: 2\n"));
        assert!(written.contains("- Heart Rate: 90.0 bpm\n"));
        assert!(written.contains("- High Heart Rate (>90): 1 readings\n"));
        assert!(written.contains("- High Blood Pressure (>130): 1 readings\n"));
        assert!(written.contains("- High Glucose (>110): 1 readings\n"));
    }

    #[test]
    fn test_malformed_row_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "P001,2024-01-15T08:00:00,100,135,85\n");
        let config = config_in(&dir);

        let err = run_analysis(&input, &config).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::FieldCount { .. })
        ));
        assert!(!config.output.path.exists());
    }

    #[test]
    fn test_malformed_row_keeps_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        std::fs::create_dir_all(dir.path().join("output")).unwrap();
        std::fs::write(&config.output.path, "previous report").unwrap();
        let input = write_input(&dir, "P001,2024-01-15T08:00:00,abc,135,85,37.1,120,S01\n");

        assert!(run_analysis(&input, &config).is_err());
        assert_eq!(
            std::fs::read_to_string(&config.output.path).unwrap(),
            "previous report"
        );
    }

    #[test]
    fn test_header_only_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "");
        let config = config_in(&dir);

        let err = run_analysis(&input, &config).unwrap_err();

        assert!(err.downcast_ref::<EmptyDatasetError>().is_some());
        assert!(!config.output.path.exists());
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let err = run_analysis(&dir.path().join("nope.csv"), &config).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::Io { .. })
        ));
    }

    #[test]
    fn test_explicit_config_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.toml");
        std::fs::write(&config_path, "[thresholds]\nheart_rate = 75\n").unwrap();

        let args = Args {
            input: Some(dir.path().join("in.csv")),
            config: Some(config_path),
            verbose: false,
            quiet: true,
            init_config: false,
        };

        let config = load_config(&args).unwrap();
        assert_eq!(config.thresholds.heart_rate, 75);
        assert_eq!(config.thresholds.glucose_level, 110);
    }

    #[test]
    fn test_config_file_in_working_dir_is_ignored_without_flag() {
        // A config left in the working directory must not change a bare run
        let stray = Path::new(config::INIT_CONFIG_FILE);
        let created = !stray.exists();
        if created {
            std::fs::write(
                stray,
                "[thresholds]\nheart_rate = 50\n\n[output]\npath = \"elsewhere.txt\"\n",
            )
            .unwrap();
        }

        let args = Args::try_parse_from(["vitals-report", "in.csv"]).unwrap();
        let config = load_config(&args);

        if created {
            std::fs::remove_file(stray).unwrap();
        }

        let config = config.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.thresholds.heart_rate, 90);
        assert_eq!(
            config.output.path,
            PathBuf::from("output/analysis_report.txt")
        );
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            input: Some(PathBuf::from("in.csv")),
            config: Some(dir.path().join("absent.toml")),
            verbose: false,
            quiet: false,
            init_config: false,
        };

        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_success_output_has_no_blank_line_before_status() {
        let outcome = RunOutcome {
            report: "Abnormal Readings:\n- High Glucose (>110): 1 readings\n".to_string(),
            output_path: PathBuf::from("output/analysis_report.txt"),
        };

        let text = success_output(&outcome);

        assert!(text.starts_with(&outcome.report));
        assert!(text.contains("1 readings\n✅ Analysis complete!"));
        assert!(text.ends_with("output/analysis_report.txt\n"));
    }

    #[test]
    fn test_failure_output_is_single_line_with_causes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let err = run_analysis(&dir.path().join("nope.csv"), &config).unwrap_err();

        let text = failure_output(&err);

        assert!(text.starts_with("❌ Error: Failed to read input file"));
        assert_eq!(text.lines().count(), 1);
    }
}
