//! Plain-text report generation.
//!
//! This module renders the averages and abnormal counts of a dataset into
//! the fixed-layout analysis report.

use crate::config::Thresholds;
use crate::models::{AbnormalCounts, Metric, StatisticsSummary};

const TITLE: &str = "Health Sensor Data Analysis Report";

/// Generate the complete text report.
pub fn generate_text_report(
    stats: &StatisticsSummary,
    abnormal: &AbnormalCounts,
    thresholds: &Thresholds,
    total_readings: usize,
) -> String {
    let mut output = String::new();

    // Title
    output.push_str(TITLE);
    output.push('\n');
    output.push_str(&"=".repeat(TITLE.len()));
    output.push_str("\n\n");

    output.push_str(&generate_summary_section(total_readings));
    output.push('\n');
    output.push_str(&generate_averages_section(stats));
    output.push('\n');
    output.push_str(&generate_abnormal_section(abnormal, thresholds));

    output
}

fn generate_summary_section(total_readings: usize) -> String {
    format!("Dataset Summary:\n- Total readings: {}\n", total_readings)
}

fn generate_averages_section(stats: &StatisticsSummary) -> String {
    let mut section = String::from("Average Measurements:\n");

    for metric in Metric::ALL {
        section.push_str(&format!(
            "- {}: {:.1} {}\n",
            metric.average_label(),
            stats.get(metric),
            metric.unit()
        ));
    }

    section
}

/// Counts are whole numbers; the threshold appears in each label.
fn generate_abnormal_section(abnormal: &AbnormalCounts, thresholds: &Thresholds) -> String {
    let mut section = String::from("Abnormal Readings:\n");

    for metric in Metric::ALL {
        section.push_str(&format!(
            "- {} (>{}): {} readings\n",
            metric.abnormal_label(),
            thresholds.get(metric),
            abnormal.get(metric)
        ));
    }

    section
}
