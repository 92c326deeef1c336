//! CSV loader for health sensor readings.
//!
//! The input is a comma-delimited file with one header line followed by
//! rows in the fixed eight-column reading schema. No quoting is supported.

use crate::error::LoadError;
use crate::models::{Dataset, Reading};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Number of columns in the reading schema.
pub const FIELD_COUNT: usize = 8;

/// Column names in schema order.
pub const COLUMNS: [&str; FIELD_COUNT] = [
    "patient_id",
    "timestamp",
    "heart_rate",
    "blood_pressure_systolic",
    "blood_pressure_diastolic",
    "temperature",
    "glucose_level",
    "sensor_id",
];

/// Load every reading from a CSV file, skipping the header line.
pub fn load_data(path: &Path) -> Result<Dataset, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_readings(&content, path)?;

    debug!("Loaded {} readings from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse CSV text (header included) into a dataset. `source` names the
/// input in errors.
pub fn parse_readings(content: &str, source: &Path) -> Result<Dataset, LoadError> {
    let mut lines = content.lines().enumerate();

    if lines.next().is_none() {
        return Err(LoadError::MissingHeader {
            path: source.to_path_buf(),
        });
    }

    let mut dataset = Vec::new();

    for (index, line) in lines {
        // Blank lines carry no reading
        if line.trim().is_empty() {
            continue;
        }
        dataset.push(parse_line(line, index + 1)?);
    }

    Ok(dataset)
}

/// Parse one data row. `line` is the 1-based line number used in errors.
fn parse_line(raw: &str, line: usize) -> Result<Reading, LoadError> {
    let fields: Vec<&str> = raw.split(',').collect();

    if fields.len() != FIELD_COUNT {
        return Err(LoadError::FieldCount {
            line,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    Ok(Reading {
        patient_id: fields[0].to_string(),
        timestamp: fields[1].to_string(),
        heart_rate: parse_field(fields[2], 2, line)?,
        blood_pressure_systolic: parse_field(fields[3], 3, line)?,
        blood_pressure_diastolic: parse_field(fields[4], 4, line)?,
        temperature: parse_field(fields[5], 5, line)?,
        glucose_level: parse_field(fields[6], 6, line)?,
        sensor_id: fields[7].to_string(),
    })
}

fn parse_field<T: FromStr>(value: &str, column: usize, line: usize) -> Result<T, LoadError> {
    value.trim().parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field: COLUMNS[column],
        value: value.to_string(),
    })
}
