//! Report persistence.

use crate::error::WriteError;
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Mode for a newly created report, before umask.
#[cfg(unix)]
const NEW_REPORT_MODE: u32 = 0o644;

/// Write the report to `path`, replacing any existing file.
///
/// The content is written to a temporary file in the destination directory
/// and renamed into place, so the destination either holds the complete
/// report or is left untouched. The directory must already exist.
///
/// An overwritten report keeps its permissions; a new one is created like
/// any regular file rather than owner-only.
pub fn save_report(report: &str, path: &Path) -> Result<(), WriteError> {
    let write_error = |source: std::io::Error| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    if let Some(permissions) = new_report_permissions() {
        builder.permissions(permissions);
    }
    let mut file = builder.tempfile_in(dir).map_err(write_error)?;

    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .map_err(write_error)?;
    }

    file.write_all(report.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    debug!("Wrote {} bytes to {}", report.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn new_report_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(NEW_REPORT_MODE))
}

#[cfg(not(unix))]
fn new_report_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use crate::models::{AbnormalCounts, StatisticsSummary};
    use crate::report::generate_text_report;

    #[test]
    fn test_round_trip_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis_report.txt");
        let report = generate_text_report(
            &StatisticsSummary {
                heart_rate: 81.4,
                blood_pressure_systolic: 126.7,
                glucose_level: 104.2,
            },
            &AbnormalCounts {
                heart_rate: 4,
                blood_pressure_systolic: 2,
                glucose_level: 5,
            },
            &Thresholds::default(),
            20,
        );

        save_report(&report, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), report.as_bytes());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "previous run with a much longer body of text").unwrap();

        save_report("new", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");

        let err = save_report("report", &path).unwrap_err();

        assert_eq!(err.path, path);
        assert!(!path.exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        save_report("report", &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_new_report_is_not_owner_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        // A plain create in the same directory shows the effective umask
        let reference = dir.path().join("reference.txt");
        std::fs::File::create(&reference).unwrap();

        save_report("report", &path).unwrap();

        assert_eq!(mode_of(&path), NEW_REPORT_MODE & mode_of(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o640)).unwrap();

        save_report("new", &path).unwrap();

        assert_eq!(mode_of(&path), 0o640);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
