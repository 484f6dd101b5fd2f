//! Bulk validation of a contributors directory.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::GuestbookConfig;
use crate::types::{Outcome, ValidationReport};
use crate::validator;

/// Errors that stop a directory run before any record is validated.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Contributors directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No JSON files found in contributors directory: {}", .0.display())]
    NoRecords(PathBuf),

    #[error("Failed to read contributors directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Findings for one record file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    /// File name within the directory, e.g. `alice.json`
    pub file_name: String,

    pub report: ValidationReport,
}

/// Findings for a whole directory, in file name order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryReport {
    pub files: Vec<FileReport>,
}

impl DirectoryReport {
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|f| f.report.errors.len()).sum()
    }

    pub fn total_warnings(&self) -> usize {
        self.files.iter().map(|f| f.report.warnings.len()).sum()
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_counts(self.total_errors(), self.total_warnings())
    }
}

/// Record files eligible for validation: `*.json` regular files that are not
/// configured templates, sorted by file name.
pub fn discover_records(dir: &Path, config: &GuestbookConfig) -> Result<Vec<PathBuf>, DirectoryError> {
    if !dir.is_dir() {
        return Err(DirectoryError::NotFound(dir.to_path_buf()));
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if !path.is_file() || path.extension().map_or(true, |e| e != "json") {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if config.is_template(&file_name) {
            tracing::debug!(file = %file_name, "Skipping template file");
            continue;
        }

        records.push(path);
    }

    records.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(records)
}

/// Validate every eligible record in `dir`.
pub fn validate_directory(
    dir: impl AsRef<Path>,
    config: &GuestbookConfig,
) -> Result<DirectoryReport, DirectoryError> {
    let dir = dir.as_ref();
    let records = discover_records(dir, config)?;
    if records.is_empty() {
        return Err(DirectoryError::NoRecords(dir.to_path_buf()));
    }

    let files = records
        .iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let report = validator::validate_file(path);
            tracing::debug!(
                file = %file_name,
                errors = report.errors.len(),
                warnings = report.warnings.len(),
                "Validated record"
            );
            FileReport { file_name, report }
        })
        .collect();

    Ok(DirectoryReport { files })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_alice_and_bob() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "alice.json",
            r#"{"name":"Alice","github":"alice","contributions":["code","doc"]}"#,
        );
        write(
            dir.path(),
            "bob.json",
            r#"{"name":"Bob","github":"robert","contributions":[]}"#,
        );

        let report = validate_directory(dir.path(), &GuestbookConfig::default()).unwrap();

        assert_eq!(report.files_checked(), 2);
        assert_eq!(report.files[0].file_name, "alice.json");
        assert!(report.files[0].report.is_clean());

        let bob = &report.files[1];
        assert_eq!(bob.file_name, "bob.json");
        assert_eq!(
            bob.report.warnings,
            vec![
                "Filename 'bob.json' doesn't match GitHub username 'robert' (should be 'robert.json')",
                "Field 'contributions' is empty",
            ]
        );
        assert_eq!(bob.report.errors, vec!["Empty required field: contributions"]);

        assert_eq!(report.total_errors(), 1);
        assert_eq!(report.total_warnings(), 2);
        assert_eq!(report.outcome(), Outcome::Failed);
    }

    #[test]
    fn test_counts_and_outcome() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "alice.json",
            r#"{"name":"Alice","github":"alice","contributions":["code"]}"#,
        );
        let config = GuestbookConfig::default();

        let report = validate_directory(dir.path(), &config).unwrap();
        assert_eq!(report.outcome(), Outcome::Passed);

        write(
            dir.path(),
            "carol.json",
            r#"{"name":"Carol","github":"carol","contributions":["wizardry"]}"#,
        );
        let report = validate_directory(dir.path(), &config).unwrap();
        assert_eq!(report.total_errors(), 0);
        assert_eq!(report.total_warnings(), 1);
        assert_eq!(report.outcome(), Outcome::PassedWithWarnings);

        write(dir.path(), "dave.json", "{ broken");
        let report = validate_directory(dir.path(), &config).unwrap();
        assert_eq!(report.files_checked(), 3);
        assert_eq!(report.total_errors(), 1);
        assert_eq!(report.outcome(), Outcome::Failed);
    }

    #[test]
    fn test_files_sorted_by_name() {
        let dir = tempdir().unwrap();
        for name in ["zoe", "amy", "mia"] {
            write(
                dir.path(),
                &format!("{}.json", name),
                &format!(r#"{{"name":"{0}","github":"{0}","contributions":["code"]}}"#, name),
            );
        }

        let report = validate_directory(dir.path(), &GuestbookConfig::default()).unwrap();
        let names: Vec<_> = report.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["amy.json", "mia.json", "zoe.json"]);
    }

    #[test]
    fn test_skips_templates_and_other_files() {
        let dir = tempdir().unwrap();
        write(dir.path(), "example-contributor.json", r#"{"name": ""}"#);
        write(dir.path(), "README.md", "# Contributors");
        write(dir.path(), ".gitkeep", "");
        fs::create_dir(dir.path().join("nested.json")).unwrap();
        write(
            dir.path(),
            "alice.json",
            r#"{"name":"Alice","github":"alice","contributions":["code"]}"#,
        );

        let report = validate_directory(dir.path(), &GuestbookConfig::default()).unwrap();
        assert_eq!(report.files_checked(), 1);
        assert_eq!(report.files[0].file_name, "alice.json");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("contributors");
        let result = validate_directory(&missing, &GuestbookConfig::default());
        assert!(matches!(result, Err(DirectoryError::NotFound(_))));
    }

    #[test]
    fn test_no_records() {
        let dir = tempdir().unwrap();
        write(dir.path(), "example-contributor.json", "{}");
        let result = validate_directory(dir.path(), &GuestbookConfig::default());
        assert!(matches!(result, Err(DirectoryError::NoRecords(_))));
    }
}
