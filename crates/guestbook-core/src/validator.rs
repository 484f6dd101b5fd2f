//! Field validation for a single contributor record.
//!
//! Every rule runs independently: a failing rule never hides the findings of
//! another. Only a document that cannot be loaded at all short-circuits, with
//! one error describing why.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::path::Path;

use crate::catalog;
use crate::record::{is_falsy, ContributorRecord, REQUIRED_FIELDS};
use crate::types::ValidationReport;

lazy_static! {
    /// One identifier segment: alphanumerics and inner hyphens.
    static ref GITHUB_USERNAME: Regex =
        Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?$").unwrap();
}

/// Whether `username` is a well-formed GitHub identifier.
pub fn is_valid_username(username: &str) -> bool {
    GITHUB_USERNAME.is_match(username)
}

/// Load and validate the record stored at `path`.
///
/// The file name is used for the identity check, so the record for `alice`
/// is expected at `.../alice.json`.
pub fn validate_file(path: impl AsRef<Path>) -> ValidationReport {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match ContributorRecord::from_json_file(path) {
        Ok(record) => validate_record(&record, &file_name),
        Err(e) => {
            tracing::debug!(file = %file_name, error = %e, "Record could not be loaded");
            ValidationReport::from_error(e.to_string())
        }
    }
}

/// Validate a JSON document as if it were stored under `file_name`.
pub fn validate_json(json: &str, file_name: &str) -> ValidationReport {
    match ContributorRecord::from_json(json) {
        Ok(record) => validate_record(&record, file_name),
        Err(e) => ValidationReport::from_error(e.to_string()),
    }
}

/// Apply every field rule to `record`.
pub fn validate_record(record: &ContributorRecord, file_name: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_required(record, &mut report);

    if let Some(name) = record.get("name") {
        check_name(name, &mut report);
    }
    if let Some(github) = record.get("github") {
        check_github(github, file_name, &mut report);
    }
    if let Some(contributions) = record.get("contributions") {
        check_contributions(contributions, &mut report);
    }
    if let Some(profile) = record.get("profile") {
        check_profile(profile, &mut report);
    }

    let unexpected = record.unexpected_fields();
    if !unexpected.is_empty() {
        report.warn(format!("Unexpected fields: {}", unexpected.join(", ")));
    }

    report
}

fn check_required(record: &ContributorRecord, report: &mut ValidationReport) {
    for field in REQUIRED_FIELDS {
        match record.get(field) {
            None => report.error(format!("Missing required field: {}", field)),
            Some(value) if is_falsy(value) => {
                report.error(format!("Empty required field: {}", field))
            }
            Some(_) => {}
        }
    }
}

fn check_name(name: &Value, report: &mut ValidationReport) {
    match name.as_str() {
        None => report.error("Field 'name' must be a string"),
        Some(s) if s.trim().is_empty() => report.error("Field 'name' cannot be empty"),
        Some(_) => {}
    }
}

fn check_github(github: &Value, file_name: &str, report: &mut ValidationReport) {
    let Some(username) = github.as_str() else {
        report.error("Field 'github' must be a string");
        return;
    };

    if !is_valid_username(username) {
        report.error(format!("Invalid GitHub username format: {}", username));
        return;
    }

    let expected = format!("{}.json", username);
    if file_name != expected {
        report.warn(format!(
            "Filename '{}' doesn't match GitHub username '{}' (should be '{}')",
            file_name, username, expected
        ));
    }
}

fn check_contributions(contributions: &Value, report: &mut ValidationReport) {
    let Some(items) = contributions.as_array() else {
        report.error("Field 'contributions' must be an array");
        return;
    };

    if items.is_empty() {
        report.warn("Field 'contributions' is empty");
        return;
    }

    for item in items {
        match item.as_str() {
            None => report.error(format!("Contribution type must be a string: {}", item)),
            Some(category) if !catalog::is_known(category) => {
                report.warn(format!("Unknown contribution type: {}", category))
            }
            Some(_) => {}
        }
    }
}

fn check_profile(profile: &Value, report: &mut ValidationReport) {
    match profile.as_str() {
        None => report.error("Field 'profile' must be a string"),
        Some(url)
            if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) =>
        {
            report.warn(format!(
                "Profile URL should start with http:// or https://: {}",
                url
            ))
        }
        Some(_) => {}
    }
}
