//! Record parsing from JSON.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Fields every record must carry with a non-empty value.
pub static REQUIRED_FIELDS: &[&str] = &["name", "github", "contributions"];

/// Every field a record may carry. Anything else is reported as unexpected.
pub static EXPECTED_FIELDS: &[&str] = &["name", "github", "contributions", "profile"];

/// Errors that can occur when loading a record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record must be a JSON object")]
    NotAnObject,
}

/// A contributor record as written on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributorRecord {
    fields: Map<String, Value>,
}

impl ContributorRecord {
    /// Parse a record from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a record from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Wrap an already parsed document. The root must be an object.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// Raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether the field key is present, whatever its value.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field names outside [`EXPECTED_FIELDS`], sorted.
    pub fn unexpected_fields(&self) -> Vec<&str> {
        self.keys()
            .filter(|key| !EXPECTED_FIELDS.contains(key))
            .collect()
    }

    /// Required fields that are missing or hold an empty value.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| self.get(field).map_or(true, is_falsy))
            .collect()
    }
}

/// Whether a JSON value counts as "empty" for required-field checks:
/// `null`, `false`, zero, `""`, `[]` and `{}`.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Text form of a field for display: strings as-is, anything else as JSON.
pub fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
