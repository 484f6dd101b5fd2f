//! Report types shared by the validators.

use serde::{Deserialize, Serialize};

/// Errors and warnings collected for a single record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Violations that fail validation
    pub errors: Vec<String>,

    /// Suspicious but tolerated conditions
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// A report holding a single error, used when a record cannot be loaded.
    pub fn from_error(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Overall result of validating a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No errors, no warnings.
    Passed,

    /// No errors, at least one warning.
    PassedWithWarnings,

    /// At least one error.
    Failed,
}

impl Outcome {
    /// Classify aggregate counts.
    pub fn from_counts(errors: usize, warnings: usize) -> Self {
        if errors > 0 {
            Outcome::Failed
        } else if warnings > 0 {
            Outcome::PassedWithWarnings
        } else {
            Outcome::Passed
        }
    }

    /// Whether the outcome lets a pipeline continue. Warnings do not block.
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed)
    }
}
