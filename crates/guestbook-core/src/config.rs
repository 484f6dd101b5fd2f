//! Configuration for contributor validation and preview.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Guestbook configuration. Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestbookConfig {
    /// Directory holding one `<username>.json` per contributor
    #[serde(default = "default_contributors_dir")]
    pub contributors_dir: PathBuf,

    /// File names in the directory that are templates, not records
    #[serde(default = "default_template_files")]
    pub template_files: Vec<String>,

    /// Base URL for default profile links and avatars
    #[serde(default = "default_github_base_url")]
    pub github_base_url: String,
}

fn default_contributors_dir() -> PathBuf {
    PathBuf::from("contributors")
}

fn default_template_files() -> Vec<String> {
    vec!["example-contributor.json".to_string()]
}

fn default_github_base_url() -> String {
    "https://github.com".to_string()
}

impl Default for GuestbookConfig {
    fn default() -> Self {
        Self {
            contributors_dir: default_contributors_dir(),
            template_files: default_template_files(),
            github_base_url: default_github_base_url(),
        }
    }
}

impl GuestbookConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Path of the record file for `username`.
    pub fn record_path(&self, username: &str) -> PathBuf {
        self.contributors_dir.join(format!("{}.json", username))
    }

    /// Whether `file_name` is a template to be skipped during bulk validation.
    pub fn is_template(&self, file_name: &str) -> bool {
        self.template_files.iter().any(|t| t == file_name)
    }

    /// Default profile link for `username`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/{}", self.base_url(), username)
    }

    /// Avatar image for `username`.
    pub fn avatar_url(&self, username: &str) -> String {
        format!("{}/{}.png", self.base_url(), username)
    }

    fn base_url(&self) -> &str {
        self.github_base_url.trim_end_matches('/')
    }
}
