//! Shared pieces of the `validate-contributors` and `preview-contribution`
//! binaries.
//!
//! ## Exit Codes
//!
//! - 0: success (validation may have produced warnings)
//! - 1: validation errors, missing directory or file, unparseable record,
//!   or a usage error

pub mod output;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use guestbook_core::GuestbookConfig;

/// Exit code for a successful run.
pub const EXIT_OK: u8 = 0;

/// Exit code for any failure, including usage errors.
pub const EXIT_FAILURE: u8 = 1;

/// Initialize logging. Filter comes from `RUST_LOG`, defaulting to warnings.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse arguments, mapping usage errors to [`EXIT_FAILURE`] instead of
/// clap's default exit code. `--help` and `--version` still exit 0.
pub fn parse_args<P: Parser>(usage_hint: &str) -> Result<P, ExitCode> {
    match P::try_parse() {
        Ok(args) => Ok(args),
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Err(ExitCode::from(EXIT_OK)),
                _ => {
                    if !usage_hint.is_empty() {
                        eprintln!();
                        eprintln!("{}", usage_hint);
                    }
                    Err(ExitCode::from(EXIT_FAILURE))
                }
            }
        }
    }
}

/// Load the configuration file if given, then apply a directory override.
pub fn load_config(config_path: Option<&Path>, dir: Option<PathBuf>) -> Result<GuestbookConfig> {
    let mut config = match config_path {
        Some(path) => GuestbookConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => GuestbookConfig::default(),
    };

    if let Some(dir) = dir {
        config.contributors_dir = dir;
    }

    tracing::debug!(dir = %config.contributors_dir.display(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, GuestbookConfig::default());
    }

    #[test]
    fn test_dir_overrides_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("guestbook.json");
        fs::write(&path, r#"{"contributors_dir": "people"}"#).unwrap();

        let config = load_config(Some(path.as_path()), None).unwrap();
        assert_eq!(config.contributors_dir, PathBuf::from("people"));

        let config = load_config(Some(path.as_path()), Some(PathBuf::from("others"))).unwrap();
        assert_eq!(config.contributors_dir, PathBuf::from("others"));
    }

    #[test]
    fn test_missing_config_file() {
        let path = PathBuf::from("/nonexistent/guestbook.json");
        let err = load_config(Some(path.as_path()), None).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load config"));
    }
}
