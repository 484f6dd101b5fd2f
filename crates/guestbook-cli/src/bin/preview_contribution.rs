//! Preview how a contributor will appear in the README.
//!
//! ## Usage
//!
//! ```bash
//! preview-contribution johndoe
//! ```
//!
//! ## Exit Codes
//!
//! - 0: preview rendered
//! - 1: file missing, invalid JSON, missing fields, username mismatch,
//!   or wrong arguments

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use guestbook_cli::{output, EXIT_FAILURE, EXIT_OK};
use guestbook_core::{preview_contributor, PreviewError};

const USAGE_HINT: &str = "Usage: preview-contribution your-username\n\
                          Example: preview-contribution johndoe";

/// Show how a contributor record will appear, without modifying any files
#[derive(Parser)]
#[command(name = "preview-contribution")]
#[command(version)]
#[command(about = "Preview a contributor record", long_about = None)]
struct Cli {
    /// GitHub username; the record is read from <dir>/<username>.json
    username: String,

    /// Directory containing <username>.json records
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    guestbook_cli::init_tracing();

    let cli = match guestbook_cli::parse_args::<Cli>(USAGE_HINT) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    match run(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = guestbook_cli::load_config(cli.config.as_deref(), cli.dir)?;
    let record_path = config.record_path(&cli.username);

    match preview_contributor(&cli.username, &config) {
        Ok(preview) => {
            print!("{}", output::preview(&preview, &record_path.display().to_string()));
            Ok(ExitCode::from(EXIT_OK))
        }
        Err(e) => {
            report_failure(&e);
            eprintln!();
            eprintln!("{}", output::preview_help());
            Ok(ExitCode::from(EXIT_FAILURE))
        }
    }
}

fn report_failure(error: &PreviewError) {
    match error {
        PreviewError::NotFound { path } => {
            eprintln!("❌ {}", error);
            eprintln!("💡 Create {} first!", path.display());
        }
        PreviewError::UsernameMismatch { file_name, github } => {
            eprintln!("❌ Username mismatch:");
            eprintln!("   Filename: {}", file_name);
            eprintln!("   JSON github field: {}", github);
            eprintln!("   These must match!");
        }
        other => eprintln!("❌ {}", other),
    }
}
