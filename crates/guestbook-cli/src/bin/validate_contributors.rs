//! Validate every contributor record in the contributors directory.
//!
//! ## Usage
//!
//! ```bash
//! validate-contributors
//! validate-contributors --dir path/to/contributors
//! ```
//!
//! ## Exit Codes
//!
//! - 0: no errors (warnings allowed)
//! - 1: directory missing, no records found, or at least one error

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use guestbook_cli::{output, EXIT_FAILURE, EXIT_OK};
use guestbook_core::{validate_directory, DirectoryError};

/// Check that contributor JSON files follow the expected format
#[derive(Parser)]
#[command(name = "validate-contributors")]
#[command(version)]
#[command(about = "Validate all contributor JSON files", long_about = None)]
struct Cli {
    /// Directory containing <username>.json records
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    guestbook_cli::init_tracing();

    let cli = match guestbook_cli::parse_args::<Cli>("") {
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
    let dir = config.contributors_dir.clone();

    let report = match validate_directory(&dir, &config) {
        Ok(report) => report,
        Err(e) => return Ok(fatal(&e)),
    };

    println!("{}", output::validation_header(report.files_checked()));
    print!("{}", output::directory_report(&report));

    Ok(if report.outcome().is_success() {
        ExitCode::from(EXIT_OK)
    } else {
        ExitCode::from(EXIT_FAILURE)
    })
}

fn fatal(error: &DirectoryError) -> ExitCode {
    eprintln!("❌ {}", error);
    ExitCode::from(EXIT_FAILURE)
}
