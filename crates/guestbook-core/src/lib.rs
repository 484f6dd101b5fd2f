//! # guestbook-core
//!
//! Validation and preview of contributor records.
//!
//! Each contributor is described by one JSON file, `contributors/<username>.json`:
//!
//! ```json
//! {
//!   "name": "Alice",
//!   "github": "alice",
//!   "contributions": ["code", "doc"],
//!   "profile": "https://alice.dev"
//! }
//! ```
//!
//! This crate answers two questions about those files:
//! - Is every record in the directory well-formed? ([`validate_directory`])
//! - How will one contributor appear in the README? ([`preview_contributor`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use guestbook_core::{validate_directory, GuestbookConfig, Outcome};
//!
//! let config = GuestbookConfig::default();
//! let report = validate_directory(&config.contributors_dir, &config)?;
//!
//! match report.outcome() {
//!     Outcome::Passed => println!("All files are valid"),
//!     Outcome::PassedWithWarnings => println!("{} warnings", report.total_warnings()),
//!     Outcome::Failed => println!("{} errors", report.total_errors()),
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod directory;
pub mod preview;
pub mod record;
pub mod types;
pub mod validator;

// Re-export main types at crate root
pub use config::{ConfigError, GuestbookConfig};
pub use directory::{validate_directory, DirectoryError, DirectoryReport, FileReport};
pub use preview::{preview_contributor, render_preview, Preview, PreviewError};
pub use record::{ContributorRecord, RecordError};
pub use types::{Outcome, ValidationReport};
pub use validator::{is_valid_username, validate_file, validate_json, validate_record};
