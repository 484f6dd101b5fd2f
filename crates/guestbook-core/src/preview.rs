//! Preview of how a contributor will appear in the README.
//!
//! Rendering is read-only: the record is loaded, checked and turned into a
//! plain-text summary plus the HTML table cell the README generator emits.
//! Unlike bulk validation, a record whose `github` field differs from its
//! file name is rejected here.

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

use crate::catalog;
use crate::config::GuestbookConfig;
use crate::record::{field_text, ContributorRecord, RecordError};

/// Errors that prevent a preview from being rendered.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record must be a JSON object")]
    NotAnObject,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Username mismatch: filename '{file_name}' but github field is '{github}'")]
    UsernameMismatch { file_name: String, github: String },

    #[error("Field 'github' must be a string")]
    InvalidGithub,

    #[error("Field 'contributions' must be an array")]
    InvalidContributions,
}

/// A rendered contributor preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub name: String,
    pub github: String,
    pub profile: String,
    pub avatar_url: String,
    pub contributions: Vec<String>,

    /// Human-readable summary, one fact per line
    pub summary: String,

    /// README table cell for this contributor
    pub html: String,
}

/// Load `<contributors_dir>/<username>.json` and render its preview.
pub fn preview_contributor(username: &str, config: &GuestbookConfig) -> Result<Preview, PreviewError> {
    let path = config.record_path(username);
    if !path.exists() {
        return Err(PreviewError::NotFound { path });
    }

    let record = match ContributorRecord::from_json_file(&path) {
        Ok(record) => record,
        Err(RecordError::Io(source)) => return Err(PreviewError::Read { path, source }),
        Err(RecordError::Json(source)) => return Err(PreviewError::InvalidJson { path, source }),
        Err(RecordError::NotAnObject) => return Err(PreviewError::NotAnObject),
    };

    tracing::debug!(username, path = %path.display(), "Rendering preview");
    render_preview(username, &record, config)
}

/// Check `record` as the record for `username` and render it.
pub fn render_preview(
    username: &str,
    record: &ContributorRecord,
    config: &GuestbookConfig,
) -> Result<Preview, PreviewError> {
    let missing = record.missing_required();
    if !missing.is_empty() {
        return Err(PreviewError::MissingFields(
            missing.into_iter().map(String::from).collect(),
        ));
    }

    let github = match record.get("github") {
        Some(Value::String(github)) => github.clone(),
        _ => return Err(PreviewError::InvalidGithub),
    };
    if github != username {
        return Err(PreviewError::UsernameMismatch {
            file_name: format!("{}.json", username),
            github,
        });
    }

    let name = record.get("name").map(field_text).unwrap_or_default();
    let contributions = match record.get("contributions") {
        Some(Value::Array(items)) => items.iter().map(field_text).collect::<Vec<_>>(),
        _ => return Err(PreviewError::InvalidContributions),
    };

    let profile = match record.get("profile") {
        Some(Value::String(url)) if !url.is_empty() => url.clone(),
        _ => config.profile_url(&github),
    };
    let avatar_url = config.avatar_url(&github);

    let summary = render_summary(&name, &profile, &avatar_url, &contributions);
    let html = render_html(&name, &github, &profile, &avatar_url, &contributions);

    Ok(Preview {
        name,
        github,
        profile,
        avatar_url,
        contributions,
        summary,
        html,
    })
}

fn render_summary(name: &str, profile: &str, avatar_url: &str, contributions: &[String]) -> String {
    let mut out = format!(
        "Name: {}\nProfile: {}\nAvatar: {}\nContributions: {}\n\nContribution icons:\n",
        name,
        profile,
        avatar_url,
        contributions.join(", ")
    );
    for category in contributions {
        out.push_str(&format!("   {} {}\n", catalog::glyph(category), category));
    }
    out
}

fn render_html(
    name: &str,
    github: &str,
    profile: &str,
    avatar_url: &str,
    contributions: &[String],
) -> String {
    let icons = contributions
        .iter()
        .map(|category| {
            format!(
                r##"<a href="#{}-{}" title="{}">{}</a>"##,
                escape_html(category),
                escape_html(github),
                escape_html(&title_case(category)),
                catalog::glyph(category)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let name = escape_html(name);
    format!(
        r#"<td align="center" valign="top" width="14.28%">
  <a href="{profile}">
    <img src="{avatar}?s=100" width="100px;" alt="{name}"/>
    <br />
    <sub><b>{name}</b></sub>
  </a>
  <br />
  {icons}
</td>"#,
        profile = escape_html(profile),
        avatar = escape_html(avatar_url),
        name = name,
        icons = icons,
    )
}

/// Word title-casing: the first letter after any non-letter is upper-cased,
/// every other letter lower-cased. `eventOrganizing` becomes
/// `Eventorganizing` and `a11y` becomes `A11Y`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
