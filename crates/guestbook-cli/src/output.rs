//! Console formatting for validation reports and previews.

use guestbook_core::{DirectoryReport, Outcome, Preview};

const RULE: &str = "==================================================";

/// Header printed before per-file results.
pub fn validation_header(file_count: usize) -> String {
    format!("🔍 Validating {} contributor files...\n", file_count)
}

/// Per-file lines followed by the summary block.
pub fn directory_report(report: &DirectoryReport) -> String {
    let mut out = String::new();

    for file in &report.files {
        if file.report.is_clean() {
            out.push_str(&format!("✅ {}\n", file.file_name));
            continue;
        }

        out.push_str(&format!("📁 {}:\n", file.file_name));
        for error in &file.report.errors {
            out.push_str(&format!("  ❌ {}\n", error));
        }
        for warning in &file.report.warnings {
            out.push_str(&format!("  ⚠️  {}\n", warning));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\n📊 Validation Summary:\n  Files checked: {}\n  Errors: {}\n  Warnings: {}\n\n{}\n",
        report.files_checked(),
        report.total_errors(),
        report.total_warnings(),
        outcome_line(report.outcome())
    ));
    out
}

pub fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Passed => "✅ All files are valid!",
        Outcome::PassedWithWarnings => {
            "⚠️  Validation passed with warnings. Consider fixing the warnings above."
        }
        Outcome::Failed => "❌ Validation failed! Please fix the errors above.",
    }
}

/// Full console output for a successful preview.
pub fn preview(preview: &Preview, record_path: &str) -> String {
    format!(
        "✅ Contributor file validation passed!\n\
         \n\
         🎨 Preview of your contributor profile:\n\
         {rule}\n\
         {summary}\n\
         📱 How it will look in the README:\n\
         {rule}\n\
         {html}\n\
         \n\
         {rule}\n\
         ✅ Your contribution looks great!\n\
         \n\
         🚀 Next steps:\n\
         \x20 1. git add {path}\n\
         \x20 2. git commit -m 'Add {name} as a contributor'\n\
         \x20 3. git push origin your-branch-name\n\
         \x20 4. Create your pull request on GitHub!\n",
        rule = RULE,
        summary = preview.summary,
        html = preview.html,
        path = record_path,
        name = preview.name,
    )
}

/// Hints printed after a failed preview.
pub fn preview_help() -> &'static str {
    "🔧 Need help?\n\
     \x20 - Check the template in docs/guides/contributor-guide.md\n\
     \x20 - Validate JSON syntax at https://jsonlint.com/\n\
     \x20 - Ask questions in GitHub Discussions"
}
