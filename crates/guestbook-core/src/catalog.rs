//! Contribution category catalog.
//!
//! The closed set of contribution types understood by the README generator,
//! each paired with the glyph shown next to a contributor's avatar.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Glyph used for categories that are not in the catalog.
pub const FALLBACK_GLYPH: &str = "❓";

/// Every known category with its display glyph, in catalog order.
pub static CONTRIBUTION_TYPES: &[(&str, &str)] = &[
    ("a11y", "♿️"),
    ("audio", "🔊"),
    ("blog", "📝"),
    ("bug", "🐛"),
    ("business", "💼"),
    ("code", "💻"),
    ("content", "🖋"),
    ("data", "🔣"),
    ("design", "🎨"),
    ("doc", "📖"),
    ("eventOrganizing", "📋"),
    ("example", "💡"),
    ("financial", "💵"),
    ("fundingFinding", "🔍"),
    ("ideas", "🤔"),
    ("infra", "🚇"),
    ("maintenance", "🚧"),
    ("mentoring", "🧑‍🏫"),
    ("platform", "📦"),
    ("plugin", "🔌"),
    ("projectManagement", "📆"),
    ("promotion", "📣"),
    ("question", "💬"),
    ("research", "🔬"),
    ("review", "👀"),
    ("security", "🛡️"),
    ("talk", "📢"),
    ("test", "⚠️"),
    ("tool", "🔧"),
    ("translation", "🌍"),
    ("tutorial", "✅"),
    ("userTesting", "📓"),
    ("video", "📹"),
];

lazy_static! {
    static ref GLYPHS: HashMap<&'static str, &'static str> =
        CONTRIBUTION_TYPES.iter().copied().collect();
}

/// Whether `category` is a known contribution type. Matching is case-sensitive.
pub fn is_known(category: &str) -> bool {
    GLYPHS.contains_key(category)
}

/// Display glyph for `category`, or [`FALLBACK_GLYPH`] for unknown categories.
pub fn glyph(category: &str) -> &'static str {
    GLYPHS.get(category).copied().unwrap_or(FALLBACK_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_categories() {
        assert_eq!(CONTRIBUTION_TYPES.len(), 33);
        assert_eq!(GLYPHS.len(), 33, "category names must be unique");
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known("code"));
        assert!(is_known("eventOrganizing"));
        assert!(is_known("a11y"));
        assert!(!is_known("wizardry"));
        assert!(!is_known("Code"), "lookup is case-sensitive");
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph("code"), "💻");
        assert_eq!(glyph("doc"), "📖");
        assert_eq!(glyph("wizardry"), FALLBACK_GLYPH);
        assert_eq!(glyph(""), FALLBACK_GLYPH);
    }
}
