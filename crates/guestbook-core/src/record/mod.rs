//! Contributor record loading.
//!
//! Records are kept as generic JSON documents rather than a fixed struct so
//! that wrong field types and unexpected keys can be reported instead of
//! failing deserialization.

mod parser;

pub use parser::{
    field_text, is_falsy, ContributorRecord, RecordError, EXPECTED_FIELDS, REQUIRED_FIELDS,
};
