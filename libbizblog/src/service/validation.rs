//! Draft validation
//!
//! Checks the write form before a post is published. Title, content and
//! category are required; everything else is advisory.

use crate::error::ValidationError;
use crate::types::Draft;

/// Maximum content size in bytes (100KB)
pub const MAX_CONTENT_LENGTH: usize = 100 * 1024;

/// Titles longer than this still publish but get a warning
pub const TITLE_WARN_LENGTH: usize = 120;

/// Result of validating a draft
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Required fields that are empty or whitespace-only, in form order
    pub missing: Vec<String>,
    /// Blocking problems other than missing fields
    pub errors: Vec<String>,
    /// Non-blocking advice
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty() && self.errors.is_empty()
    }

    /// Every blocking message, missing fields first
    pub fn messages(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|field| format!("{} is required", field))
            .chain(self.errors.iter().cloned())
            .collect()
    }

    /// Convert into the error surfaced by publish
    pub fn into_result(self) -> Result<(), ValidationError> {
        if !self.missing.is_empty() {
            return Err(ValidationError::MissingFields(self.missing));
        }
        if let Some(reason) = self.errors.into_iter().next() {
            return Err(ValidationError::Invalid {
                field: "content".to_string(),
                reason,
            });
        }
        Ok(())
    }
}

/// Validate a draft against the publishing rules
///
/// - title, content and category must be non-empty after trimming
/// - content must not exceed [`MAX_CONTENT_LENGTH`] bytes
/// - a title over [`TITLE_WARN_LENGTH`] characters produces a warning
pub fn validate_draft(draft: &Draft) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (field, value) in [
        ("title", &draft.title),
        ("content", &draft.content),
        ("category", &draft.category),
    ] {
        if value.trim().is_empty() {
            report.missing.push(field.to_string());
        }
    }

    if draft.content.len() > MAX_CONTENT_LENGTH {
        report.errors.push(format!(
            "Content size ({} bytes) exceeds maximum allowed size ({} bytes)",
            draft.content.len(),
            MAX_CONTENT_LENGTH
        ));
    }

    let title_chars = draft.title.trim().chars().count();
    if title_chars > TITLE_WARN_LENGTH {
        report.warnings.push(format!(
            "Title length ({} characters) exceeds recommended limit of {} characters",
            title_chars, TITLE_WARN_LENGTH
        ));
    }

    report
}
