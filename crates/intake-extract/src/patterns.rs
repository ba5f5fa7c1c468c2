//! Ordered fallback patterns for label/value extraction.
//!
//! Each template is a regex with a `{label}` placeholder; the label is
//! escaped for regex metacharacters (`?`, `(`, `)`, `/`) before expansion
//! and matched case-insensitively. The list is data-driven so new document
//! layouts can be supported without touching the extractor.

use regex::{Regex, RegexBuilder};

/// Placeholder replaced by the escaped field label.
pub const LABEL_TOKEN: &str = "{label}";

/// Templates tried in priority order.
///
/// Later entries are strictly more permissive and risk false positives
/// (the last would match almost anything), so the first match wins.
pub const DEFAULT_TEMPLATES: &[&str] = &[
    // "Label <anything but a colon> : value to end of line"
    r"{label}\s*[^:]*\s*:\s*([^\n]+)",
    // "Label * : value" (optional required-marker asterisk)
    r"{label}\s*\*?\s*:\s*([^\n]+)",
    // "Label: value" or "Label = value"
    r"{label}\s*[:=]\s*([^\n]+)",
    // "Label value"
    r"{label}\s+([^\n]+)",
    // "(Label) value": loosest; label is group 1, remainder group 2
    r"({label})\s*([^\n]+)",
];

/// Expand a template for a concrete label and compile it.
pub(crate) fn build(template: &str, label: &str) -> Result<Regex, regex::Error> {
    let expanded = template.replace(LABEL_TOKEN, &regex::escape(label));
    RegexBuilder::new(&expanded).case_insensitive(true).build()
}
