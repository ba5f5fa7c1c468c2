//! Label-to-value extraction over a document's full text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ExtractError;
use crate::patterns::{self, DEFAULT_TEMPLATES};

lazy_static! {
    /// Content-stream operator left behind by naive PDF text recovery.
    static ref TJ_SUFFIX: Regex = Regex::new(r"\s*\)\s*Tj\s*$").unwrap();
    static ref TRAILING_PAREN: Regex = Regex::new(r"\s*\)\s*$").unwrap();
    static ref LEADING_PAREN: Regex = Regex::new(r"^\s*\(\s*").unwrap();
}

/// Extracts labeled values from free-form document text.
///
/// Each lookup tries the configured templates in order against the whole
/// text and stops at the first match with a non-empty captured group
/// (groups tried in index order). Extraction is best-effort: a label that
/// cannot be located yields an empty value, never an error.
#[derive(Debug)]
pub struct FieldExtractor<'t> {
    text: &'t str,
    templates: Vec<String>,
}

impl<'t> FieldExtractor<'t> {
    /// Extractor over `text` using the default fallback pattern list.
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            templates: DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Extractor with a caller-supplied pattern list.
    ///
    /// Templates use [`crate::patterns::LABEL_TOKEN`] as the label
    /// placeholder and are validated up front.
    pub fn with_patterns(text: &'t str, templates: &[&str]) -> Result<Self, ExtractError> {
        for template in templates {
            patterns::build(template, "probe").map_err(|source| ExtractError::InvalidPattern {
                template: (*template).to_string(),
                source,
            })?;
        }
        Ok(Self {
            text,
            templates: templates.iter().map(|t| (*t).to_string()).collect(),
        })
    }

    /// Value associated with `label`, or an empty string if no pattern
    /// locates one.
    pub fn extract(&self, label: &str) -> String {
        for template in &self.templates {
            // Templates are validated at construction; the default list
            // always compiles.
            let Ok(pattern) = patterns::build(template, label) else {
                continue;
            };
            let Some(captures) = pattern.captures(self.text) else {
                continue;
            };
            let captured = (1..captures.len()).find_map(|index| {
                captures
                    .get(index)
                    .map(|m| m.as_str())
                    .filter(|s| !s.is_empty())
            });
            if let Some(raw) = captured {
                return clean_artifacts(raw);
            }
        }
        String::new()
    }

    /// Boolean field lookup: true iff the extracted value reads as an
    /// affirmative ("yes", "true", or "y", case-insensitive).
    pub fn extract_bool(&self, label: &str) -> bool {
        matches!(
            self.extract(label).to_lowercase().as_str(),
            "yes" | "true" | "y"
        )
    }
}

/// Trim the captured value and strip stray PDF artifacts: a trailing
/// `) Tj` operator and unbalanced parentheses around the value.
fn clean_artifacts(raw: &str) -> String {
    let mut value = raw.trim().to_string();
    value = TJ_SUFFIX.replace(&value, "").into_owned();
    value = TRAILING_PAREN.replace(&value, "").into_owned();
    value = LEADING_PAREN.replace(&value, "").into_owned();
    value = TRAILING_PAREN.replace(&value, "").into_owned();
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_starred_colon_layout() {
        let text = "Provider NPI * : 1234567890\nProvider EIN * : 123456789\n";
        let extractor = FieldExtractor::new(text);
        assert_eq!(extractor.extract("Provider NPI"), "1234567890");
        assert_eq!(extractor.extract("Provider EIN"), "123456789");
    }

    #[test]
    fn extracts_equals_and_whitespace_layouts() {
        let extractor = FieldExtractor::new("Claim ID = CLM987654321\n");
        assert_eq!(extractor.extract("Claim ID"), "CLM987654321");

        let extractor = FieldExtractor::new("Submitter Name Medical Group LLC\n");
        assert_eq!(extractor.extract("Submitter Name"), "Medical Group LLC");
    }

    #[test]
    fn missing_label_yields_empty_value() {
        let extractor = FieldExtractor::new("nothing relevant here\n");
        assert_eq!(extractor.extract("Provider NPI"), "");
        assert!(!extractor.extract_bool("Accept Assignment?"));
    }

    #[test]
    fn strips_pdf_artifacts() {
        let extractor = FieldExtractor::new("Payer Name : (Blue Cross) Tj\n");
        assert_eq!(extractor.extract("Payer Name"), "Blue Cross");

        let extractor = FieldExtractor::new("Payer ID : (PAY123456)\n");
        assert_eq!(extractor.extract("Payer ID"), "PAY123456");
    }

    #[test]
    fn boolean_affirmatives() {
        for value in ["Yes", "yes", "Y", "true", "TRUE"] {
            let text = format!("Accept Assignment? * : {value}\n");
            let extractor = FieldExtractor::new(&text);
            assert!(extractor.extract_bool("Accept Assignment?"), "{value}");
        }
        for value in ["No", "n", "maybe", ""] {
            let text = format!("Accept Assignment? * : {value}\n");
            let extractor = FieldExtractor::new(&text);
            assert!(!extractor.extract_bool("Accept Assignment?"), "{value:?}");
        }
    }

    #[test]
    fn first_pattern_wins_over_looser_ones() {
        // Both the colon template and the bare-whitespace template could
        // match; the colon layout must be preferred.
        let extractor = FieldExtractor::new("Provider City maybe\nProvider City : Anytown\n");
        assert_eq!(extractor.extract("Provider City"), "Anytown");
    }

    #[test]
    fn value_is_trimmed() {
        let extractor = FieldExtractor::new("Group Number :    GRP123456   \n");
        assert_eq!(extractor.extract("Group Number"), "GRP123456");
    }

    #[test]
    fn custom_pattern_list_is_validated() {
        let err = FieldExtractor::with_patterns("text", &[r"{label}\s*(["]).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidPattern { .. }));

        let extractor =
            FieldExtractor::with_patterns("Claim ID -> CLM1\n", &[r"{label}\s*->\s*([^\n]+)"])
                .unwrap();
        assert_eq!(extractor.extract("Claim ID"), "CLM1");
    }
}
