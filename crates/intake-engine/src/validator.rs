//! Field and record validation.

use std::collections::BTreeMap;

use claim_types::{ClaimRecord, FieldValue, ValidationResult, ValidationSummary};

use crate::messages;
use crate::rules::RuleSet;
use crate::summary;

/// Validates claim fields against an immutable [`RuleSet`].
///
/// Every operation is a pure function over the supplied value(s): the same
/// input always produces the same result, and nothing is thrown; failures
/// come back as [`ValidationResult`] values.
pub struct ClaimValidator {
    rules: RuleSet,
}

impl ClaimValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validator configured with the standard claim form table.
    pub fn with_claim_defaults() -> Self {
        Self::new(RuleSet::claim_defaults())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate a single field value.
    ///
    /// Checks run in a fixed order (required, pattern, length, numeric
    /// range, custom) and the first failure wins. A field with no rule is
    /// always valid; an optional field with an empty value short-circuits
    /// to valid.
    pub fn validate_field(&self, name: &str, value: &FieldValue) -> ValidationResult {
        let rule = match self.rules.get(name) {
            Some(rule) => rule,
            None => return ValidationResult::pass(),
        };

        if rule.required {
            match value {
                FieldValue::Text(s) if s.trim().is_empty() => {
                    return ValidationResult::fail(
                        "This field is required. Please enter a value.",
                    );
                }
                FieldValue::Bool(false) => {
                    return ValidationResult::fail(
                        "This field is required. Please check the box to confirm.",
                    );
                }
                FieldValue::List(items) if items.is_empty() => {
                    return ValidationResult::fail(
                        "This field is required. Please select at least one option.",
                    );
                }
                _ => {}
            }
        }

        // Non-text values contribute no text content; the remaining checks
        // operate on the string form only.
        let text = value.as_text().unwrap_or("");

        if !rule.required && text.trim().is_empty() {
            return ValidationResult::pass();
        }

        if let Some(pattern) = &rule.pattern {
            if !text.is_empty() && !pattern.is_match(text) {
                return ValidationResult::fail(messages::pattern_violation(name));
            }
        }

        if let FieldValue::Text(s) = value {
            if let Some(min) = rule.min_length {
                if s.len() < min {
                    return ValidationResult::fail(format!(
                        "Minimum {} characters required. Current: {} characters.",
                        min,
                        s.len()
                    ));
                }
            }
            if let Some(max) = rule.max_length {
                if s.len() > max {
                    return ValidationResult::fail(format!(
                        "Maximum {} characters allowed. Current: {} characters.",
                        max,
                        s.len()
                    ));
                }
            }
        }

        if (rule.min.is_some() || rule.max.is_some()) && !text.is_empty() {
            match text.trim().parse::<f64>() {
                Err(_) => return ValidationResult::fail("Please enter a valid number."),
                Ok(number) => {
                    if let Some(min) = rule.min {
                        if number < min {
                            return ValidationResult::fail(messages::range_minimum(name, min));
                        }
                    }
                    if let Some(max) = rule.max {
                        if number > max {
                            return ValidationResult::fail(messages::range_maximum(name, max));
                        }
                    }
                }
            }
        }

        if let Some(custom) = &rule.custom {
            if let Some(message) = custom(text) {
                return ValidationResult::fail(message);
            }
        }

        ValidationResult::pass()
    }

    /// Validate every field in the record independently.
    ///
    /// No cross-field checks run here; in particular, service-date-from is
    /// not compared against service-date-to.
    pub fn validate_record(&self, record: &ClaimRecord) -> BTreeMap<String, ValidationResult> {
        let results: BTreeMap<String, ValidationResult> = record
            .iter()
            .map(|(name, value)| (name.to_string(), self.validate_field(name, value)))
            .collect();

        let invalid = results.values().filter(|r| !r.is_valid).count();
        tracing::debug!(fields = results.len(), invalid, "validated claim record");

        results
    }

    /// Completion summary over a validated record.
    pub fn summarize(
        &self,
        record: &ClaimRecord,
        results: &BTreeMap<String, ValidationResult>,
    ) -> ValidationSummary {
        summary::summarize(&self.rules, record, results)
    }
}

impl Default for ClaimValidator {
    fn default() -> Self {
        Self::with_claim_defaults()
    }
}
