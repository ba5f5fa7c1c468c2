//! Completion summary over a validated record.

use std::collections::BTreeMap;

use claim_types::{ClaimRecord, ValidationResult, ValidationSummary};

use crate::rules::RuleSet;

/// Pure reduction of per-field results into the completion summary shown
/// next to the form. A required field counts as completed when it is
/// non-empty and valid.
pub fn summarize(
    rules: &RuleSet,
    record: &ClaimRecord,
    results: &BTreeMap<String, ValidationResult>,
) -> ValidationSummary {
    let total_fields = results.len();
    let valid_fields = results.values().filter(|result| result.is_valid).count();
    let invalid_fields = total_fields - valid_fields;

    let mut required_fields = 0;
    let mut completed_required = 0;
    for (name, value) in record.iter() {
        let required = rules.get(name).is_some_and(|rule| rule.required);
        if !required {
            continue;
        }
        required_fields += 1;
        let valid = results.get(name).is_some_and(|result| result.is_valid);
        if valid && !value.is_empty() {
            completed_required += 1;
        }
    }

    ValidationSummary {
        total_fields,
        valid_fields,
        invalid_fields,
        required_fields,
        completed_required,
    }
}
