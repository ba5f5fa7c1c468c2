//! Document text to claim record mapping.

use claim_types::{claim_fields, ClaimRecord, FieldKind, FieldValue};

use crate::extractor::FieldExtractor;

/// Populate a claim record from unstructured document text.
///
/// Runs one extraction per catalog field; each lookup is independent and
/// stateless over the same source text, so extraction order does not
/// matter. Fields that cannot be located keep their defaults.
///
/// Known ambiguity: lookups match against the whole document, so a label
/// that appears under more than one numbered section ("Service Line 1" and
/// "Service Line 2" share sub-labels when the line number is part of the
/// label prefix that fails to survive text recovery) resolves to its first
/// occurrence. Values can cross-assign when the document's ordering does
/// not follow field declaration order. Kept as-is for compatibility with
/// the forms this pipeline ingests; scoping extraction to section slices
/// would change results on existing documents.
pub fn map_document_text(text: &str) -> ClaimRecord {
    let extractor = FieldExtractor::new(text);
    let mut record = ClaimRecord::new();
    let mut misses = 0usize;

    for spec in claim_fields() {
        let value = match spec.kind {
            FieldKind::Text => {
                let value = extractor.extract(spec.label);
                if value.is_empty() {
                    misses += 1;
                }
                FieldValue::Text(value)
            }
            FieldKind::Bool => FieldValue::Bool(extractor.extract_bool(spec.label)),
            FieldKind::List => {
                let value = extractor.extract(spec.label);
                if value.is_empty() {
                    misses += 1;
                    FieldValue::List(Vec::new())
                } else {
                    FieldValue::List(vec![value])
                }
            }
        };
        record.set(spec.name, value);
    }

    tracing::debug!(misses, "mapped document text into claim record");
    record
}
