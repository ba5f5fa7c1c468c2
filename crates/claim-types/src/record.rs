//! The flat claim record and its value type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{claim_fields, FieldKind};

/// Value held by one claim field.
///
/// Numeric fields (amounts, quantities) are stored as text and parsed on
/// demand. Serialized form matches the intake form's session payload: plain
/// JSON strings, booleans, and string arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

impl FieldValue {
    /// Default value for a field kind: empty string, `false`, or empty list.
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Bool => FieldValue::Bool(false),
            FieldKind::List => FieldValue::List(Vec::new()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// True for a blank string (after trim), `false`, or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Bool(b) => !b,
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// One claim form's field values: a flat mapping from field name to value.
///
/// There is no nesting; service-line grouping exists only in the field
/// naming convention (`serviceLineN*`). The record serializes as a plain
/// JSON object keyed by the catalog field names, the same shape the intake
/// form persists between page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl ClaimRecord {
    /// A record with every catalog field set to its default value.
    pub fn new() -> Self {
        let fields = claim_fields()
            .iter()
            .map(|spec| (spec.name.to_string(), FieldValue::default_for(spec.kind)))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text content of a field, empty for non-text fields.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Reset every field back to its default value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Default for ClaimRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CLAIM_FIELDS;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_record_covers_the_catalog_with_defaults() {
        let record = ClaimRecord::new();
        assert_eq!(record.len(), CLAIM_FIELDS.len());
        assert_eq!(record.get("providerNpi"), Some(&FieldValue::Text(String::new())));
        assert_eq!(record.get("acceptAssignment"), Some(&FieldValue::Bool(false)));
        assert_eq!(
            record.get("serviceLine1DiagnosisPointer"),
            Some(&FieldValue::List(Vec::new()))
        );
    }

    #[test]
    fn set_and_reset_round_trip() {
        let mut record = ClaimRecord::new();
        record.set("claimId", "CLM987654321");
        record.set("acceptAssignment", true);
        assert_eq!(record.text("claimId"), "CLM987654321");

        record.reset();
        assert_eq!(record, ClaimRecord::new());
    }

    #[test]
    fn json_round_trip_preserves_all_kinds() {
        let mut record = ClaimRecord::new();
        record.set("providerNpi", "1234567890");
        record.set("emergencyIndicator", true);
        record.set(
            "serviceLine1DiagnosisPointer",
            vec!["1".to_string(), "2".to_string()],
        );

        let json = serde_json::to_string(&record).unwrap();
        let restored: ClaimRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn field_value_emptiness() {
        assert!(FieldValue::Text("   ".to_string()).is_empty());
        assert!(FieldValue::Bool(false).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::Text("x".to_string()).is_empty());
        assert!(!FieldValue::Bool(true).is_empty());
        assert!(!FieldValue::List(vec!["1".to_string()]).is_empty());
    }
}
