//! Shared data model for the claim intake pipeline.
//!
//! Holds the claim field catalog, the flat claim record and its value type,
//! the X12-style code-set option tables, and the result types produced by
//! the validation engine and the agent-response summarizer.

pub mod catalog;
pub mod options;
pub mod record;

mod types;

pub use catalog::{claim_fields, field_spec, FieldKind, FieldSpec};
pub use options::CodeOption;
pub use record::{ClaimRecord, FieldValue};
pub use types::{
    AgentResponse, ResponseSummary, RiskFinding, ValidationResult, ValidationSummary,
};
