//! Best-effort extraction of claim data from unstructured text.
//!
//! Two pipelines live here:
//!
//! - **Document mapping**: decode uploaded document bytes to printable
//!   text, then locate each catalog field's label with an ordered list of
//!   fallback patterns and assemble a [`claim_types::ClaimRecord`].
//! - **Agent output**: pull named, fenced JSON payloads out of free-form
//!   agent text and derive the denial-risk summary used for reporting.
//!
//! Extraction is deliberately lossy: a field or block that cannot be
//! recovered defaults to empty rather than failing the operation.

pub mod agent;
pub mod decode;
pub mod extractor;
pub mod mapper;
pub mod patterns;

mod error;

pub use agent::{AgentResponseParser, DiagnosticSink, TracingSink};
pub use error::ExtractError;
pub use extractor::FieldExtractor;
pub use mapper::map_document_text;
