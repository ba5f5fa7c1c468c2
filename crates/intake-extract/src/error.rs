use thiserror::Error;

/// Errors from configuring the extraction pipeline.
///
/// Extraction itself never fails; only caller-supplied configuration can.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid extraction pattern `{template}`: {source}")]
    InvalidPattern {
        template: String,
        #[source]
        source: regex::Error,
    },
}
