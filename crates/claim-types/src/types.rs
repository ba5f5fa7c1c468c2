/// Outcome of validating a single field.
///
/// `message` is `Some` exactly when the value failed; use the constructors
/// to keep the two in sync.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Completion summary over a validated record, rendered next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationSummary {
    pub total_fields: usize,
    pub valid_fields: usize,
    pub invalid_fields: usize,
    pub required_fields: usize,
    pub completed_required: usize,
}

/// A named JSON payload recovered from free-form agent output.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgentResponse {
    pub agent_name: String,
    pub response: serde_json::Value,
}

/// One denial-risk row derived from agent output, for report rendering.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RiskFinding {
    /// Claim adjustment or procedure code the finding refers to.
    pub code: String,
    pub denied: bool,
    /// Denial probability as reported, e.g. "95%".
    pub probability: String,
    pub reason: String,
    pub suggested_fix: String,
    pub priority: Option<String>,
    pub risk_level: Option<String>,
}

/// Summary derived from a full agent exchange.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResponseSummary {
    pub validation_status: String,
    pub results: Vec<RiskFinding>,
    /// Reported processing time in seconds.
    pub processing_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_constructors_keep_message_in_sync() {
        let ok = ValidationResult::pass();
        assert!(ok.is_valid);
        assert!(ok.message.is_none());

        let bad = ValidationResult::fail("NPI must be exactly 10 digits");
        assert!(!bad.is_valid);
        assert_eq!(bad.message.as_deref(), Some("NPI must be exactly 10 digits"));
    }
}
