//! Parsing and summarization of free-form agent output.

pub mod parser;
pub mod summary;

pub use parser::{AgentResponseParser, DiagnosticSink, TracingSink};
pub use summary::summarize_agent_output;

use claim_types::AgentResponse;

/// First response from the named agent, if any.
///
/// Parse output keeps duplicates in source order, so the first block wins
/// here; report consumers rely on that convention.
pub fn find_response<'a>(responses: &'a [AgentResponse], name: &str) -> Option<&'a AgentResponse> {
    responses.iter().find(|response| response.agent_name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn find_returns_the_first_match() {
        let responses = vec![
            AgentResponse {
                agent_name: "FooAgent".to_string(),
                response: json!({"run": 1}),
            },
            AgentResponse {
                agent_name: "FooAgent".to_string(),
                response: json!({"run": 2}),
            },
        ];
        let found = find_response(&responses, "FooAgent").unwrap();
        assert_eq!(found.response["run"], json!(1));
        assert!(find_response(&responses, "BarAgent").is_none());
    }
}
