//! Extraction of named, fenced JSON blocks from agent text.
//!
//! Agent output interleaves prose with payloads shaped like a name line
//! ("LeadValidatorAgent") followed by a fenced `json` code block. The
//! parser is a two-state machine over trimmed lines.
//! Malformed blocks are reported to the diagnostic sink and dropped;
//! parsing always continues.

use claim_types::AgentResponse;

/// Receiver for best-effort parse diagnostics.
///
/// Injected so tests can observe dropped blocks instead of scraping logs.
pub trait DiagnosticSink: Send + Sync {
    fn malformed_json_block(&self, agent_name: &str, error: &serde_json::Error);
}

/// Default sink: forwards diagnostics to the `tracing` subscriber.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn malformed_json_block(&self, agent_name: &str, error: &serde_json::Error) {
        tracing::warn!(agent = agent_name, %error, "dropping malformed agent JSON block");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Between blocks, watching for a name line or a fence opener.
    Scanning,
    /// Inside a fenced block, accumulating payload lines.
    Capturing,
}

/// Line-oriented parser for named JSON blocks.
pub struct AgentResponseParser {
    name_suffix: String,
    sink: Box<dyn DiagnosticSink>,
}

impl AgentResponseParser {
    /// Parser recognizing names ending in `"Agent"`, logging via `tracing`.
    pub fn new() -> Self {
        Self {
            name_suffix: "Agent".to_string(),
            sink: Box::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Change the suffix that marks a name line.
    pub fn with_name_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.name_suffix = suffix.into();
        self
    }

    /// Parse all named JSON blocks out of `text`, in source order.
    ///
    /// Duplicate names are kept; consumers typically pick the first match.
    /// An unterminated block at end of input is discarded.
    pub fn parse(&self, text: &str) -> Vec<AgentResponse> {
        let mut responses = Vec::new();
        let mut state = ParseState::Scanning;
        let mut current_name = String::new();
        let mut buffer = String::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            match state {
                ParseState::Scanning => {
                    if line.ends_with(&self.name_suffix)
                        && !line.starts_with('{')
                        && !line.starts_with('}')
                    {
                        current_name = line.to_string();
                    } else if line.starts_with("```json") {
                        state = ParseState::Capturing;
                        buffer.clear();
                    }
                }
                ParseState::Capturing => {
                    if line == "```" {
                        state = ParseState::Scanning;
                        match serde_json::from_str(&buffer) {
                            Ok(response) => responses.push(AgentResponse {
                                agent_name: std::mem::take(&mut current_name),
                                response,
                            }),
                            Err(error) => {
                                self.sink.malformed_json_block(&current_name, &error);
                                current_name.clear();
                            }
                        }
                        buffer.clear();
                    } else {
                        buffer.push_str(line);
                        buffer.push('\n');
                    }
                }
            }
        }

        responses
    }
}

impl Default for AgentResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
