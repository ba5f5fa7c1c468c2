//! Denial-risk summary derived from a full agent exchange.
//!
//! The transport hands back a JSON array of messages, each carrying free
//! text that may embed structured results. Recovery is layered: fenced
//! JSON blocks first, whole-message JSON second, and finally plain-text
//! mining for codes, probabilities, and denial language. Agents disagree
//! on field names, so structured rows are read through alias chains.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use claim_types::{ResponseSummary, RiskFinding};

const DEFAULT_STATUS: &str = "valid";
const DEFAULT_PROCESSING_TIME: f64 = 2.3;

lazy_static! {
    static ref JSON_BLOCK: Regex = Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap();

    /// Five-digit claim/CPT codes, HCPCS codes, and CO carrier codes.
    static ref NUMERIC_CODE: Regex = Regex::new(r"\b\d{5}\b").unwrap();
    static ref HCPCS_CODE: Regex = Regex::new(r"\b[A-Z]\d{4}\b").unwrap();
    static ref CARRIER_CODE: Regex = Regex::new(r"\bCO-?\d+\b").unwrap();

    static ref PROBABILITY_OF_DENIAL: Regex =
        Regex::new(r"(?i)probability of denial.*?(\d+)%").unwrap();
    static ref PERCENT_THEN_DENIAL: Regex = Regex::new(r"(?i)(\d+)%.*?denial").unwrap();
    static ref DENIAL_THEN_PERCENT: Regex = Regex::new(r"(?i)denial.*?(\d+)%").unwrap();
}

/// Words that mark a message as describing a denial risk.
const DENIAL_KEYWORDS: &[&str] = &["denied", "denial", "co-59", "error", "risk", "bundling"];

/// Derive the report summary from the raw agent exchange payload.
///
/// Never fails: an unparseable payload yields the default summary (status
/// "valid", no findings) with a logged warning.
pub fn summarize_agent_output(raw: &str) -> ResponseSummary {
    let messages = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => Vec::new(),
        Err(error) => {
            tracing::warn!(%error, "agent exchange payload is not valid JSON");
            return default_summary();
        }
    };

    let mut summary = default_summary();

    for message in &messages {
        let Some(text) = message_text(message) else {
            continue;
        };

        if let Some(block) = JSON_BLOCK.captures(text).and_then(|c| c.get(1)) {
            match serde_json::from_str::<Value>(block.as_str()) {
                Ok(data) => harvest(&data, &mut summary),
                Err(error) => {
                    tracing::warn!(%error, "skipping malformed JSON block in agent message");
                }
            }
        }

        // Some agents send the whole message as JSON with no fence.
        if let Ok(data) = serde_json::from_str::<Value>(text) {
            harvest(&data, &mut summary);
        }
    }

    if summary.results.is_empty() {
        summary.results = fallback_findings(&messages);
    }

    summary
}

fn default_summary() -> ResponseSummary {
    ResponseSummary {
        validation_status: DEFAULT_STATUS.to_string(),
        results: Vec::new(),
        processing_time: DEFAULT_PROCESSING_TIME,
    }
}

fn message_text(message: &Value) -> Option<&str> {
    message
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Pull findings and exchange metadata out of one structured payload.
fn harvest(data: &Value, summary: &mut ResponseSummary) {
    let list = data
        .get("validation_results")
        .or_else(|| data.get("results"));
    if let Some(Value::Array(items)) = list {
        if !items.is_empty() {
            summary.results = items.iter().map(map_finding).collect();
        }
    }

    // A bare single-result object, not wrapped in an array.
    if data.get("code").is_some() && !data.is_array() {
        summary.results = vec![map_finding(data)];
    }

    if let Some(status) = data.get("validation_status").and_then(Value::as_str) {
        summary.validation_status = status.to_string();
    }
    if let Some(time) = data.get("processing_time").and_then(Value::as_f64) {
        summary.processing_time = time;
    }
}

/// Read one result row through the field-alias chains.
fn map_finding(result: &Value) -> RiskFinding {
    let denied = first_bool(result, &["denied", "risk_detected", "denial_risk"]).unwrap_or(false);
    RiskFinding {
        code: first_str(result, &["code", "service_code", "procedure_code"])
            .unwrap_or("Unknown")
            .to_string(),
        denied,
        probability: first_str(
            result,
            &[
                "probability",
                "probability of denial based on given reasons",
                "risk_percentage",
                "risk_probability",
            ],
        )
        .unwrap_or("0%")
        .to_string(),
        reason: first_str(result, &["reason", "analysis", "risk_analysis"])
            .unwrap_or("No analysis provided")
            .to_string(),
        suggested_fix: first_str(
            result,
            &["suggested_fix", "recommendation", "action_recommendation"],
        )
        .unwrap_or("No recommendation provided")
        .to_string(),
        priority: first_str(result, &["priority", "risk_priority"])
            .map(str::to_string)
            .or_else(|| Some(priority_for(denied))),
        risk_level: first_str(result, &["risk_level", "risk_category"])
            .map(str::to_string)
            .or_else(|| Some(priority_for(denied))),
    }
}

fn first_str<'v>(value: &'v Value, keys: &[&str]) -> Option<&'v str> {
    keys.iter().find_map(|key| value.get(key)?.as_str())
}

fn first_bool(value: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| value.get(key)?.as_bool())
}

fn priority_for(denied: bool) -> String {
    if denied { "High" } else { "Low" }.to_string()
}

/// Last resort: mine the combined message prose for a code, a probability,
/// and denial language.
fn fallback_findings(messages: &[Value]) -> Vec<RiskFinding> {
    let combined = messages
        .iter()
        .filter_map(message_text)
        .collect::<Vec<_>>()
        .join(" ");
    if combined.trim().is_empty() {
        return Vec::new();
    }

    let Some(code) = first_code(&combined) else {
        return Vec::new();
    };

    let lower = combined.to_lowercase();
    let denied = DENIAL_KEYWORDS.iter().any(|keyword| lower.contains(keyword));

    vec![RiskFinding {
        code,
        denied,
        probability: extract_probability(&combined).unwrap_or_else(|| "0%".to_string()),
        reason: extract_reason(&combined),
        suggested_fix: extract_fix(&combined),
        priority: Some(priority_for(denied)),
        risk_level: Some(priority_for(denied)),
    }]
}

fn first_code(text: &str) -> Option<String> {
    for pattern in [&*NUMERIC_CODE, &*HCPCS_CODE, &*CARRIER_CODE] {
        if let Some(found) = pattern.find(text) {
            return Some(found.as_str().to_string());
        }
    }
    None
}

fn extract_probability(text: &str) -> Option<String> {
    for pattern in [
        &*PROBABILITY_OF_DENIAL,
        &*PERCENT_THEN_DENIAL,
        &*DENIAL_THEN_PERCENT,
    ] {
        if let Some(percent) = pattern.captures(text).and_then(|c| c.get(1)) {
            return Some(format!("{}%", percent.as_str()));
        }
    }
    None
}

/// Reason for the finding: a labeled line, a JSON-block field, an analysis
/// sentence, or a prose snippet, in that order.
fn extract_reason(text: &str) -> String {
    if let Some(line) = labeled_line(text, &["reason:", "analysis:"]) {
        return line;
    }
    if let Some(value) = json_block_field(text, "reason") {
        return value;
    }
    if let Some(sentence) = keyword_sentence(
        text,
        &["cpt", "code"],
        &["billed", "service", "denial"],
    ) {
        return sentence;
    }
    prose_snippet(text, SnippetEnd::Start)
        .unwrap_or_else(|| "Analysis provided by AI agent".to_string())
}

/// Suggested fix: same layering as [`extract_reason`].
fn extract_fix(text: &str) -> String {
    if let Some(line) = labeled_line(text, &["suggested_fix:", "fix:", "recommendation:"]) {
        return line;
    }
    if let Some(value) = json_block_field(text, "suggested_fix") {
        return value;
    }
    if let Some(sentence) = keyword_sentence(
        text,
        &["review", "append", "modifier"],
        &["medical", "record", "claim"],
    ) {
        return sentence;
    }
    prose_snippet(text, SnippetEnd::End)
        .unwrap_or_else(|| "Review agent recommendations for specific actions".to_string())
}

/// First line labeled with one of `markers`, when the content after the
/// colon is substantial.
fn labeled_line(text: &str, markers: &[&str]) -> Option<String> {
    for line in text.lines() {
        let lower = line.to_lowercase();
        if markers.iter().any(|marker| lower.contains(marker)) {
            let content = line.splitn(2, ':').nth(1).unwrap_or("").trim();
            if content.len() > 10 {
                return Some(content.to_string());
            }
        }
    }
    None
}

fn json_block_field(text: &str, field: &str) -> Option<String> {
    let block = JSON_BLOCK.captures(text)?.get(1)?;
    let data: Value = serde_json::from_str(block.as_str()).ok()?;
    let value = data.get(field)?.as_str()?;
    (value.len() > 10).then(|| value.to_string())
}

/// First sentence containing a word from each keyword group.
fn keyword_sentence(text: &str, first_group: &[&str], second_group: &[&str]) -> Option<String> {
    for sentence in text.split(['.', '!', '?']) {
        let lower = sentence.to_lowercase();
        if first_group.iter().any(|keyword| lower.contains(keyword))
            && second_group.iter().any(|keyword| lower.contains(keyword))
        {
            let trimmed = sentence.trim();
            if trimmed.len() > 20 {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

enum SnippetEnd {
    Start,
    End,
}

/// Up to 200 characters of prose with JSON blocks removed.
fn prose_snippet(text: &str, end: SnippetEnd) -> Option<String> {
    let prose = JSON_BLOCK.replace_all(text, "");
    let prose = prose.trim();
    if prose.len() <= 50 {
        return None;
    }
    let chars: Vec<char> = prose.chars().collect();
    let snippet: String = match end {
        SnippetEnd::Start => {
            let mut snippet: String = chars.iter().take(200).collect();
            if chars.len() > 200 {
                snippet.push_str("...");
            }
            snippet
        }
        SnippetEnd::End => chars[chars.len().saturating_sub(200)..].iter().collect(),
    };
    Some(snippet)
}
