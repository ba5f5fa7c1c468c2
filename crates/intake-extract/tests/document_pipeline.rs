//! End-to-end intake pipeline: decoded document bytes through extraction,
//! validation, and summarization.

use intake_engine::ClaimValidator;
use intake_extract::agent::summarize_agent_output;
use intake_extract::{decode::decode_document_bytes, map_document_text, AgentResponseParser};

fn claim_document() -> Vec<u8> {
    let text = [
        "HEALTHCARE CLAIM INTAKE FORM",
        "",
        "ST Control Number * : 0003",
        "BHT Transaction ID * : TRX123456789",
        "BHT Date * : 2024-05-01",
        "Submitter Name * : Medical Group LLC",
        "Submitter ID * : SUB123456",
        "Receiver Name * : Acme Insurance",
        "Receiver ID * : REC987654",
        "Provider Name * : Dr. Jane Doe Medical Practice",
        "Provider NPI * : 1234567890",
        "Provider EIN * : 123456789",
        "Provider Address Line 1 * : 123 Medical Center Dr",
        "Provider City * : Anytown",
        "Provider State * : FL",
        "Provider ZIP Code * : 12345",
        "Subscriber First Name * : John",
        "Subscriber Last Name * : Smith",
        "Subscriber Member ID * : MEM123456789",
        "Subscriber Date of Birth * : 1985-03-20",
        "Subscriber Address Line 1 * : 456 Patient St",
        "Subscriber City * : Patient City",
        "Subscriber State * : CA",
        "Subscriber ZIP Code * : 54321-9876",
        "Payer Name * : Blue Cross Blue Shield",
        "Payer ID * : PAY123456",
        "Claim ID * : CLM987654321",
        "Total Charge Amount * : 150.00",
        "Accept Assignment? * : Yes",
        "Service Date From * : 2024-04-28",
        "Service Date To * : 2024-04-28",
        "Primary Diagnosis Code * : E11.9",
        "Rendering Provider Name * : Dr. Sarah Johnson",
        "Rendering Provider NPI * : 0987654321",
        "Service Line 1: Procedure Code * : 99213",
        "Service Line 1: Charge Amount * : 75.00",
        "Service Line 1: Quantity * : 1",
        "Date Signed * : 2024-05-01",
        "I confirm the above information is accurate : Yes",
        "",
    ]
    .join("\n");
    text.into_bytes()
}

#[test]
fn document_bytes_become_a_valid_claim() {
    let text = decode_document_bytes(&claim_document());
    let record = map_document_text(&text);

    assert_eq!(record.text("providerNpi"), "1234567890");
    assert_eq!(record.text("totalChargeAmount"), "150.00");
    assert_eq!(record.text("primaryDiagnosisCode"), "E11.9");

    let validator = ClaimValidator::with_claim_defaults();
    let results = validator.validate_record(&record);
    let failures: Vec<_> = results
        .iter()
        .filter(|(_, result)| !result.is_valid)
        .map(|(name, result)| (name.clone(), result.message.clone()))
        .collect();
    assert!(failures.is_empty(), "unexpected failures: {failures:?}");

    let summary = validator.summarize(&record, &results);
    assert_eq!(summary.invalid_fields, 0);
    assert_eq!(summary.completed_required, summary.required_fields);
}

#[test]
fn binary_noise_does_not_break_extraction() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0x00, 0x01, 0x02, 0xfe, 0xff]);
    bytes.extend_from_slice(b"Provider NPI * : (1234567890) Tj\n");
    bytes.extend_from_slice(&[0x03, 0x9c]);
    bytes.extend_from_slice(b"Claim ID * : CLM1\n");

    let text = decode_document_bytes(&bytes);
    let record = map_document_text(&text);
    assert_eq!(record.text("providerNpi"), "1234567890");
    assert_eq!(record.text("claimId"), "CLM1");
}

#[test]
fn agent_exchange_flows_into_report_summary() {
    // The agent transport wraps per-agent prose in a JSON message array;
    // each message can carry named fenced blocks.
    let inner = "\
LeadValidatorAgent
```json
{ \"validation_status\": \"valid\" }
```
ActionRecommenderAgent
```json
{ \"code\": \"CO59\", \"denied\": true, \"probability\": \"95%\", \"reason\": \"Two identical 99213 CPT codes billed for the same date\", \"suggested_fix\": \"Review the medical documentation and append modifier 59\" }
```
";
    let responses = AgentResponseParser::new().parse(inner);
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].agent_name, "LeadValidatorAgent");
    assert_eq!(responses[1].agent_name, "ActionRecommenderAgent");

    // One transport message per agent turn.
    let (validator_text, recommender_text) = inner.split_once("ActionRecommenderAgent").unwrap();
    let recommender_text = format!("ActionRecommenderAgent{recommender_text}");
    let payload = serde_json::json!([
        {"content": {"parts": [{"text": validator_text}]}},
        {"content": {"parts": [{"text": recommender_text}]}},
    ])
    .to_string();
    let summary = summarize_agent_output(&payload);

    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].code, "CO59");
    assert!(summary.results[0].denied);
    assert_eq!(summary.results[0].probability, "95%");
}
