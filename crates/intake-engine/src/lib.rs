//! Rule-driven validation for claim intake records.
//!
//! The engine evaluates a [`ClaimRecord`](claim_types::ClaimRecord) against
//! a declarative [`RuleSet`]: per-field required/pattern/length/range
//! constraints plus domain-specific custom checks (date sanity, code-set
//! membership). Results are plain values; nothing here panics or returns
//! an error for bad input.

pub mod messages;
pub mod patterns;
pub mod rules;
pub mod summary;
pub mod validator;

pub use rules::{CustomCheck, RuleSet, ValidationRule};
pub use validator::ClaimValidator;

#[cfg(test)]
mod tests {
    use super::*;
    use claim_types::{ClaimRecord, FieldValue};

    fn validator() -> ClaimValidator {
        ClaimValidator::with_claim_defaults()
    }

    #[test]
    fn npi_scenarios() {
        let nine = validator().validate_field("providerNpi", &"123456789".into());
        assert!(!nine.is_valid);
        assert!(nine.message.as_deref().unwrap().contains("10 digits"));

        let ten = validator().validate_field("providerNpi", &"1234567890".into());
        assert!(ten.is_valid);
    }

    #[test]
    fn total_charge_amount_scenarios() {
        let zero = validator().validate_field("totalChargeAmount", &"0".into());
        assert!(!zero.is_valid);
        assert!(zero.message.as_deref().unwrap().contains("greater than 0"));

        let ok = validator().validate_field("totalChargeAmount", &"150.00".into());
        assert!(ok.is_valid);

        let too_big = validator().validate_field("totalChargeAmount", &"1000000.00".into());
        assert!(!too_big.is_valid);
        assert!(too_big.message.as_deref().unwrap().contains("cannot exceed"));
    }

    #[test]
    fn diagnosis_code_format() {
        assert!(validator()
            .validate_field("primaryDiagnosisCode", &"E11.9".into())
            .is_valid);

        let bad = validator().validate_field("primaryDiagnosisCode", &"diabetes".into());
        assert!(!bad.is_valid);
        assert!(bad.message.as_deref().unwrap().contains("ICD-10"));
    }

    #[test]
    fn a_complete_claim_passes_end_to_end() {
        let validator = validator();
        let mut record = ClaimRecord::new();
        for (name, value) in [
            ("stControlNumber", "0003"),
            ("bhtTransactionId", "TRX123456789"),
            ("bhtDate", "2024-05-01"),
            ("submitterName", "Medical Group LLC"),
            ("submitterId", "SUB123456"),
            ("receiverName", "Insurance Company"),
            ("receiverId", "REC987654"),
            ("providerName", "Dr. Jane Doe Medical Practice"),
            ("providerNpi", "1234567890"),
            ("providerEin", "123456789"),
            ("providerAddressLine1", "123 Medical Center Dr"),
            ("providerCity", "Anytown"),
            ("providerState", "FL"),
            ("providerZipCode", "12345"),
            ("subscriberFirstName", "John"),
            ("subscriberLastName", "Smith"),
            ("subscriberMemberId", "MEM123456789"),
            ("subscriberDateOfBirth", "1985-03-20"),
            ("subscriberAddressLine1", "456 Patient St"),
            ("subscriberCity", "Patient City"),
            ("subscriberState", "CA"),
            ("subscriberZipCode", "54321-9876"),
            ("payerName", "Blue Cross Blue Shield"),
            ("payerId", "PAY123456"),
            ("claimId", "CLM987654321"),
            ("totalChargeAmount", "150.00"),
            ("serviceDateFrom", "2024-04-28"),
            ("serviceDateTo", "2024-04-28"),
            ("primaryDiagnosisCode", "E11.9"),
            ("renderingProviderName", "Dr. Sarah Johnson"),
            ("renderingProviderNpi", "0987654321"),
            ("serviceLine1ProcedureCode", "99213"),
            ("serviceLine1ChargeAmount", "75.00"),
            ("serviceLine1Quantity", "1"),
            ("dateSigned", "2024-05-01"),
        ] {
            record.set(name, value);
        }
        record.set("confirmAccurate", true);

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
    fn service_date_ordering_is_not_enforced() {
        // Known gap: from/to ordering is a cross-field concern the engine
        // deliberately does not check.
        let validator = validator();
        assert!(validator
            .validate_field("serviceDateFrom", &"2024-05-02".into())
            .is_valid);
        assert!(validator
            .validate_field("serviceDateTo", &"2024-05-01".into())
            .is_valid);
    }

    #[test]
    fn boolean_fields_never_hit_string_checks() {
        // A bool under a rule with length bounds must not be measured as a
        // zero-length string.
        let rules = RuleSet::new().with_rule(
            "someFlag",
            ValidationRule {
                required: true,
                min_length: Some(5),
                ..Default::default()
            },
        );
        let validator = ClaimValidator::new(rules);
        assert!(validator
            .validate_field("someFlag", &FieldValue::Bool(true))
            .is_valid);
    }
}
