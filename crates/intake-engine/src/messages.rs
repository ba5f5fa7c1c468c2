//! Human-readable violation messages.
//!
//! Pattern failures get a field-specific explanation with an example of the
//! expected format; fields without a dedicated entry fall back to a generic
//! message. Range failures are phrased for the kind of number the field
//! holds (currency, quantity, or plain value).

/// Message for a value that failed its field's format pattern.
pub fn pattern_violation(field: &str) -> String {
    let message = match field {
        "providerNpi"
        | "renderingProviderNpi"
        | "referringProviderNpi"
        | "serviceLine1RenderingProviderNpi"
        | "serviceLine2RenderingProviderNpi" => "NPI must be exactly 10 digits (e.g., 1234567890)",
        "providerEin" => "EIN must be exactly 9 digits (e.g., 123456789)",
        "providerZipCode" | "subscriberZipCode" => {
            "ZIP code must be 5 digits or 5+4 format (e.g., 12345 or 12345-6789)"
        }
        "submitterPhoneNumber" | "providerPhoneNumber" => {
            "Phone number must be in format (555) 123-4567"
        }
        "bhtTime" => "Time must be in HH:MM format (e.g., 14:30)",
        "primaryDiagnosisCode"
        | "additionalDiagnosisCode1"
        | "additionalDiagnosisCode2"
        | "additionalDiagnosisCode3"
        | "additionalDiagnosisCode4" => {
            "Diagnosis code must be in ICD-10 format (e.g., E11.9, I10, Z51.11)"
        }
        "serviceLine1ProcedureCode" | "serviceLine2ProcedureCode" => {
            "Procedure code must be exactly 5 characters (e.g., 99213, G0008)"
        }
        "serviceLine1Modifier1"
        | "serviceLine1Modifier2"
        | "serviceLine2Modifier1"
        | "serviceLine2Modifier2" => "Modifier must be exactly 2 characters (e.g., 25, 59, 76)",
        _ => "Invalid format. Please check the required format.",
    };
    message.to_string()
}

/// Message for a number below the field's minimum.
pub fn range_minimum(field: &str, min: f64) -> String {
    if field.contains("Amount") {
        if min > 0.0 {
            "Amount must be greater than 0. Please enter a valid charge amount.".to_string()
        } else {
            "Amount cannot be negative.".to_string()
        }
    } else if field.contains("Quantity") {
        format!("Quantity must be at least {min}. Please enter a valid quantity.")
    } else {
        format!("Value must be at least {min}.")
    }
}

/// Message for a number above the field's maximum.
pub fn range_maximum(field: &str, max: f64) -> String {
    if field.contains("Amount") {
        format!("Amount cannot exceed ${max:.2}. Please verify the charge amount.")
    } else if field.contains("Quantity") {
        format!("Quantity cannot exceed {max}. Please enter a valid quantity.")
    } else {
        format!("Value cannot exceed {max}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npi_message_names_the_digit_count() {
        assert!(pattern_violation("providerNpi").contains("10 digits"));
        assert!(pattern_violation("serviceLine2RenderingProviderNpi").contains("10 digits"));
    }

    #[test]
    fn unknown_field_gets_generic_message() {
        assert_eq!(
            pattern_violation("somethingElse"),
            "Invalid format. Please check the required format."
        );
    }

    #[test]
    fn range_messages_match_field_kind() {
        assert!(range_minimum("totalChargeAmount", 0.01).contains("greater than 0"));
        assert_eq!(range_minimum("otherInsurancePaidAmount", 0.0), "Amount cannot be negative.");
        assert!(range_minimum("serviceLine1Quantity", 1.0).contains("at least 1"));
        assert!(range_maximum("serviceLine1ChargeAmount", 999_999.99).contains("$999999.99"));
        assert!(range_maximum("serviceLine1Quantity", 999.0).contains("999"));
        assert_eq!(range_minimum("someCounter", 5.0), "Value must be at least 5.");
    }
}
