//! Compiled format patterns for claim field validation.
//!
//! All patterns are anchored: a value must match in full to pass.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// National Provider Identifier: exactly 10 digits.
    pub static ref NPI_PATTERN: Regex = Regex::new(r"^\d{10}$").unwrap();

    /// Employer Identification Number: exactly 9 digits.
    pub static ref EIN_PATTERN: Regex = Regex::new(r"^\d{9}$").unwrap();

    /// US ZIP code, 5-digit or ZIP+4.
    pub static ref ZIP_PATTERN: Regex = Regex::new(r"^\d{5}(-\d{4})?$").unwrap();

    /// North American phone number with optional punctuation.
    pub static ref PHONE_PATTERN: Regex =
        Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").unwrap();

    /// 24-hour HH:MM time.
    pub static ref TIME_PATTERN: Regex =
        Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap();

    /// ICD-10-CM diagnosis code, e.g. E11.9 or Z51.11.
    pub static ref ICD10_PATTERN: Regex =
        Regex::new(r"^[A-Z]\d{2}\.\d{1,2}[A-Z0-9]?$").unwrap();

    /// CPT/HCPCS procedure code: 5 uppercase alphanumerics.
    pub static ref PROCEDURE_PATTERN: Regex = Regex::new(r"^[A-Z0-9]{5}$").unwrap();

    /// Procedure modifier: 2 uppercase alphanumerics.
    pub static ref MODIFIER_PATTERN: Regex = Regex::new(r"^[A-Z0-9]{2}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npi_requires_exactly_ten_digits() {
        assert!(NPI_PATTERN.is_match("1234567890"));
        assert!(!NPI_PATTERN.is_match("123456789"));
        assert!(!NPI_PATTERN.is_match("12345678901"));
        assert!(!NPI_PATTERN.is_match("12345abcde"));
    }

    #[test]
    fn zip_accepts_both_formats() {
        assert!(ZIP_PATTERN.is_match("12345"));
        assert!(ZIP_PATTERN.is_match("12345-6789"));
        assert!(!ZIP_PATTERN.is_match("1234"));
        assert!(!ZIP_PATTERN.is_match("12345-678"));
    }

    #[test]
    fn phone_accepts_common_punctuation() {
        assert!(PHONE_PATTERN.is_match("(555) 123-4567"));
        assert!(PHONE_PATTERN.is_match("555-123-4567"));
        assert!(PHONE_PATTERN.is_match("555.123.4567"));
        assert!(PHONE_PATTERN.is_match("5551234567"));
        assert!(!PHONE_PATTERN.is_match("555-1234"));
    }

    #[test]
    fn icd10_shapes() {
        assert!(ICD10_PATTERN.is_match("E11.9"));
        assert!(ICD10_PATTERN.is_match("Z51.11"));
        assert!(ICD10_PATTERN.is_match("Z79.4"));
        assert!(!ICD10_PATTERN.is_match("I10"));
        assert!(!ICD10_PATTERN.is_match("e11.9"));
    }

    #[test]
    fn time_is_24_hour() {
        assert!(TIME_PATTERN.is_match("14:30"));
        assert!(TIME_PATTERN.is_match("9:05"));
        assert!(!TIME_PATTERN.is_match("24:00"));
        assert!(!TIME_PATTERN.is_match("14:60"));
    }
}
