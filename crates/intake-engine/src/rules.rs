//! Declarative validation rules for claim fields.
//!
//! A [`RuleSet`] is an immutable configuration handed to the validator at
//! construction time. [`RuleSet::claim_defaults`] carries the standard claim
//! form table; callers building per-tenant or per-test variants start from
//! an empty set (or extend the defaults) instead of mutating shared state.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

use claim_types::options::{is_known_code, CodeOption, PLACE_OF_SERVICE_OPTIONS, STATE_OPTIONS};

use crate::patterns::{
    EIN_PATTERN, ICD10_PATTERN, MODIFIER_PATTERN, NPI_PATTERN, PHONE_PATTERN, PROCEDURE_PATTERN,
    TIME_PATTERN, ZIP_PATTERN,
};

/// Domain-specific check run after the declarative constraints.
/// Returns a failure message, or `None` when the value passes.
pub type CustomCheck = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Constraint set for a single field.
///
/// Checks are applied in a fixed order: required, pattern, length, numeric
/// range, custom. The first failure wins.
pub struct ValidationRule {
    pub required: bool,
    /// Anchored format pattern; the value must match in full.
    pub pattern: Option<Regex>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub custom: Option<CustomCheck>,
}

impl Default for ValidationRule {
    fn default() -> Self {
        Self {
            required: false,
            pattern: None,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            custom: None,
        }
    }
}

/// Mapping from field name to its single authoritative rule.
pub struct RuleSet {
    rules: BTreeMap<String, ValidationRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Insert or replace the rule for a field.
    pub fn insert(&mut self, name: impl Into<String>, rule: ValidationRule) {
        self.rules.insert(name.into(), rule);
    }

    /// Builder-style [`RuleSet::insert`].
    pub fn with_rule(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        self.insert(name, rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// The standard claim form rule table.
    pub fn claim_defaults() -> Self {
        let mut rules = RuleSet::new();

        // Billing information
        rules.insert("stControlNumber", required_id(1, 50));
        rules.insert("bhtTransactionId", required_id(1, 50));
        rules.insert(
            "bhtDate",
            ValidationRule {
                required: true,
                custom: Some(date_not_in_future()),
                ..Default::default()
            },
        );
        rules.insert(
            "bhtTime",
            ValidationRule {
                pattern: Some(TIME_PATTERN.clone()),
                ..Default::default()
            },
        );

        // Submitter
        rules.insert("submitterName", required_name(2, 100));
        rules.insert("submitterId", required_id(1, 50));
        rules.insert("submitterContactName", optional_name(2, 100));
        rules.insert("submitterPhoneNumber", phone());

        // Receiver
        rules.insert("receiverName", required_name(2, 100));
        rules.insert("receiverId", required_id(1, 50));

        // Billing provider
        rules.insert("providerName", required_name(2, 100));
        rules.insert("providerNpi", npi(true));
        rules.insert(
            "providerEin",
            ValidationRule {
                required: true,
                pattern: Some(EIN_PATTERN.clone()),
                ..Default::default()
            },
        );
        rules.insert("providerAddressLine1", required_name(5, 100));
        rules.insert(
            "providerAddressLine2",
            ValidationRule {
                max_length: Some(100),
                ..Default::default()
            },
        );
        rules.insert("providerCity", required_name(2, 50));
        rules.insert("providerState", code_set_rule(STATE_OPTIONS, "state code"));
        rules.insert("providerZipCode", zip());
        rules.insert("providerContactName", optional_name(2, 100));
        rules.insert("providerPhoneNumber", phone());

        // Subscriber / patient
        rules.insert("subscriberFirstName", required_name(2, 50));
        rules.insert("subscriberLastName", required_name(2, 50));
        rules.insert("subscriberMemberId", required_id(1, 50));
        rules.insert(
            "subscriberDateOfBirth",
            ValidationRule {
                required: true,
                custom: Some(birth_date_check()),
                ..Default::default()
            },
        );
        rules.insert("subscriberAddressLine1", required_name(5, 100));
        rules.insert(
            "subscriberAddressLine2",
            ValidationRule {
                max_length: Some(100),
                ..Default::default()
            },
        );
        rules.insert("subscriberCity", required_name(2, 50));
        rules.insert("subscriberState", code_set_rule(STATE_OPTIONS, "state code"));
        rules.insert("subscriberZipCode", zip());

        // Payer
        rules.insert("payerName", required_name(2, 100));
        rules.insert("payerId", required_id(1, 50));

        // Claim
        rules.insert("claimId", required_id(1, 50));
        rules.insert("totalChargeAmount", charge_amount(true));
        rules.insert(
            "placeOfServiceCode",
            code_set_rule(PLACE_OF_SERVICE_OPTIONS, "place of service code"),
        );
        rules.insert(
            "serviceDateFrom",
            ValidationRule {
                required: true,
                custom: Some(date_not_in_future()),
                ..Default::default()
            },
        );
        rules.insert(
            "serviceDateTo",
            ValidationRule {
                required: true,
                custom: Some(date_not_in_future()),
                ..Default::default()
            },
        );

        // Diagnosis
        rules.insert("primaryDiagnosisCode", diagnosis(true));
        rules.insert("additionalDiagnosisCode1", diagnosis(false));
        rules.insert("additionalDiagnosisCode2", diagnosis(false));
        rules.insert("additionalDiagnosisCode3", diagnosis(false));
        rules.insert("additionalDiagnosisCode4", diagnosis(false));

        // Rendering / referring providers
        rules.insert("renderingProviderName", required_name(2, 100));
        rules.insert("renderingProviderNpi", npi(true));
        rules.insert("referringProviderName", optional_name(2, 100));
        rules.insert("referringProviderNpi", npi(false));

        // Insurance
        rules.insert("groupNumber", optional_name(1, 50));
        rules.insert("policyNumber", optional_name(1, 50));
        rules.insert("priorAuthorizationNumber", optional_name(1, 50));

        // Service line 1
        rules.insert("serviceLine1ProcedureCode", procedure(true));
        rules.insert("serviceLine1Modifier1", modifier());
        rules.insert("serviceLine1Modifier2", modifier());
        rules.insert("serviceLine1ChargeAmount", charge_amount(true));
        rules.insert("serviceLine1Quantity", quantity(true));
        rules.insert("serviceLine1RenderingProviderNpi", npi(false));

        // Service line 2
        rules.insert("serviceLine2ProcedureCode", procedure(false));
        rules.insert("serviceLine2Modifier1", modifier());
        rules.insert("serviceLine2Modifier2", modifier());
        rules.insert("serviceLine2ChargeAmount", charge_amount(false));
        rules.insert("serviceLine2Quantity", quantity(false));
        rules.insert("serviceLine2RenderingProviderNpi", npi(false));

        // Attachments
        rules.insert("attachmentControlNumber", optional_name(1, 50));
        rules.insert(
            "attachmentDescription",
            ValidationRule {
                max_length: Some(200),
                ..Default::default()
            },
        );

        // Other insurance
        rules.insert("otherPayerName", optional_name(2, 100));
        rules.insert("otherPayerId", optional_name(1, 50));
        rules.insert(
            "otherInsurancePaidAmount",
            ValidationRule {
                min: Some(0.0),
                max: Some(999_999.99),
                ..Default::default()
            },
        );

        // Notes
        rules.insert(
            "claimNotes",
            ValidationRule {
                max_length: Some(1000),
                ..Default::default()
            },
        );

        // Declaration
        rules.insert(
            "dateSigned",
            ValidationRule {
                required: true,
                custom: Some(date_not_in_future()),
                ..Default::default()
            },
        );
        rules.insert(
            "confirmAccurate",
            ValidationRule {
                required: true,
                ..Default::default()
            },
        );

        rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

// Rule constructors shared across the table.

fn required_id(min: usize, max: usize) -> ValidationRule {
    ValidationRule {
        required: true,
        min_length: Some(min),
        max_length: Some(max),
        ..Default::default()
    }
}

fn required_name(min: usize, max: usize) -> ValidationRule {
    required_id(min, max)
}

fn optional_name(min: usize, max: usize) -> ValidationRule {
    ValidationRule {
        min_length: Some(min),
        max_length: Some(max),
        ..Default::default()
    }
}

fn npi(required: bool) -> ValidationRule {
    ValidationRule {
        required,
        pattern: Some(NPI_PATTERN.clone()),
        ..Default::default()
    }
}

fn zip() -> ValidationRule {
    ValidationRule {
        required: true,
        pattern: Some(ZIP_PATTERN.clone()),
        ..Default::default()
    }
}

fn phone() -> ValidationRule {
    ValidationRule {
        pattern: Some(PHONE_PATTERN.clone()),
        ..Default::default()
    }
}

fn diagnosis(required: bool) -> ValidationRule {
    ValidationRule {
        required,
        pattern: Some(ICD10_PATTERN.clone()),
        ..Default::default()
    }
}

fn procedure(required: bool) -> ValidationRule {
    ValidationRule {
        required,
        pattern: Some(PROCEDURE_PATTERN.clone()),
        ..Default::default()
    }
}

fn modifier() -> ValidationRule {
    ValidationRule {
        pattern: Some(MODIFIER_PATTERN.clone()),
        ..Default::default()
    }
}

fn charge_amount(required: bool) -> ValidationRule {
    ValidationRule {
        required,
        min: Some(0.01),
        max: Some(999_999.99),
        ..Default::default()
    }
}

fn quantity(required: bool) -> ValidationRule {
    ValidationRule {
        required,
        min: Some(1.0),
        max: Some(999.0),
        ..Default::default()
    }
}

fn code_set_rule(options: &'static [CodeOption], description: &'static str) -> ValidationRule {
    ValidationRule {
        custom: Some(code_set(options, description)),
        ..Default::default()
    }
}

// Custom checks.

fn parse_claim_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// YYYY-MM-DD date that is not in the future.
fn date_not_in_future() -> CustomCheck {
    Box::new(|value| match parse_claim_date(value) {
        None => Some("Invalid date format".to_string()),
        Some(date) if date > Utc::now().date_naive() => {
            Some("Date cannot be in the future".to_string())
        }
        Some(_) => None,
    })
}

/// Date of birth: valid, not in the future, and not implausibly old.
fn birth_date_check() -> CustomCheck {
    Box::new(|value| {
        let date = match parse_claim_date(value) {
            Some(date) => date,
            None => return Some("Please enter a valid date of birth.".to_string()),
        };
        let today = Utc::now().date_naive();
        if date > today {
            return Some(
                "Date of birth cannot be in the future. Please enter a valid date.".to_string(),
            );
        }
        if today.year() - date.year() > 120 {
            return Some(
                "Please verify the date of birth. The age seems unusually high.".to_string(),
            );
        }
        None
    })
}

/// Membership check against one of the code-set tables.
fn code_set(options: &'static [CodeOption], description: &'static str) -> CustomCheck {
    Box::new(move |value| {
        if is_known_code(options, value) {
            None
        } else {
            Some(format!("{value} is not a recognized {description}."))
        }
    })
}
