//! X12-style code sets offered by the claim form's select fields.
//!
//! Values are the codes that go on the wire; labels are the human-readable
//! descriptions shown next to them.

/// A single code/label pair in a code set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> CodeOption {
    CodeOption { value, label }
}

/// True if `value` is one of the codes in `options`.
pub fn is_known_code(options: &[CodeOption], value: &str) -> bool {
    options.iter().any(|option| option.value == value)
}

/// Label for a code, if the code is known.
pub fn code_label(options: &[CodeOption], value: &str) -> Option<&'static str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

pub const GENDER_OPTIONS: &[CodeOption] = &[
    opt("Male", "Male"),
    opt("Female", "Female"),
    opt("Other", "Other"),
    opt("Unknown", "Unknown"),
];

/// US state postal codes.
pub const STATE_OPTIONS: &[CodeOption] = &[
    opt("AL", "Alabama"),
    opt("AK", "Alaska"),
    opt("AZ", "Arizona"),
    opt("AR", "Arkansas"),
    opt("CA", "California"),
    opt("CO", "Colorado"),
    opt("CT", "Connecticut"),
    opt("DE", "Delaware"),
    opt("FL", "Florida"),
    opt("GA", "Georgia"),
    opt("HI", "Hawaii"),
    opt("ID", "Idaho"),
    opt("IL", "Illinois"),
    opt("IN", "Indiana"),
    opt("IA", "Iowa"),
    opt("KS", "Kansas"),
    opt("KY", "Kentucky"),
    opt("LA", "Louisiana"),
    opt("ME", "Maine"),
    opt("MD", "Maryland"),
    opt("MA", "Massachusetts"),
    opt("MI", "Michigan"),
    opt("MN", "Minnesota"),
    opt("MS", "Mississippi"),
    opt("MO", "Missouri"),
    opt("MT", "Montana"),
    opt("NE", "Nebraska"),
    opt("NV", "Nevada"),
    opt("NH", "New Hampshire"),
    opt("NJ", "New Jersey"),
    opt("NM", "New Mexico"),
    opt("NY", "New York"),
    opt("NC", "North Carolina"),
    opt("ND", "North Dakota"),
    opt("OH", "Ohio"),
    opt("OK", "Oklahoma"),
    opt("OR", "Oregon"),
    opt("PA", "Pennsylvania"),
    opt("RI", "Rhode Island"),
    opt("SC", "South Carolina"),
    opt("SD", "South Dakota"),
    opt("TN", "Tennessee"),
    opt("TX", "Texas"),
    opt("UT", "Utah"),
    opt("VT", "Vermont"),
    opt("VA", "Virginia"),
    opt("WA", "Washington"),
    opt("WV", "West Virginia"),
    opt("WI", "Wisconsin"),
    opt("WY", "Wyoming"),
];

pub const RELATIONSHIP_OPTIONS: &[CodeOption] = &[
    opt("Self", "Self"),
    opt("Spouse", "Spouse"),
    opt("Child", "Child"),
    opt("Grandchild", "Grandchild"),
    opt("Niece/Nephew", "Niece/Nephew"),
    opt("Guardian", "Guardian"),
    opt("Employee", "Employee"),
    opt("Unknown", "Unknown"),
    opt("Other", "Other"),
];

pub const PAYER_TYPE_OPTIONS: &[CodeOption] = &[
    opt("CI", "CI - Commercial Insurance"),
    opt("MB", "MB - Medicare Part B"),
    opt("MA", "MA - Medicare Advantage"),
    opt("MC", "MC - Medicaid"),
    opt("CH", "CH - Champus"),
    opt("OF", "OF - Other Federal Program"),
    opt("TV", "TV - Title V"),
    opt("VA", "VA - Veterans Affairs"),
    opt("WC", "WC - Workers' Compensation"),
    opt("ZZ", "ZZ - Mutual Insurance"),
];

/// CMS place-of-service codes.
pub const PLACE_OF_SERVICE_OPTIONS: &[CodeOption] = &[
    opt("01", "01 - Pharmacy"),
    opt("02", "02 - Telehealth"),
    opt("03", "03 - School"),
    opt("04", "04 - Homeless Shelter"),
    opt("05", "05 - Indian Health Service Free-standing Facility"),
    opt("06", "06 - Indian Health Service Provider-based Facility"),
    opt("07", "07 - Tribal 638 Free-standing Facility"),
    opt("08", "08 - Tribal 638 Provider-based Facility"),
    opt("11", "11 - Office"),
    opt("12", "12 - Home"),
    opt("13", "13 - Assisted Living Facility"),
    opt("14", "14 - Group Home"),
    opt("15", "15 - Mobile Unit"),
    opt("16", "16 - Temporary Lodging"),
    opt("17", "17 - Walk-in Retail Health Clinic"),
    opt("18", "18 - Place of Employment-Worksite"),
    opt("19", "19 - Off Campus-Outpatient Hospital"),
    opt("20", "20 - Urgent Care Facility"),
    opt("21", "21 - Inpatient Hospital"),
    opt("22", "22 - On Campus-Outpatient Hospital"),
    opt("23", "23 - Emergency Room-Hospital"),
    opt("24", "24 - Ambulatory Surgical Center"),
    opt("25", "25 - Birthing Center"),
    opt("26", "26 - Military Treatment Facility"),
    opt("31", "31 - Skilled Nursing Facility"),
    opt("32", "32 - Nursing Facility"),
    opt("33", "33 - Custodial Care Facility"),
    opt("34", "34 - Hospice"),
    opt("41", "41 - Ambulance-Land"),
    opt("42", "42 - Ambulance-Air or Water"),
    opt("49", "49 - Independent Clinic"),
    opt("50", "50 - FQHC"),
    opt("51", "51 - Inpatient Psych Facility"),
    opt("52", "52 - Psych Facility Partial Hospitalization"),
    opt("53", "53 - Community Mental Health Center"),
    opt("54", "54 - Intermediate Care Facility"),
    opt("55", "55 - Residential Substance Abuse"),
    opt("56", "56 - Psych Residential Treatment Center"),
    opt("57", "57 - Non-residential Substance Abuse Facility"),
    opt("60", "60 - Mass Immunization Center"),
    opt("61", "61 - Comprehensive Inpatient Rehab"),
    opt("62", "62 - Comprehensive Outpatient Rehab"),
    opt("65", "65 - End-Stage Renal Disease Facility"),
    opt("71", "71 - State/Local Public Health Clinic"),
    opt("72", "72 - Rural Health Clinic"),
    opt("81", "81 - Independent Lab"),
    opt("99", "99 - Other"),
];

pub const CLAIM_FILING_INDICATOR_OPTIONS: &[CodeOption] = &[
    opt("MB", "MB - Medicare Part B"),
    opt("MC", "MC - Medicaid"),
    opt("CH", "CH - Champus"),
    opt("CI", "CI - Commercial Insurance"),
    opt("BL", "BL - Blue Cross/Blue Shield"),
    opt("MA", "MA - Medicare Advantage"),
    opt("FI", "FI - Federal Employees Program"),
    opt("HM", "HM - HMO"),
    opt("OF", "OF - Other Federal Program"),
    opt("VA", "VA - Veterans Affairs"),
    opt("WC", "WC - Workers' Compensation"),
    opt("ZZ", "ZZ - Mutually Defined"),
];

pub const RELEASE_OF_INFORMATION_OPTIONS: &[CodeOption] = &[
    opt("Y", "Y - Yes"),
    opt("I", "I - Informed Consent to Release"),
    opt("N", "N - No"),
];

pub const DIAGNOSIS_TYPE_OPTIONS: &[CodeOption] = &[
    opt("ICD-10-CM", "ICD-10-CM"),
    opt("ICD-9-CM", "ICD-9-CM"),
];

pub const INSURANCE_TYPE_OPTIONS: &[CodeOption] = &[
    opt("12", "12 - Preferred Provider Organization (PPO)"),
    opt("13", "13 - Health Maintenance Organization (HMO)"),
    opt("14", "14 - Exclusive Provider Organization (EPO)"),
    opt("15", "15 - Indemnity Insurance"),
    opt("16", "16 - Self-funded"),
    opt("17", "17 - State-funded"),
    opt("18", "18 - Employer Sponsored"),
    opt("19", "19 - Individual Market"),
    opt("20", "20 - Marketplace Qualified Plan"),
];

pub const UNIT_OF_MEASURE_OPTIONS: &[CodeOption] = &[
    opt("UN", "UN - Units"),
    opt("MJ", "MJ - Minutes"),
    opt("ML", "ML - Milliliters"),
    opt("GR", "GR - Grams"),
    opt("LT", "LT - Liters"),
    opt("ME", "ME - Meal"),
    opt("MR", "MR - Meter"),
    opt("OR", "OR - Oral"),
    opt("SH", "SH - Sheets"),
];

pub const ATTACHMENT_TYPE_OPTIONS: &[CodeOption] = &[
    opt("OZ", "OZ - Support Data for Claim"),
    opt("B2", "B2 - Referral Form"),
    opt("EB", "EB - Explanation of Benefits"),
    opt("04", "04 - Clinical Test Results"),
    opt("06", "06 - Initial Assessment"),
    opt("11", "11 - Functional Goal"),
    opt("13", "13 - Treatment Plan"),
    opt("21", "21 - Physician Orders"),
];

pub const ATTACHMENT_TRANSMISSION_OPTIONS: &[CodeOption] = &[
    opt("AA", "AA - Available on Request at Provider Site"),
    opt("BM", "BM - By Mail"),
    opt("EL", "EL - Electronically Only"),
    opt("EM", "EM - Email"),
    opt("FX", "FX - Fax"),
    opt("FT", "FT - FTP"),
    opt("NS", "NS - No Submission Required"),
    opt("ON", "ON - Online"),
];

pub const OTHER_PAYER_RESPONSIBILITY_OPTIONS: &[CodeOption] = &[
    opt("P", "P - Primary"),
    opt("S", "S - Secondary"),
    opt("T", "T - Tertiary"),
];

pub const CLAIM_NOTE_OPTIONS: &[CodeOption] = &[
    opt("ADD", "ADD - Additional Information"),
    opt("TPO", "TPO - Third Party Obligation"),
    opt("DCP", "DCP - Delay Code Reason"),
];

pub const DIAGNOSIS_POINTER_OPTIONS: &[CodeOption] =
    &[opt("1", "1"), opt("2", "2"), opt("3", "3"), opt("4", "4")];
