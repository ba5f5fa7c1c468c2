//! Catalog of the claim form's fixed fields.
//!
//! Each entry pairs a record field name with the label printed next to it in
//! intake documents and the kind of value the field holds. The catalog is
//! the single source of truth for building an empty [`crate::ClaimRecord`]
//! and for driving document-to-record extraction.

/// The kind of value a claim field holds.
///
/// Numeric fields (amounts, quantities) are carried as text and parsed on
/// demand by the validation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FieldKind {
    Text,
    Bool,
    List,
}

/// A single field definition: record name, document label, value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Record key, also the JSON key in serialized payloads.
    pub name: &'static str,
    /// Label as it appears in intake documents (before regex escaping).
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Text,
    }
}

const fn boolean(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Bool,
    }
}

const fn list(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::List,
    }
}

/// All claim form fields, in form declaration order.
pub const CLAIM_FIELDS: &[FieldSpec] = &[
    // Billing information
    text("stControlNumber", "ST Control Number"),
    text("bhtTransactionId", "BHT Transaction ID"),
    text("bhtDate", "BHT Date"),
    text("bhtTime", "BHT Time"),
    // Submitter
    text("submitterName", "Submitter Name"),
    text("submitterId", "Submitter ID"),
    text("submitterContactName", "Submitter Contact Name"),
    text("submitterPhoneNumber", "Submitter Phone Number"),
    // Receiver
    text("receiverName", "Receiver Name"),
    text("receiverId", "Receiver ID"),
    // Billing provider
    text("providerName", "Provider Name"),
    text("providerNpi", "Provider NPI"),
    text("providerEin", "Provider EIN"),
    text("providerAddressLine1", "Provider Address Line 1"),
    text("providerAddressLine2", "Provider Address Line 2"),
    text("providerCity", "Provider City"),
    text("providerState", "Provider State"),
    text("providerZipCode", "Provider ZIP Code"),
    text("providerContactName", "Provider Contact Name"),
    text("providerPhoneNumber", "Provider Phone Number"),
    // Subscriber / patient
    text("subscriberFirstName", "Subscriber First Name"),
    text("subscriberLastName", "Subscriber Last Name"),
    text("subscriberMemberId", "Subscriber Member ID"),
    text("subscriberDateOfBirth", "Subscriber Date of Birth"),
    text("subscriberGender", "Subscriber Gender"),
    text("subscriberAddressLine1", "Subscriber Address Line 1"),
    text("subscriberAddressLine2", "Subscriber Address Line 2"),
    text("subscriberCity", "Subscriber City"),
    text("subscriberState", "Subscriber State"),
    text("subscriberZipCode", "Subscriber ZIP Code"),
    text(
        "patientRelationshipToSubscriber",
        "Patient Relationship to Subscriber",
    ),
    // Payer
    text("payerName", "Payer Name"),
    text("payerId", "Payer ID"),
    text("payerTypeCode", "Payer Type Code"),
    // Claim
    text("claimId", "Claim ID"),
    text("totalChargeAmount", "Total Charge Amount"),
    text("placeOfServiceCode", "Place of Service Code"),
    text("claimFilingIndicatorCode", "Claim Filing Indicator Code"),
    boolean("acceptAssignment", "Accept Assignment?"),
    boolean("benefitsAssignedToProvider", "Benefits Assigned to Provider?"),
    text("releaseOfInformation", "Release of Information?"),
    text("serviceDateFrom", "Service Date From"),
    text("serviceDateTo", "Service Date To"),
    boolean("emergencyIndicator", "Emergency Indicator"),
    // Diagnosis
    text("diagnosisType", "Diagnosis Type"),
    text("primaryDiagnosisCode", "Primary Diagnosis Code"),
    text("additionalDiagnosisCode1", "Additional Diagnosis Code 1"),
    text("additionalDiagnosisCode2", "Additional Diagnosis Code 2"),
    text("additionalDiagnosisCode3", "Additional Diagnosis Code 3"),
    text("additionalDiagnosisCode4", "Additional Diagnosis Code 4"),
    // Rendering / referring providers
    text("renderingProviderName", "Rendering Provider Name"),
    text("renderingProviderNpi", "Rendering Provider NPI"),
    text("referringProviderName", "Referring Provider Name"),
    text("referringProviderNpi", "Referring Provider NPI"),
    // Insurance
    text("insuranceType", "Insurance Type"),
    text("groupNumber", "Group Number"),
    text("policyNumber", "Policy Number"),
    text("priorAuthorizationNumber", "Prior Authorization Number"),
    text("coverageStartDate", "Coverage Start Date"),
    text("coverageEndDate", "Coverage End Date"),
    // Service line 1
    text("serviceLine1ProcedureCode", "Service Line 1: Procedure Code"),
    text("serviceLine1Modifier1", "Service Line 1: Modifier 1"),
    text("serviceLine1Modifier2", "Service Line 1: Modifier 2"),
    list(
        "serviceLine1DiagnosisPointer",
        "Service Line 1: Diagnosis Pointer(s)",
    ),
    text("serviceLine1ChargeAmount", "Service Line 1: Charge Amount"),
    text("serviceLine1Quantity", "Service Line 1: Quantity"),
    text("serviceLine1UnitOfMeasure", "Service Line 1: Unit of Measure"),
    text("serviceLine1ServiceDate", "Service Line 1: Service Date"),
    text(
        "serviceLine1PlaceOfService",
        "Service Line 1: Place of Service",
    ),
    boolean(
        "serviceLine1EmergencyService",
        "Service Line 1: Emergency Service?",
    ),
    text(
        "serviceLine1RenderingProviderNpi",
        "Service Line 1: Rendering Provider NPI",
    ),
    // Service line 2
    text("serviceLine2ProcedureCode", "Service Line 2: Procedure Code"),
    text("serviceLine2Modifier1", "Service Line 2: Modifier 1"),
    text("serviceLine2Modifier2", "Service Line 2: Modifier 2"),
    list(
        "serviceLine2DiagnosisPointer",
        "Service Line 2: Diagnosis Pointer(s)",
    ),
    text("serviceLine2ChargeAmount", "Service Line 2: Charge Amount"),
    text("serviceLine2Quantity", "Service Line 2: Quantity"),
    text("serviceLine2UnitOfMeasure", "Service Line 2: Unit of Measure"),
    text("serviceLine2ServiceDate", "Service Line 2: Service Date"),
    text(
        "serviceLine2PlaceOfService",
        "Service Line 2: Place of Service",
    ),
    boolean(
        "serviceLine2EmergencyService",
        "Service Line 2: Emergency Service?",
    ),
    text(
        "serviceLine2RenderingProviderNpi",
        "Service Line 2: Rendering Provider NPI",
    ),
    // Attachments
    text("attachmentControlNumber", "Attachment Control Number"),
    text("attachmentTypeCode", "Attachment Type Code"),
    text(
        "attachmentTransmissionMethod",
        "Attachment Transmission Method",
    ),
    text("attachmentDescription", "Attachment Description"),
    // Other insurance
    text("otherPayerName", "Other Payer Name"),
    text("otherPayerId", "Other Payer ID"),
    text(
        "otherPayerResponsibilityCode",
        "Other Payer Responsibility Code",
    ),
    text("otherInsurancePaidAmount", "Other Insurance Paid Amount"),
    boolean(
        "otherInsuranceCoverageActive",
        "Other Insurance Coverage Active?",
    ),
    // Notes
    text("claimNoteCode", "Claim Note Code"),
    text("claimNotes", "Claim Notes"),
    // Declaration
    boolean("patientSignatureOnFile", "Patient Signature on File"),
    boolean("providerSignatureOnFile", "Provider Signature on File"),
    text("dateSigned", "Date Signed"),
    boolean(
        "confirmAccurate",
        "I confirm the above information is accurate",
    ),
];

/// All claim form fields, in form declaration order.
pub fn claim_fields() -> &'static [FieldSpec] {
    CLAIM_FIELDS
}

/// Look up a field definition by record name.
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    CLAIM_FIELDS.iter().find(|spec| spec.name == name)
}
