//! Claim decision DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{
    ClaimRecord, CoreError, IncidentType, InsuranceType, PartialClaimRecord, PaymentMethod,
    PolicyType, Region,
};
use domain_decision::Decision;

/// Wire shape of a claim submitted for a decision; all fields required
///
/// Enum fields reject unknown values during deserialization; numeric
/// floors are checked by `validator` before the record is built.
#[derive(Debug, Deserialize, Validate)]
pub struct DecideClaimRequest {
    pub insurance_type: InsuranceType,
    pub policy_type: PolicyType,
    pub incident_type: IncidentType,
    pub payment_method: PaymentMethod,
    pub region: Region,
    #[validate(range(min = 0.0))]
    pub claim_amount: f64,
    #[validate(range(min = 18))]
    pub customer_age: u32,
    #[validate(range(min = 1))]
    pub policy_tenure_days: u32,
    pub num_previous_claims: u32,
    pub days_since_last_claim: u32,
    #[validate(range(min = 1))]
    pub claim_processing_days: u32,
}

impl DecideClaimRequest {
    /// Builds the validated domain record
    pub fn into_claim(self) -> Result<ClaimRecord, CoreError> {
        ClaimRecord {
            insurance_type: self.insurance_type,
            policy_type: self.policy_type,
            incident_type: self.incident_type,
            payment_method: self.payment_method,
            region: self.region,
            claim_amount: self.claim_amount,
            customer_age: self.customer_age,
            policy_tenure_days: self.policy_tenure_days,
            num_previous_claims: self.num_previous_claims,
            days_since_last_claim: self.days_since_last_claim,
            claim_processing_days: self.claim_processing_days,
        }
        .validated()
    }
}

/// Canonical decision response shape
#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub prediction: u8,
    pub probability: f64,
    pub reasons: Vec<String>,
}

impl From<Decision> for DecisionResponse {
    fn from(decision: Decision) -> Self {
        Self {
            prediction: decision.prediction,
            probability: decision.probability,
            reasons: decision.reasons,
        }
    }
}

/// Free-text extraction request
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub description: String,
}

/// Free-text decision request: extracted fields are overlaid by the
/// caller's explicit overrides, remaining gaps filled from defaults
#[derive(Debug, Deserialize)]
pub struct DecideTextRequest {
    pub description: String,
    #[serde(default)]
    pub overrides: Option<PartialClaimRecord>,
}
