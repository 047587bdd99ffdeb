//! Partial claim records
//!
//! Output type of the free-text extractor and input to the
//! extract-then-edit flow: every `ClaimRecord` field, all optional.
//! A field is populated only when the producer matched it with
//! reasonable confidence; absent means "no signal", never a sentinel.

use serde::{Deserialize, Serialize};

use crate::claim::{
    ClaimRecord, IncidentType, InsuranceType, PaymentMethod, PolicyType, Region,
};
use crate::error::CoreError;

/// A `ClaimRecord` with every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialClaimRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_type: Option<InsuranceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<IncidentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_tenure_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_previous_claims: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last_claim: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_processing_days: Option<u32>,
}

impl PartialClaimRecord {
    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        self.insurance_type.is_none()
            && self.policy_type.is_none()
            && self.incident_type.is_none()
            && self.payment_method.is_none()
            && self.region.is_none()
            && self.claim_amount.is_none()
            && self.customer_age.is_none()
            && self.policy_tenure_days.is_none()
            && self.num_previous_claims.is_none()
            && self.days_since_last_claim.is_none()
            && self.claim_processing_days.is_none()
    }

    /// Field-wise precedence merge: values in `self` win, `other` fills gaps
    ///
    /// Used to overlay caller-supplied values on top of extracted ones, so
    /// explicit input always beats extraction.
    pub fn or(self, other: PartialClaimRecord) -> PartialClaimRecord {
        PartialClaimRecord {
            insurance_type: self.insurance_type.or(other.insurance_type),
            policy_type: self.policy_type.or(other.policy_type),
            incident_type: self.incident_type.or(other.incident_type),
            payment_method: self.payment_method.or(other.payment_method),
            region: self.region.or(other.region),
            claim_amount: self.claim_amount.or(other.claim_amount),
            customer_age: self.customer_age.or(other.customer_age),
            policy_tenure_days: self.policy_tenure_days.or(other.policy_tenure_days),
            num_previous_claims: self.num_previous_claims.or(other.num_previous_claims),
            days_since_last_claim: self.days_since_last_claim.or(other.days_since_last_claim),
            claim_processing_days: self.claim_processing_days.or(other.claim_processing_days),
        }
    }

    /// Builds a complete, validated `ClaimRecord`, filling absent fields
    /// from the supplied defaults
    pub fn into_claim(self, defaults: &ClaimDefaults) -> Result<ClaimRecord, CoreError> {
        ClaimRecord {
            insurance_type: self.insurance_type.unwrap_or(defaults.insurance_type),
            policy_type: self.policy_type.unwrap_or(defaults.policy_type),
            incident_type: self.incident_type.unwrap_or(defaults.incident_type),
            payment_method: self.payment_method.unwrap_or(defaults.payment_method),
            region: self.region.unwrap_or(defaults.region),
            claim_amount: self.claim_amount.unwrap_or(defaults.claim_amount),
            customer_age: self.customer_age.unwrap_or(defaults.customer_age),
            policy_tenure_days: self
                .policy_tenure_days
                .unwrap_or(defaults.policy_tenure_days),
            num_previous_claims: self
                .num_previous_claims
                .unwrap_or(defaults.num_previous_claims),
            days_since_last_claim: self
                .days_since_last_claim
                .unwrap_or(defaults.days_since_last_claim),
            claim_processing_days: self
                .claim_processing_days
                .unwrap_or(defaults.claim_processing_days),
        }
        .validated()
    }
}

/// Default field values used when neither extraction nor the caller
/// supplies one
///
/// These are the values the interactive claim form pre-seeds its
/// inputs with, so the extract-then-edit flow and the API agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimDefaults {
    pub insurance_type: InsuranceType,
    pub policy_type: PolicyType,
    pub incident_type: IncidentType,
    pub payment_method: PaymentMethod,
    pub region: Region,
    pub claim_amount: f64,
    pub customer_age: u32,
    pub policy_tenure_days: u32,
    pub num_previous_claims: u32,
    pub days_since_last_claim: u32,
    pub claim_processing_days: u32,
}

impl Default for ClaimDefaults {
    fn default() -> Self {
        Self {
            insurance_type: InsuranceType::Health,
            policy_type: PolicyType::Basic,
            incident_type: IncidentType::Accident,
            payment_method: PaymentMethod::Online,
            region: Region::North,
            claim_amount: 50_000.0,
            customer_age: 35,
            policy_tenure_days: 180,
            num_previous_claims: 0,
            days_since_last_claim: 200,
            claim_processing_days: 10,
        }
    }
}
