//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields relevant to the scenario.

use core_kernel::{
    ClaimRecord, IncidentType, InsuranceType, PaymentMethod, PolicyType, Region,
};

/// Builder for `ClaimRecord` test data
///
/// Defaults to an unremarkable, fully eligible health claim.
pub struct ClaimRecordBuilder {
    claim: ClaimRecord,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    pub fn new() -> Self {
        Self {
            claim: ClaimRecord {
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
            },
        }
    }

    pub fn insurance_type(mut self, value: InsuranceType) -> Self {
        self.claim.insurance_type = value;
        self
    }

    pub fn policy_type(mut self, value: PolicyType) -> Self {
        self.claim.policy_type = value;
        self
    }

    pub fn incident_type(mut self, value: IncidentType) -> Self {
        self.claim.incident_type = value;
        self
    }

    pub fn payment_method(mut self, value: PaymentMethod) -> Self {
        self.claim.payment_method = value;
        self
    }

    pub fn region(mut self, value: Region) -> Self {
        self.claim.region = value;
        self
    }

    pub fn claim_amount(mut self, value: f64) -> Self {
        self.claim.claim_amount = value;
        self
    }

    pub fn customer_age(mut self, value: u32) -> Self {
        self.claim.customer_age = value;
        self
    }

    pub fn policy_tenure_days(mut self, value: u32) -> Self {
        self.claim.policy_tenure_days = value;
        self
    }

    pub fn num_previous_claims(mut self, value: u32) -> Self {
        self.claim.num_previous_claims = value;
        self
    }

    pub fn days_since_last_claim(mut self, value: u32) -> Self {
        self.claim.days_since_last_claim = value;
        self
    }

    pub fn claim_processing_days(mut self, value: u32) -> Self {
        self.claim.claim_processing_days = value;
        self
    }

    pub fn build(self) -> ClaimRecord {
        self.claim
    }
}
