//! Property-Based Test Generators
//!
//! Proptest strategies for generating random claim data that maintains
//! the domain invariants (field floors and enum domains).

use core_kernel::{
    ClaimRecord, IncidentType, InsuranceType, PaymentMethod, PolicyType, Region,
};
use proptest::prelude::*;

pub fn insurance_type_strategy() -> impl Strategy<Value = InsuranceType> {
    prop_oneof![
        Just(InsuranceType::Health),
        Just(InsuranceType::Vehicle),
        Just(InsuranceType::Life),
        Just(InsuranceType::Finance),
    ]
}

pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![Just(PolicyType::Basic), Just(PolicyType::Premium)]
}

pub fn incident_type_strategy() -> impl Strategy<Value = IncidentType> {
    prop_oneof![
        Just(IncidentType::Accident),
        Just(IncidentType::Illness),
        Just(IncidentType::Theft),
        Just(IncidentType::Death),
        Just(IncidentType::FinancialLoss),
    ]
}

pub fn payment_method_strategy() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Online),
        Just(PaymentMethod::Cheque),
    ]
}

pub fn region_strategy() -> impl Strategy<Value = Region> {
    prop_oneof![
        Just(Region::North),
        Just(Region::South),
        Just(Region::East),
        Just(Region::West),
    ]
}

/// Strategy for claim records with every field inside its declared domain
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        (
            insurance_type_strategy(),
            policy_type_strategy(),
            incident_type_strategy(),
            payment_method_strategy(),
            region_strategy(),
        ),
        0.0f64..2_000_000.0,
        18u32..100,
        1u32..5_000,
        0u32..20,
        0u32..2_000,
        1u32..120,
    )
        .prop_map(
            |(
                (insurance_type, policy_type, incident_type, payment_method, region),
                claim_amount,
                customer_age,
                policy_tenure_days,
                num_previous_claims,
                days_since_last_claim,
                claim_processing_days,
            )| ClaimRecord {
                insurance_type,
                policy_type,
                incident_type,
                payment_method,
                region,
                claim_amount,
                customer_age,
                policy_tenure_days,
                num_previous_claims,
                days_since_last_claim,
                claim_processing_days,
            },
        )
}
