//! Tests for core_kernel claim types

use core_kernel::{
    ClaimDefaults, ClaimRecord, IncidentType, InsuranceType, PartialClaimRecord, PaymentMethod,
    PolicyType, Region,
};

fn valid_claim() -> ClaimRecord {
    ClaimRecord {
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

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_claim_passes() {
        assert!(valid_claim().validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let claim = ClaimRecord {
            claim_amount: -1.0,
            ..valid_claim()
        };
        assert!(claim.validate().is_err());
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let claim = ClaimRecord {
            claim_amount: f64::NAN,
            ..valid_claim()
        };
        assert!(claim.validate().is_err());

        let claim = ClaimRecord {
            claim_amount: f64::INFINITY,
            ..valid_claim()
        };
        assert!(claim.validate().is_err());
    }

    #[test]
    fn test_underage_customer_rejected() {
        let claim = ClaimRecord {
            customer_age: 17,
            ..valid_claim()
        };
        assert!(claim.validate().is_err());
    }

    #[test]
    fn test_minimum_age_accepted() {
        let claim = ClaimRecord {
            customer_age: 18,
            ..valid_claim()
        };
        assert!(claim.validate().is_ok());
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let claim = ClaimRecord {
            policy_tenure_days: 0,
            ..valid_claim()
        };
        assert!(claim.validate().is_err());
    }

    #[test]
    fn test_zero_processing_days_rejected() {
        let claim = ClaimRecord {
            claim_processing_days: 0,
            ..valid_claim()
        };
        assert!(claim.validate().is_err());
    }

    #[test]
    fn test_zero_amount_accepted() {
        let claim = ClaimRecord {
            claim_amount: 0.0,
            ..valid_claim()
        };
        assert!(claim.validate().is_ok());
    }

    #[test]
    fn test_validated_returns_record() {
        let claim = valid_claim().validated().unwrap();
        assert_eq!(claim.customer_age, 35);
    }
}

// ============================================================================
// Serde Wire Format Tests
// ============================================================================

mod serde_tests {
    use super::*;

    #[test]
    fn test_enums_use_snake_case_wire_names() {
        let claim = ClaimRecord {
            incident_type: IncidentType::FinancialLoss,
            insurance_type: InsuranceType::Finance,
            ..valid_claim()
        };
        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(json["incident_type"], "financial_loss");
        assert_eq!(json["insurance_type"], "finance");
        assert_eq!(json["payment_method"], "online");
        assert_eq!(json["region"], "north");
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let mut json = serde_json::to_value(valid_claim()).unwrap();
        json["insurance_type"] = serde_json::json!("pet");
        assert!(serde_json::from_value::<ClaimRecord>(json).is_err());
    }

    #[test]
    fn test_claim_round_trips() {
        let claim = valid_claim();
        let json = serde_json::to_string(&claim).unwrap();
        let back: ClaimRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(claim, back);
    }

    #[test]
    fn test_enum_display_matches_wire_name() {
        assert_eq!(IncidentType::FinancialLoss.to_string(), "financial_loss");
        assert_eq!(PaymentMethod::Cheque.to_string(), "cheque");
        assert_eq!(Region::West.to_string(), "west");
        assert_eq!(PolicyType::Premium.to_string(), "premium");
        assert_eq!(InsuranceType::Vehicle.to_string(), "vehicle");
    }
}

// ============================================================================
// Partial Record Tests
// ============================================================================

mod partial_tests {
    use super::*;

    #[test]
    fn test_default_partial_is_empty() {
        assert!(PartialClaimRecord::default().is_empty());
    }

    #[test]
    fn test_partial_with_field_is_not_empty() {
        let partial = PartialClaimRecord {
            claim_amount: Some(1_000.0),
            ..Default::default()
        };
        assert!(!partial.is_empty());
    }

    #[test]
    fn test_or_prefers_self() {
        let explicit = PartialClaimRecord {
            claim_amount: Some(75_000.0),
            ..Default::default()
        };
        let extracted = PartialClaimRecord {
            claim_amount: Some(150_000.0),
            incident_type: Some(IncidentType::Theft),
            ..Default::default()
        };

        let merged = explicit.or(extracted);
        assert_eq!(merged.claim_amount, Some(75_000.0));
        assert_eq!(merged.incident_type, Some(IncidentType::Theft));
    }

    #[test]
    fn test_into_claim_fills_from_defaults() {
        let partial = PartialClaimRecord {
            claim_amount: Some(150_000.0),
            incident_type: Some(IncidentType::Accident),
            ..Default::default()
        };

        let claim = partial.into_claim(&ClaimDefaults::default()).unwrap();
        assert_eq!(claim.claim_amount, 150_000.0);
        assert_eq!(claim.incident_type, IncidentType::Accident);
        // Everything else comes from the defaults
        assert_eq!(claim.customer_age, 35);
        assert_eq!(claim.policy_tenure_days, 180);
        assert_eq!(claim.insurance_type, InsuranceType::Health);
    }

    #[test]
    fn test_into_claim_validates_result() {
        let partial = PartialClaimRecord {
            customer_age: Some(12),
            ..Default::default()
        };
        assert!(partial.into_claim(&ClaimDefaults::default()).is_err());
    }

    #[test]
    fn test_sparse_serialization_omits_absent_fields() {
        let partial = PartialClaimRecord {
            claim_amount: Some(150_000.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&partial).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("claim_amount"));
    }

    #[test]
    fn test_empty_partial_serializes_to_empty_object() {
        let json = serde_json::to_value(PartialClaimRecord::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
