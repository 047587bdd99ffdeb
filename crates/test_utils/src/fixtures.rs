//! Pre-built test fixtures
//!
//! Canned claims, model artifacts, and instrumented scorers used across
//! the test suite.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use core_kernel::ClaimRecord;
use domain_decision::classifier::{
    CategoricalFeature, CategoricalField, FraudModel, FraudScorer, FraudVerdict, ModelArtifact,
    NumericFeature, NumericField,
};

use crate::builders::ClaimRecordBuilder;

/// An unremarkable, fully eligible claim
pub fn baseline_claim() -> ClaimRecord {
    ClaimRecordBuilder::new().build()
}

/// Artifact whose score is a constant `sigmoid(intercept)`
///
/// A zero-weight feature keeps the artifact structurally valid while the
/// intercept alone fixes the probability; intercept 4.0 gives ~0.982
/// (always flagged at threshold 0.5), -4.0 gives ~0.018 (never flagged).
pub fn constant_artifact(intercept: f64) -> ModelArtifact {
    ModelArtifact {
        model_id: format!("test-constant-{intercept}"),
        numeric: vec![NumericFeature {
            field: NumericField::ClaimAmount,
            mean: 0.0,
            std_dev: 1.0,
            weight: 0.0,
        }],
        categorical: vec![],
        intercept,
        threshold: 0.5,
    }
}

/// Model that flags every claim with probability ~0.982
pub fn always_fraud_model() -> FraudModel {
    FraudModel::from_artifact(constant_artifact(4.0)).expect("constant artifact is valid")
}

/// Model that clears every claim with probability ~0.018
pub fn never_fraud_model() -> FraudModel {
    FraudModel::from_artifact(constant_artifact(-4.0)).expect("constant artifact is valid")
}

/// A small logistic artifact with plausible weights
///
/// Weights are chosen so that large, early-tenure, repeat-claimant
/// claims score high and small claims on seasoned policies score low.
pub fn realistic_artifact() -> ModelArtifact {
    ModelArtifact {
        model_id: "test-realistic".to_string(),
        numeric: vec![
            NumericFeature {
                field: NumericField::ClaimAmount,
                mean: 60_000.0,
                std_dev: 90_000.0,
                weight: 1.1,
            },
            NumericFeature {
                field: NumericField::CustomerAge,
                mean: 41.0,
                std_dev: 13.0,
                weight: -0.2,
            },
            NumericFeature {
                field: NumericField::PolicyTenureDays,
                mean: 420.0,
                std_dev: 320.0,
                weight: -0.9,
            },
            NumericFeature {
                field: NumericField::NumPreviousClaims,
                mean: 1.1,
                std_dev: 1.4,
                weight: 0.8,
            },
            NumericFeature {
                field: NumericField::DaysSinceLastClaim,
                mean: 210.0,
                std_dev: 160.0,
                weight: -0.4,
            },
            NumericFeature {
                field: NumericField::ClaimProcessingDays,
                mean: 12.0,
                std_dev: 8.0,
                weight: -0.5,
            },
        ],
        categorical: vec![CategoricalFeature {
            field: CategoricalField::PaymentMethod,
            categories: vec!["cash".to_string(), "online".to_string(), "cheque".to_string()],
            weights: vec![0.4, -0.1, 0.1],
        }],
        intercept: -1.4,
        threshold: 0.5,
    }
}

pub fn realistic_model() -> FraudModel {
    FraudModel::from_artifact(realistic_artifact()).expect("realistic artifact is valid")
}

/// Scorer wrapper that counts invocations
///
/// Used to assert the pipeline never consults the classifier on the
/// rejected path.
pub struct CountingScorer {
    inner: Arc<dyn FraudScorer>,
    calls: AtomicUsize,
}

impl CountingScorer {
    pub fn new(inner: Arc<dyn FraudScorer>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FraudScorer for CountingScorer {
    fn predict(&self, claim: &ClaimRecord) -> FraudVerdict {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.predict(claim)
    }
}
