//! Fraud classifier
//!
//! Wraps an externally trained binary classification model supplied as
//! a JSON artifact: standardized numeric features, one-hot categorical
//! features, logistic-regression weights, an intercept, and the model's
//! own decision threshold. The artifact is loaded exactly once at
//! startup and is immutable afterwards, so a loaded [`FraudModel`] can
//! be shared across unbounded concurrent decisions without locks.
//!
//! Feature encoding is this module's private responsibility and is
//! deterministic and side-effect free; callers hand in a `ClaimRecord`
//! and get back a label and a probability.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use core_kernel::ClaimRecord;

use crate::error::DecisionError;

/// Numeric claim fields the artifact may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    ClaimAmount,
    CustomerAge,
    PolicyTenureDays,
    NumPreviousClaims,
    DaysSinceLastClaim,
    ClaimProcessingDays,
}

/// Categorical claim fields the artifact may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    InsuranceType,
    PolicyType,
    IncidentType,
    PaymentMethod,
    Region,
}

/// A standardized numeric feature: weight applies to (x - mean) / std_dev
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFeature {
    pub field: NumericField,
    pub mean: f64,
    pub std_dev: f64,
    pub weight: f64,
}

/// A one-hot categorical feature: `weights[i]` applies when the claim's
/// value equals `categories[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub field: CategoricalField,
    pub categories: Vec<String>,
    pub weights: Vec<f64>,
}

/// The serialized model artifact
///
/// Opaque to the rest of the system: only this module interprets its
/// contents, and the decision threshold belongs to the model, not to
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Identifier of the trained model, for logging
    pub model_id: String,
    pub numeric: Vec<NumericFeature>,
    pub categorical: Vec<CategoricalFeature>,
    pub intercept: f64,
    /// Probability at or above which the model labels a claim fraudulent
    pub threshold: f64,
}

/// Result of a single inference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FraudVerdict {
    /// 1 when the model's decision boundary is met, else 0
    pub label: u8,
    /// Probability of the positive (fraud) class, in [0, 1]
    pub probability: f64,
}

/// Inference seam between the pipeline and the model
///
/// The pipeline depends on this trait rather than on `FraudModel`
/// directly, so tests can substitute instrumented scorers.
pub trait FraudScorer: Send + Sync {
    fn predict(&self, claim: &ClaimRecord) -> FraudVerdict;
}

/// A loaded, validated fraud model
#[derive(Debug, Clone)]
pub struct FraudModel {
    artifact: ModelArtifact,
}

impl FraudModel {
    /// Loads and validates a model artifact from a JSON file
    ///
    /// Called once during process startup; any failure here is fatal to
    /// serving.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DecisionError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DecisionError::ModelLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|e| DecisionError::ModelFormat(e.to_string()))?;
        Self::from_artifact(artifact)
    }

    /// Validates a parsed artifact and wraps it for inference
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, DecisionError> {
        if artifact.numeric.is_empty() && artifact.categorical.is_empty() {
            return Err(DecisionError::ModelFormat(
                "artifact declares no features".to_string(),
            ));
        }
        for feature in &artifact.numeric {
            if !(feature.std_dev.is_finite() && feature.std_dev > 0.0) {
                return Err(DecisionError::ModelFormat(format!(
                    "numeric feature {:?} has non-positive std_dev",
                    feature.field
                )));
            }
        }
        for feature in &artifact.categorical {
            if feature.categories.len() != feature.weights.len() {
                return Err(DecisionError::ModelFormat(format!(
                    "categorical feature {:?} has {} categories but {} weights",
                    feature.field,
                    feature.categories.len(),
                    feature.weights.len()
                )));
            }
        }
        if !(0.0..=1.0).contains(&artifact.threshold) {
            return Err(DecisionError::ModelFormat(format!(
                "threshold {} outside [0, 1]",
                artifact.threshold
            )));
        }

        Ok(Self { artifact })
    }

    /// Identifier of the loaded model
    pub fn model_id(&self) -> &str {
        &self.artifact.model_id
    }

    /// Number of features the artifact declares
    pub fn feature_count(&self) -> usize {
        self.artifact.numeric.len() + self.artifact.categorical.len()
    }

    /// Logistic score for the positive (fraud) class
    fn score(&self, claim: &ClaimRecord) -> f64 {
        let mut z = self.artifact.intercept;

        for feature in &self.artifact.numeric {
            let x = numeric_value(claim, feature.field);
            z += feature.weight * (x - feature.mean) / feature.std_dev;
        }

        for feature in &self.artifact.categorical {
            let value = categorical_value(claim, feature.field);
            // Categories the artifact never saw contribute nothing
            if let Some(idx) = feature.categories.iter().position(|c| c == value) {
                z += feature.weights[idx];
            }
        }

        sigmoid(z)
    }
}

impl FraudScorer for FraudModel {
    fn predict(&self, claim: &ClaimRecord) -> FraudVerdict {
        let probability = self.score(claim);
        let label = u8::from(probability >= self.artifact.threshold);
        FraudVerdict { label, probability }
    }
}

fn numeric_value(claim: &ClaimRecord, field: NumericField) -> f64 {
    match field {
        NumericField::ClaimAmount => claim.claim_amount,
        NumericField::CustomerAge => f64::from(claim.customer_age),
        NumericField::PolicyTenureDays => f64::from(claim.policy_tenure_days),
        NumericField::NumPreviousClaims => f64::from(claim.num_previous_claims),
        NumericField::DaysSinceLastClaim => f64::from(claim.days_since_last_claim),
        NumericField::ClaimProcessingDays => f64::from(claim.claim_processing_days),
    }
}

fn categorical_value(claim: &ClaimRecord, field: CategoricalField) -> &'static str {
    match field {
        CategoricalField::InsuranceType => claim.insurance_type.as_str(),
        CategoricalField::PolicyType => claim.policy_type.as_str(),
        CategoricalField::IncidentType => claim.incident_type.as_str(),
        CategoricalField::PaymentMethod => claim.payment_method.as_str(),
        CategoricalField::Region => claim.region.as_str(),
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
