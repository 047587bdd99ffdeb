//! The decision pipeline
//!
//! Orchestrates eligibility checking, fraud classification, and reason
//! generation in a fixed sequence:
//!
//! ```text
//! Received -> EligibilityChecked -> {Rejected | Classified}
//!                                       -> {Flagged -> Explained | Clear} -> Decided
//! ```
//!
//! An ineligible claim terminates at `Rejected` with the rule
//! violations as its reasons; the classifier and reason engine are
//! never invoked on that path. Every invocation reaches exactly one
//! terminal state, synchronously and deterministically.

use std::sync::Arc;

use core_kernel::ClaimRecord;
use serde::{Deserialize, Serialize};

use crate::classifier::FraudScorer;
use crate::eligibility::EligibilityRuleSet;
use crate::reasons::ReasonRuleSet;

/// Terminal verdict for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// 1 when the claim is classified fraudulent, else 0
    pub prediction: u8,
    /// Fraud probability; 0.0 on the rejected path, where no
    /// classification happens
    pub probability: f64,
    /// Rule violations when rejected, risk factors when flagged,
    /// empty when clear
    pub reasons: Vec<String>,
}

/// The claim decision pipeline
///
/// Built once at startup around the loaded model and rule sets, then
/// shared read-only across concurrent requests. Holds no per-request
/// state.
pub struct DecisionPipeline {
    eligibility: EligibilityRuleSet,
    reasons: ReasonRuleSet,
    scorer: Arc<dyn FraudScorer>,
}

impl DecisionPipeline {
    pub fn new(
        eligibility: EligibilityRuleSet,
        reasons: ReasonRuleSet,
        scorer: Arc<dyn FraudScorer>,
    ) -> Self {
        Self {
            eligibility,
            reasons,
            scorer,
        }
    }

    /// Evaluates one claim to a terminal decision
    pub fn decide(&self, claim: &ClaimRecord) -> Decision {
        let verdict = self.eligibility.evaluate(claim);
        if !verdict.eligible {
            tracing::info!(
                violations = verdict.violations.len(),
                "claim rejected as ineligible"
            );
            return Decision {
                prediction: 0,
                probability: 0.0,
                reasons: verdict.violations,
            };
        }

        let fraud = self.scorer.predict(claim);
        if fraud.label == 0 {
            tracing::info!(probability = fraud.probability, "claim clear");
            return Decision {
                prediction: 0,
                probability: fraud.probability,
                reasons: Vec::new(),
            };
        }

        let reasons = self.reasons.explain(claim);
        tracing::info!(
            probability = fraud.probability,
            risk_factors = reasons.len(),
            "claim flagged as likely fraudulent"
        );
        Decision {
            prediction: 1,
            probability: fraud.probability,
            reasons,
        }
    }
}
