//! Rule and heuristic thresholds as data
//!
//! Every cutoff the eligibility rules and reason heuristics compare
//! against lives here rather than in the predicates themselves, so a
//! deployment can retune the rule sets from a JSON file without code
//! changes. Defaults reproduce the standard rule book.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DecisionError;

/// Thresholds for the eligibility rule engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityConfig {
    /// Minimum claimant age
    pub min_customer_age: u32,
    /// Claims above this amount require a minimum tenure
    pub large_claim_amount: f64,
    /// Minimum tenure in days for large claims
    pub large_claim_min_tenure_days: u32,
    /// Maximum claim amount on a basic policy
    pub basic_policy_max_amount: f64,
    /// Previous-claim count from which the history cap applies
    pub history_claim_count: u32,
    /// Maximum claim amount for claimants at or above the history count
    pub history_max_amount: f64,
    /// Absolute maximum claim amount for any policy
    pub max_claim_amount: f64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            min_customer_age: 18,
            large_claim_amount: 500_000.0,
            large_claim_min_tenure_days: 30,
            basic_policy_max_amount: 500_000.0,
            history_claim_count: 5,
            history_max_amount: 200_000.0,
            max_claim_amount: 1_000_000.0,
        }
    }
}

/// Thresholds for the reason engine heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonConfig {
    /// Claimed amount per day of tenure above which the claim looks
    /// disproportionate
    pub amount_per_tenure_day: f64,
    /// Previous-claim count considered a high filing frequency
    pub frequent_claims: u32,
    /// Processing completed in at most this many days is anomalously fast
    pub fast_processing_days: u32,
    /// Amount above which an early-tenure claim is suspicious
    pub early_claim_amount: f64,
    /// Tenure in days below which a claim counts as early
    pub early_tenure_days: u32,
    /// A prior claim within this many days is very recent
    pub recent_claim_days: u32,
    /// Cash settlements above this amount are flagged
    pub large_cash_amount: f64,
}

impl Default for ReasonConfig {
    fn default() -> Self {
        Self {
            amount_per_tenure_day: 1_000.0,
            frequent_claims: 3,
            fast_processing_days: 2,
            early_claim_amount: 100_000.0,
            early_tenure_days: 30,
            recent_claim_days: 30,
            large_cash_amount: 50_000.0,
        }
    }
}

/// Combined rule configuration, loadable from a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub eligibility: EligibilityConfig,
    pub reasons: ReasonConfig,
}

impl RuleConfig {
    /// Loads a rule configuration from a JSON file
    ///
    /// Missing keys fall back to the defaults, so a file can override a
    /// single threshold.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DecisionError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DecisionError::RuleConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| DecisionError::RuleConfigFormat(e.to_string()))
    }
}
