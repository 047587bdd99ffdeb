//! Reason engine
//!
//! Explains *why the classifier was suspicious*: a fixed set of
//! independent heuristics, each comparing claim fields against a
//! configured threshold. Invoked only for claims the classifier has
//! flagged. Each firing heuristic contributes exactly one string;
//! output preserves heuristic-definition order and is deduplicated.
//!
//! Deliberately shares no rule with the eligibility engine: these
//! heuristics narrate a probabilistic judgment, they do not gatekeep.
//! An eligible claim can still accumulate risk factors here.

use core_kernel::{ClaimRecord, PaymentMethod};

use crate::config::ReasonConfig;

type Predicate = Box<dyn Fn(&ClaimRecord) -> bool + Send + Sync>;

/// One risk-factor heuristic
struct ReasonRule {
    name: &'static str,
    message: String,
    fires: Predicate,
}

/// Ordered set of risk-factor heuristics built from configured thresholds
pub struct ReasonRuleSet {
    rules: Vec<ReasonRule>,
}

impl ReasonRuleSet {
    /// Builds the heuristic set from threshold configuration
    pub fn from_config(cfg: &ReasonConfig) -> Self {
        let mut rules: Vec<ReasonRule> = Vec::new();

        let per_day = cfg.amount_per_tenure_day;
        rules.push(ReasonRule {
            name: "amount_vs_tenure",
            message: "Claim amount is disproportionate to policy tenure".to_string(),
            fires: Box::new(move |c| {
                c.claim_amount / f64::from(c.policy_tenure_days) > per_day
            }),
        });

        let frequent = cfg.frequent_claims;
        rules.push(ReasonRule {
            name: "claim_frequency",
            message: "High frequency of previous claims".to_string(),
            fires: Box::new(move |c| c.num_previous_claims >= frequent),
        });

        let fast = cfg.fast_processing_days;
        rules.push(ReasonRule {
            name: "fast_processing",
            message: "Claim was processed unusually quickly".to_string(),
            fires: Box::new(move |c| c.claim_processing_days <= fast),
        });

        let early_amount = cfg.early_claim_amount;
        let early_tenure = cfg.early_tenure_days;
        rules.push(ReasonRule {
            name: "early_high_value",
            message: "High-value claim filed very early in the policy term".to_string(),
            fires: Box::new(move |c| {
                c.claim_amount > early_amount && c.policy_tenure_days < early_tenure
            }),
        });

        let recent = cfg.recent_claim_days;
        rules.push(ReasonRule {
            name: "recent_prior_claim",
            message: "Previous claim filed very recently".to_string(),
            fires: Box::new(move |c| {
                c.num_previous_claims > 0 && c.days_since_last_claim < recent
            }),
        });

        let cash_cap = cfg.large_cash_amount;
        rules.push(ReasonRule {
            name: "large_cash_settlement",
            message: "Large settlement requested in cash".to_string(),
            fires: Box::new(move |c| {
                c.payment_method == PaymentMethod::Cash && c.claim_amount > cash_cap
            }),
        });

        Self { rules }
    }

    /// Collects the risk factors the claim triggers, in definition order
    pub fn explain(&self, claim: &ClaimRecord) -> Vec<String> {
        let mut reasons: Vec<String> = Vec::new();
        for rule in &self.rules {
            if (rule.fires)(claim) && !reasons.contains(&rule.message) {
                tracing::debug!(heuristic = rule.name, "risk factor fired");
                reasons.push(rule.message.clone());
            }
        }
        reasons
    }

    /// Number of heuristics in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ReasonRuleSet {
    fn default() -> Self {
        Self::from_config(&ReasonConfig::default())
    }
}
