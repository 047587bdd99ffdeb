//! Eligibility rule engine
//!
//! A fixed, ordered collection of independent (predicate, message)
//! pairs over a claim record. Every rule is evaluated on every call so
//! that all simultaneous violations are reported together; the
//! pipeline-level short-circuit happens after this engine, never inside
//! it. Evaluation is a pure function of the claim.
//!
//! These rules gatekeep policy compliance. They are deliberately
//! disjoint from the reason-engine heuristics, which explain a
//! probabilistic fraud judgment rather than enforce policy.

use core_kernel::{ClaimRecord, IncidentType, InsuranceType, PolicyType};

use crate::config::EligibilityConfig;

type Predicate = Box<dyn Fn(&ClaimRecord) -> bool + Send + Sync>;

/// One business constraint: fires when the claim violates it
struct EligibilityRule {
    name: &'static str,
    message: String,
    violated: Predicate,
}

/// Verdict of the eligibility engine
///
/// `eligible` holds exactly when `violations` is empty. Violations are
/// reported in rule-definition order without duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub violations: Vec<String>,
}

/// Ordered set of eligibility rules built from configured thresholds
pub struct EligibilityRuleSet {
    rules: Vec<EligibilityRule>,
}

impl EligibilityRuleSet {
    /// Builds the rule set from threshold configuration
    pub fn from_config(cfg: &EligibilityConfig) -> Self {
        let mut rules: Vec<EligibilityRule> = Vec::new();

        let min_age = cfg.min_customer_age;
        rules.push(EligibilityRule {
            name: "minimum_age",
            message: format!("Customer must be at least {min_age} years old"),
            violated: Box::new(move |c| c.customer_age < min_age),
        });

        let large_amount = cfg.large_claim_amount;
        let min_tenure = cfg.large_claim_min_tenure_days;
        rules.push(EligibilityRule {
            name: "large_claim_tenure",
            message: format!(
                "Claims above {large_amount:.0} require at least {min_tenure} days of policy tenure"
            ),
            violated: Box::new(move |c| {
                c.claim_amount > large_amount && c.policy_tenure_days < min_tenure
            }),
        });

        rules.push(EligibilityRule {
            name: "incident_coverage",
            message: "Incident type is not covered by this line of insurance".to_string(),
            violated: Box::new(|c| !incident_covered(c.insurance_type, c.incident_type)),
        });

        let basic_cap = cfg.basic_policy_max_amount;
        rules.push(EligibilityRule {
            name: "basic_policy_cap",
            message: format!("Basic policies cover claims up to {basic_cap:.0}"),
            violated: Box::new(move |c| {
                c.policy_type == PolicyType::Basic && c.claim_amount > basic_cap
            }),
        });

        let history_count = cfg.history_claim_count;
        let history_cap = cfg.history_max_amount;
        rules.push(EligibilityRule {
            name: "claim_history_cap",
            message: format!(
                "Claimants with {history_count} or more previous claims are capped at {history_cap:.0}"
            ),
            violated: Box::new(move |c| {
                c.num_previous_claims >= history_count && c.claim_amount > history_cap
            }),
        });

        let max_amount = cfg.max_claim_amount;
        rules.push(EligibilityRule {
            name: "maximum_amount",
            message: format!("Claim amount exceeds the maximum of {max_amount:.0}"),
            violated: Box::new(move |c| c.claim_amount > max_amount),
        });

        Self { rules }
    }

    /// Evaluates every rule against the claim
    ///
    /// All rules run unconditionally; the verdict carries one message per
    /// violated rule, in definition order.
    pub fn evaluate(&self, claim: &ClaimRecord) -> EligibilityVerdict {
        let mut violations: Vec<String> = Vec::new();
        for rule in &self.rules {
            if (rule.violated)(claim) && !violations.contains(&rule.message) {
                tracing::debug!(rule = rule.name, "eligibility rule violated");
                violations.push(rule.message.clone());
            }
        }
        EligibilityVerdict {
            eligible: violations.is_empty(),
            violations,
        }
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for EligibilityRuleSet {
    fn default() -> Self {
        Self::from_config(&EligibilityConfig::default())
    }
}

/// Which incident types each insurance line covers
fn incident_covered(line: InsuranceType, incident: IncidentType) -> bool {
    use IncidentType::*;
    use InsuranceType::*;
    matches!(
        (line, incident),
        (Health, Accident)
            | (Health, Illness)
            | (Vehicle, Accident)
            | (Vehicle, Theft)
            | (Life, Illness)
            | (Life, Death)
            | (Finance, Theft)
            | (Finance, FinancialLoss)
    )
}
