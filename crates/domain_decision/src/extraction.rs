//! Free-text feature extraction
//!
//! Best-effort parser that turns an unstructured claim description into
//! a sparse [`PartialClaimRecord`]. Extraction is advisory: it never
//! fails, never blocks the pipeline, and populates a field only when a
//! pattern matches with reasonable confidence. Ambiguous signals are
//! omitted rather than guessed, and unparsable input yields an empty
//! partial record.
//!
//! Two signals are extracted: a claimed amount (currency-amount pattern)
//! and the incident type (keyword taxonomy). Everything else stays with
//! the caller's defaults in the extract-then-edit flow.

use regex::Regex;
use std::sync::LazyLock;

use core_kernel::{IncidentType, PartialClaimRecord};

/// An amount in an explicit claim/cost/currency context, e.g.
/// "claimed 150000", "loss of 2,50,000", "$12000.50"
static CONTEXT_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        (?:
            \b(?: claimed | claiming | claim(?:\s+of)? | amount(?:\s+of)? | worth
                | costing | cost(?:\s+of)? | loss(?:\s+of)? | rs | inr | usd )\.?
          | \$ | ₹
        )
        \s* :? \s*
        ([0-9][0-9,]*(?:\.[0-9]+)?)
        ",
    )
    .expect("context amount pattern is valid")
});

/// Any standalone number, used only when the text contains exactly one
static BARE_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9][0-9,]*(?:\.[0-9]+)?").expect("bare amount pattern is valid")
});

/// Keyword taxonomy for incident types
static INCIDENT_PATTERNS: LazyLock<Vec<(IncidentType, Regex)>> = LazyLock::new(|| {
    let pattern = |re: &str| Regex::new(re).expect("incident pattern is valid");
    vec![
        (
            IncidentType::Accident,
            pattern(r"(?i)\b(accident|collision|crash(?:ed)?|collided)\b"),
        ),
        (
            IncidentType::Illness,
            pattern(r"(?i)\b(illness|sickness|sick|disease|hospitali[sz]ed|hospitali[sz]ation|surgery|diagnosed)\b"),
        ),
        (
            IncidentType::Theft,
            pattern(r"(?i)\b(theft|stolen|burglary|burgled|robbery|robbed)\b"),
        ),
        (
            IncidentType::Death,
            pattern(r"(?i)\b(death|died|deceased|passed\s+away)\b"),
        ),
        (
            IncidentType::FinancialLoss,
            pattern(r"(?i)\b(financial\s+loss|investment\s+loss|fraudulent\s+transaction|scam|embezzlement)\b"),
        ),
    ]
});

/// Best-effort claim description parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFeatureExtractor;

impl TextFeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts whatever the text states with confidence
    ///
    /// Total over arbitrary input: empty or unparsable text returns an
    /// empty partial record.
    pub fn extract(&self, text: &str) -> PartialClaimRecord {
        let text = text.trim();
        if text.is_empty() {
            return PartialClaimRecord::default();
        }

        PartialClaimRecord {
            claim_amount: extract_amount(text),
            incident_type: extract_incident(text),
            ..Default::default()
        }
    }
}

/// Finds a claimed amount, preferring numbers in an explicit claim or
/// currency context
fn extract_amount(text: &str) -> Option<f64> {
    if let Some(captures) = CONTEXT_AMOUNT.captures(text) {
        return parse_amount(captures.get(1)?.as_str());
    }

    // Without context, a lone sizeable number is still a confident signal;
    // several numbers are ambiguous and are skipped.
    let mut bare = BARE_AMOUNT.find_iter(text);
    let first = bare.next()?;
    if bare.next().is_some() {
        return None;
    }
    parse_amount(first.as_str()).filter(|v| *v >= 1_000.0)
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Matches the incident keyword taxonomy; two different incident types
/// in the same text is ambiguous and yields nothing
fn extract_incident(text: &str) -> Option<IncidentType> {
    let mut matched: Option<IncidentType> = None;
    for (incident, pattern) in INCIDENT_PATTERNS.iter() {
        if pattern.is_match(text) {
            if matched.is_some() && matched != Some(*incident) {
                return None;
            }
            matched = Some(*incident);
        }
    }
    matched
}
