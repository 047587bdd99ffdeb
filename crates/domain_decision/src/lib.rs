//! Claim Decision Domain
//!
//! This crate implements the claim decision pipeline: an ordered
//! composition of a deterministic eligibility rule engine, a binary
//! fraud classifier, and an explainable reason generator, plus a
//! best-effort free-text feature extractor.
//!
//! # Decision Flow
//!
//! ```text
//! Received -> EligibilityChecked -> {Rejected | Classified}
//!                                       -> {Flagged -> Explained | Clear} -> Decided
//! ```
//!
//! Ineligible claims short-circuit: the classifier and reason engine are
//! never consulted for a claim that fails policy constraints.

pub mod config;
pub mod eligibility;
pub mod classifier;
pub mod reasons;
pub mod extraction;
pub mod pipeline;
pub mod error;

pub use config::{EligibilityConfig, ReasonConfig, RuleConfig};
pub use eligibility::{EligibilityRuleSet, EligibilityVerdict};
pub use classifier::{FraudModel, FraudScorer, FraudVerdict, ModelArtifact};
pub use reasons::ReasonRuleSet;
pub use extraction::TextFeatureExtractor;
pub use pipeline::{Decision, DecisionPipeline};
pub use error::DecisionError;
