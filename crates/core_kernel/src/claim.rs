//! The `ClaimRecord` value object
//!
//! A `ClaimRecord` is the unit of work for the decision pipeline: one
//! insurance-loss event with every field present and inside its declared
//! domain. Construction goes through [`ClaimRecord::validated`]; once built
//! the record is never mutated, so it can be shared freely across
//! concurrent decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Line of insurance the claim is filed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceType {
    Health,
    Vehicle,
    Life,
    Finance,
}

/// Policy tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Basic,
    Premium,
}

/// Kind of loss event being claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    Accident,
    Illness,
    Theft,
    Death,
    FinancialLoss,
}

/// How the claimant wants the settlement paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Online,
    Cheque,
}

/// Geographic region of the policyholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl InsuranceType {
    /// Wire name, matching the serde snake_case representation
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::Health => "health",
            InsuranceType::Vehicle => "vehicle",
            InsuranceType::Life => "life",
            InsuranceType::Finance => "finance",
        }
    }
}

impl PolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Basic => "basic",
            PolicyType::Premium => "premium",
        }
    }
}

impl IncidentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentType::Accident => "accident",
            IncidentType::Illness => "illness",
            IncidentType::Theft => "theft",
            IncidentType::Death => "death",
            IncidentType::FinancialLoss => "financial_loss",
        }
    }
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
            PaymentMethod::Cheque => "cheque",
        }
    }
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::East => "east",
            Region::West => "west",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single insurance claim submitted for evaluation
///
/// Field floors (amount non-negative, age >= 18, tenure and processing
/// days >= 1) are enforced by [`ClaimRecord::validated`]; the decision
/// pipeline assumes they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Line of insurance
    pub insurance_type: InsuranceType,
    /// Policy tier
    pub policy_type: PolicyType,
    /// Kind of loss event
    pub incident_type: IncidentType,
    /// Requested settlement channel
    pub payment_method: PaymentMethod,
    /// Policyholder region
    pub region: Region,
    /// Claimed amount, non-negative
    pub claim_amount: f64,
    /// Claimant age in years, at least 18
    pub customer_age: u32,
    /// Days the policy has been in force, at least 1
    pub policy_tenure_days: u32,
    /// Number of claims previously filed by this customer
    pub num_previous_claims: u32,
    /// Days since the customer's last claim (0 when none)
    pub days_since_last_claim: u32,
    /// Days the claim took to process, at least 1
    pub claim_processing_days: u32,
}

impl ClaimRecord {
    /// Minimum age a claimant must have
    pub const MIN_CUSTOMER_AGE: u32 = 18;

    /// Checks every field against its declared domain
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.claim_amount.is_finite() || self.claim_amount < 0.0 {
            return Err(CoreError::validation(format!(
                "claim_amount must be a non-negative number, got {}",
                self.claim_amount
            )));
        }
        if self.customer_age < Self::MIN_CUSTOMER_AGE {
            return Err(CoreError::validation(format!(
                "customer_age must be at least {}, got {}",
                Self::MIN_CUSTOMER_AGE,
                self.customer_age
            )));
        }
        if self.policy_tenure_days < 1 {
            return Err(CoreError::validation(
                "policy_tenure_days must be at least 1",
            ));
        }
        if self.claim_processing_days < 1 {
            return Err(CoreError::validation(
                "claim_processing_days must be at least 1",
            ));
        }
        Ok(())
    }

    /// Consumes the record, returning it only if every field is in domain
    pub fn validated(self) -> Result<Self, CoreError> {
        self.validate()?;
        Ok(self)
    }
}
