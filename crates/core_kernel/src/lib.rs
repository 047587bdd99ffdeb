//! Core Kernel - Foundational types for the claim decision system
//!
//! This crate provides the fundamental building blocks used across the
//! decision domain and the API layer:
//! - The strongly typed `ClaimRecord` value object and its field enums
//! - `PartialClaimRecord` for best-effort extracted input
//! - Merge-with-defaults construction for the extract-then-edit flow

pub mod claim;
pub mod partial;
pub mod error;

pub use claim::{
    ClaimRecord, InsuranceType, PolicyType, IncidentType, PaymentMethod, Region,
};
pub use partial::{PartialClaimRecord, ClaimDefaults};
pub use error::CoreError;
