//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim decision test suite.
//!
//! # Modules
//!
//! - `builders`: Builder patterns for test data construction
//! - `fixtures`: Pre-built claims and model artifacts
//! - `generators`: Property-based test data generators

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::*;
pub use fixtures::*;
pub use generators::*;
