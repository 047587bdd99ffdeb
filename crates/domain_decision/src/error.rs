//! Decision domain errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the decision domain
///
/// All of these surface during startup: once a model and rule sets are
/// loaded, every pipeline computation is total over valid claim records.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("Failed to read model artifact {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model artifact: {0}")]
    ModelFormat(String),

    #[error("Failed to read rule configuration {path}: {source}")]
    RuleConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule configuration: {0}")]
    RuleConfigFormat(String),
}
