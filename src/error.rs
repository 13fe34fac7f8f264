//! Error types for the mining engine

use thiserror::Error;

use crate::apriori::Itemset;

/// Errors that can occur while mining itemsets or deriving rules
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    #[error("Invalid {name}: {value} (must be between 0 and 1)")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Cannot compute support over an empty transaction set")]
    EmptyDataset,

    #[error("No recorded support for antecedent {antecedent}")]
    MissingAntecedentSupport { antecedent: Itemset },

    #[error("No recorded support for consequent {consequent}")]
    MissingConsequentSupport { consequent: Itemset },

    #[error("Candidate limit exceeded at level {level}: {candidates} > {limit}")]
    CandidateLimitExceeded {
        level: usize,
        candidates: usize,
        limit: usize,
    },

    #[error("Row {row} has {found} columns, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, MiningError>;

/// Reject thresholds that are NaN or fall outside [0, 1].
pub(crate) fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(MiningError::InvalidThreshold { name, value });
    }
    Ok(())
}
