//! Mining configuration and validation
//!
//! # Example
//!
//! ```
//! use apriori_rules::MiningConfig;
//!
//! let config = MiningConfig::default()
//!     .with_min_support(0.5)
//!     .with_min_confidence(0.8)
//!     .with_max_len(Some(3));
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{check_threshold, Result};

/// Default per-level candidate ceiling
pub const DEFAULT_MAX_CANDIDATES: usize = 1_000_000;

/// Thresholds and resource limits for one mining run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support for an itemset to count as frequent (0 to 1)
    pub min_support: f64,
    /// Minimum confidence for a rule to be emitted (0 to 1)
    pub min_confidence: f64,
    /// Largest candidate set allowed at any level; `None` disables the check
    pub max_candidates: Option<usize>,
    /// Largest itemset size to mine; `None` mines until candidates run out
    pub max_len: Option<usize>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.3,
            min_confidence: 1.0,
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            max_len: None,
        }
    }
}

impl MiningConfig {
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: Option<usize>) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    /// Both thresholds must lie in [0, 1].
    pub fn validate(&self) -> Result<()> {
        check_threshold("min_support", self.min_support)?;
        check_threshold("min_confidence", self.min_confidence)?;
        Ok(())
    }
}
