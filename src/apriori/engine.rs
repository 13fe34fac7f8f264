use tracing::{debug, info};

use super::candidates::{check_limit, initial_candidates, join};
use super::config::MiningConfig;
use super::rules::{generate_rules, AssociationRule};
use super::storage::FrequentItemsets;
use super::support::{compute_support, CandidateSet};
use super::transactions::TransactionSet;
use crate::error::{MiningError, Result};

/// Position of the level-wise search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelPhase {
    /// Seeding singleton candidates
    Initial,
    /// Counting and filtering candidates of the given size
    Active(usize),
    /// Joining the frequent itemsets of the given size into the next level
    Advance(usize),
    Terminated,
}

/// Level-wise (Apriori) frequent itemset miner
#[derive(Debug, Clone)]
pub struct AprioriEngine {
    config: MiningConfig,
}

impl AprioriEngine {
    pub fn new(config: MiningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Mine every itemset whose support reaches `min_support`.
    pub fn mine(&self, transactions: &TransactionSet) -> Result<FrequentItemsets> {
        if transactions.is_empty() {
            return Err(MiningError::EmptyDataset);
        }

        let min_support = self.config.min_support;
        let mut frequent = FrequentItemsets::new();
        let mut candidates = CandidateSet::new();
        let mut level_frequent = CandidateSet::new();
        let mut phase = LevelPhase::Initial;

        loop {
            phase = match phase {
                LevelPhase::Initial => {
                    if self.config.max_len == Some(0) {
                        LevelPhase::Terminated
                    } else {
                        candidates = initial_candidates(transactions);
                        check_limit(1, candidates.len(), self.config.max_candidates)?;
                        Self::next_active(1, &candidates)
                    }
                }
                LevelPhase::Active(k) => {
                    let support = compute_support(transactions, &candidates)?;
                    level_frequent = support
                        .into_iter()
                        .filter(|&(_, value)| value >= min_support)
                        .map(|(itemset, value)| {
                            frequent.insert(itemset.clone(), value);
                            itemset
                        })
                        .collect();

                    debug!(
                        level = k,
                        candidates = candidates.len(),
                        frequent = level_frequent.len(),
                        "counted level"
                    );

                    if self.config.max_len.is_some_and(|max_len| k >= max_len) {
                        LevelPhase::Terminated
                    } else {
                        LevelPhase::Advance(k)
                    }
                }
                LevelPhase::Advance(k) => {
                    candidates = join(&level_frequent, k, self.config.max_candidates)?;
                    Self::next_active(k + 1, &candidates)
                }
                LevelPhase::Terminated => break,
            };
        }

        info!(
            transactions = transactions.len(),
            frequent = frequent.len(),
            min_support,
            "mining finished"
        );
        Ok(frequent)
    }

    /// Derive rules from `frequent` using the configured `min_confidence`.
    pub fn rules(&self, frequent: &FrequentItemsets) -> Result<Vec<AssociationRule>> {
        generate_rules(frequent, self.config.min_confidence)
    }

    fn next_active(k: usize, candidates: &CandidateSet) -> LevelPhase {
        if candidates.is_empty() {
            LevelPhase::Terminated
        } else {
            LevelPhase::Active(k)
        }
    }
}

/// Mine frequent itemsets with default limits and the given threshold.
pub fn mine(transactions: &TransactionSet, min_support: f64) -> Result<FrequentItemsets> {
    AprioriEngine::new(MiningConfig::default().with_min_support(min_support))?.mine(transactions)
}
