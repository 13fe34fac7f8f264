use std::collections::{BTreeMap, BTreeSet};

use super::itemset::Itemset;
use super::transactions::TransactionSet;
use crate::error::{MiningError, Result};

/// Candidate itemsets under consideration at one level
pub type CandidateSet = BTreeSet<Itemset>;

/// Support value per counted itemset
pub type SupportMap = BTreeMap<Itemset, f64>;

/// Fraction of transactions containing each candidate.
///
/// An empty transaction set has no defined support and is rejected with
/// [`MiningError::EmptyDataset`].
pub fn compute_support(transactions: &TransactionSet, candidates: &CandidateSet) -> Result<SupportMap> {
    let num_transactions = transactions.len();
    if num_transactions == 0 {
        return Err(MiningError::EmptyDataset);
    }

    let support = candidates
        .iter()
        .map(|candidate| {
            let count = count_containing(transactions, candidate);
            (candidate.clone(), count as f64 / num_transactions as f64)
        })
        .collect();

    Ok(support)
}

/// Number of transactions that are supersets of `itemset`
pub fn count_containing(transactions: &TransactionSet, itemset: &Itemset) -> usize {
    transactions
        .iter()
        .filter(|transaction| transaction.is_superset_of(itemset))
        .count()
}
