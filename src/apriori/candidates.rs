use tracing::{trace, warn};

use super::itemset::Itemset;
use super::support::CandidateSet;
use super::transactions::TransactionSet;
use crate::error::{MiningError, Result};

/// Level-1 candidates: one singleton per distinct observed item.
pub fn initial_candidates(transactions: &TransactionSet) -> CandidateSet {
    transactions
        .distinct_items()
        .into_iter()
        .map(Itemset::singleton)
        .collect()
}

/// Join frequent `k`-itemsets into pruned `k + 1` candidates.
///
/// Every pair whose union has exactly `k + 1` items is a join candidate.
/// A candidate survives only if each of its `k`-subsets is in `frequent`.
/// Generation stops with [`MiningError::CandidateLimitExceeded`] as soon as
/// more than `limit` candidates have been accepted.
pub fn join(frequent: &CandidateSet, k: usize, limit: Option<usize>) -> Result<CandidateSet> {
    let level: Vec<&Itemset> = frequent.iter().filter(|itemset| itemset.len() == k).collect();
    let mut candidates = CandidateSet::new();

    for (i, left) in level.iter().enumerate() {
        for right in &level[i + 1..] {
            let union = left.union(right);
            if union.len() != k + 1 || candidates.contains(&union) {
                continue;
            }

            if has_infrequent_subset(&union, frequent) {
                trace!(candidate = %union, "pruned candidate with infrequent subset");
                continue;
            }

            candidates.insert(union);
            check_limit(k + 1, candidates.len(), limit)?;
        }
    }

    Ok(candidates)
}

/// Fail once `candidates` exceeds `limit` at `level`.
pub fn check_limit(level: usize, candidates: usize, limit: Option<usize>) -> Result<()> {
    match limit {
        Some(limit) if candidates > limit => {
            warn!(level, candidates, limit, "candidate limit exceeded");
            Err(MiningError::CandidateLimitExceeded {
                level,
                candidates,
                limit,
            })
        }
        _ => Ok(()),
    }
}

/// True if dropping any single item from `candidate` yields an itemset
/// missing from `frequent`.
pub fn has_infrequent_subset(candidate: &Itemset, frequent: &CandidateSet) -> bool {
    (0..candidate.len()).any(|idx| !frequent.contains(&candidate.without(idx)))
}
