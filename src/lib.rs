//! Frequent itemset mining and association rule generation.
//!
//! Itemsets are discovered level by level: singletons first, then each
//! level's frequent itemsets are joined into the next level's candidates,
//! pruning any candidate with an infrequent subset.
//!
//! ```
//! use apriori_rules::{generate_rules, mine, Itemset, TransactionSet};
//!
//! let transactions: TransactionSet = vec![
//!     Itemset::new(["a", "b"]),
//!     Itemset::new(["a", "b", "c"]),
//!     Itemset::new(["a"]),
//!     Itemset::new(["b", "c"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let frequent = mine(&transactions, 0.5)?;
//! assert_eq!(frequent.support(&Itemset::new(["a", "b"])), Some(0.5));
//!
//! let rules = generate_rules(&frequent, 0.6)?;
//! assert!(rules.iter().all(|rule| rule.confidence >= 0.6));
//! # Ok::<(), apriori_rules::MiningError>(())
//! ```

pub mod apriori;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use apriori::{
    generate_rules, mine, sort_rules, AprioriEngine, AssociationRule, FrequentItemsets,
    FrequentLevel, Item, Itemset, MiningConfig, TransactionSet,
};
pub use error::{MiningError, Result};
