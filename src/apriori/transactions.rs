use std::collections::BTreeSet;

use super::itemset::{Item, Itemset};
use crate::error::{MiningError, Result};

/// Ordered sequence of observed transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionSet {
    transactions: Vec<Itemset>,
}

impl TransactionSet {
    pub fn new(transactions: Vec<Itemset>) -> Self {
        Self { transactions }
    }

    /// Build transactions from a presence/absence table.
    ///
    /// Column `j` of every row corresponds to `labels[j]`; a `true` cell
    /// puts that label into the row's transaction.
    pub fn from_presence_rows<L, I, R>(labels: &[L], rows: I) -> Result<Self>
    where
        L: AsRef<str>,
        I: IntoIterator<Item = R>,
        R: AsRef<[bool]>,
    {
        let transactions = rows
            .into_iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let row = row.as_ref();
                if row.len() != labels.len() {
                    return Err(MiningError::ShapeMismatch {
                        row: row_idx,
                        expected: labels.len(),
                        found: row.len(),
                    });
                }
                Ok(Itemset::new(
                    row.iter()
                        .zip(labels)
                        .filter(|(present, _)| **present)
                        .map(|(_, label)| label.as_ref().to_owned()),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { transactions })
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Itemset> {
        self.transactions.iter()
    }

    /// Every item observed in at least one transaction, in label order
    pub fn distinct_items(&self) -> BTreeSet<Item> {
        self.transactions
            .iter()
            .flat_map(|transaction| transaction.iter().cloned())
            .collect()
    }
}

impl FromIterator<Itemset> for TransactionSet {
    fn from_iter<T: IntoIterator<Item = Itemset>>(iter: T) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TransactionSet {
    type Item = &'a Itemset;
    type IntoIter = std::slice::Iter<'a, Itemset>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
