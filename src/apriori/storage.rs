use std::collections::BTreeMap;

use super::itemset::Itemset;
use super::support::CandidateSet;

/// Frequent itemsets across all levels with their supports.
///
/// Grows monotonically during a run: an itemset, once recorded, is never
/// removed or overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItemsets {
    supports: BTreeMap<Itemset, f64>,
}

/// Frequent itemsets of a single size
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel {
    entries: Vec<(Itemset, f64)>,
    pub itemset_size: usize,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frequent itemset. Returns false if it was already present.
    pub fn insert(&mut self, itemset: Itemset, support: f64) -> bool {
        use std::collections::btree_map::Entry;

        match self.supports.entry(itemset) {
            Entry::Vacant(slot) => {
                slot.insert(support);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.supports.get(itemset).copied()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.supports.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.supports.iter().map(|(itemset, &support)| (itemset, support))
    }

    /// Size of the largest recorded itemset, zero when empty
    pub fn max_itemset_size(&self) -> usize {
        self.supports.keys().map(Itemset::len).max().unwrap_or(0)
    }

    pub fn itemsets_of_size(&self, size: usize) -> CandidateSet {
        self.supports
            .keys()
            .filter(|itemset| itemset.len() == size)
            .cloned()
            .collect()
    }

    /// One level per itemset size, smallest first. Sizes with no frequent
    /// itemsets are skipped.
    pub fn levels(&self) -> Vec<FrequentLevel> {
        let mut result: Vec<FrequentLevel> = Vec::new();
        for (itemset, support) in self.sorted() {
            match result.last_mut() {
                Some(level) if level.itemset_size == itemset.len() => {
                    level.add_itemset(itemset.clone(), support);
                }
                _ => {
                    let mut level = FrequentLevel::new(itemset.len());
                    level.add_itemset(itemset.clone(), support);
                    result.push(level);
                }
            }
        }
        result
    }

    /// Entries ordered by itemset size, then by label order.
    pub fn sorted(&self) -> Vec<(&Itemset, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        entries
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, itemset: Itemset, support: f64) {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.entries.push((itemset, support));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.entries.iter().map(|(itemset, support)| (itemset, *support))
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &Itemset> {
        self.entries.iter().map(|(itemset, _)| itemset)
    }
}
