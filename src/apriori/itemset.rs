use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque item label
pub type Item = String;

/// Set of distinct items kept in canonical (sorted, deduplicated) order.
///
/// Two itemsets built from the same labels in any order compare equal and
/// hash identically, so they can key maps and sets directly. Candidates and
/// frequent itemsets are never empty; a transaction may be.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<Item>", into = "Vec<Item>")]
pub struct Itemset {
    items: Vec<Item>,
}

impl Itemset {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Item>,
    {
        let mut items: Vec<Item> = items.into_iter().map(Into::into).collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn singleton(item: impl Into<Item>) -> Self {
        Self {
            items: vec![item.into()],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items
            .binary_search_by(|probe| probe.as_str().cmp(item))
            .is_ok()
    }

    /// True when every item of `other` also appears in `self`.
    ///
    /// Both sides are sorted, so this is a single merge walk.
    pub fn is_superset_of(&self, other: &Itemset) -> bool {
        if other.len() > self.len() {
            return false;
        }
        let mut mine = self.items.iter();
        'outer: for wanted in &other.items {
            for have in mine.by_ref() {
                match have.cmp(wanted) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'outer,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset::new(self.items.iter().chain(other.items.iter()).cloned())
    }

    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset {
            items: self
                .items
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        }
    }

    /// Copy of this itemset with the item at `index` removed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn without(&self, index: usize) -> Itemset {
        let mut items = self.items.clone();
        items.remove(index);
        Itemset { items }
    }
}

impl From<Vec<Item>> for Itemset {
    fn from(items: Vec<Item>) -> Self {
        Itemset::new(items)
    }
}

impl From<Itemset> for Vec<Item> {
    fn from(itemset: Itemset) -> Self {
        itemset.items
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.join(", "))
    }
}
