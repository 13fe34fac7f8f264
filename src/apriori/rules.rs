use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use super::combinations::generate_combinations;
use super::itemset::Itemset;
use super::storage::FrequentItemsets;
use crate::error::{check_threshold, MiningError, Result};

/// Implication `antecedent => consequent` between disjoint itemsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Support of `antecedent ∪ consequent`
    pub support: f64,
    /// `support(antecedent ∪ consequent) / support(antecedent)`
    pub confidence: f64,
    /// `confidence / support(consequent)`
    pub lift: f64,
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} ({:.2}%)",
            self.antecedent,
            self.consequent,
            self.confidence * 100.0
        )
    }
}

/// Emit every rule derivable from `frequent` with confidence of at least
/// `min_confidence`.
///
/// Each frequent itemset of two or more items is split into every
/// non-empty proper antecedent and its complement. Antecedent and
/// consequent supports come from `frequent`; a missing entry means the
/// map is not closed under subsets and fails the whole call.
pub fn generate_rules(frequent: &FrequentItemsets, min_confidence: f64) -> Result<Vec<AssociationRule>> {
    check_threshold("min_confidence", min_confidence)?;

    let mut rules = Vec::new();
    for (itemset, support) in frequent.iter() {
        if itemset.len() < 2 {
            continue;
        }

        for size in 1..itemset.len() {
            for antecedent in generate_combinations(itemset.items(), size) {
                let antecedent = Itemset::new(antecedent);
                let consequent = itemset.difference(&antecedent);

                let antecedent_support = frequent.support(&antecedent).ok_or_else(|| {
                    MiningError::MissingAntecedentSupport {
                        antecedent: antecedent.clone(),
                    }
                })?;
                let confidence = ratio(support, antecedent_support);
                if confidence < min_confidence {
                    continue;
                }

                let consequent_support = frequent.support(&consequent).ok_or_else(|| {
                    MiningError::MissingConsequentSupport {
                        consequent: consequent.clone(),
                    }
                })?;
                let lift = ratio(confidence, consequent_support);

                rules.push(AssociationRule {
                    antecedent,
                    consequent,
                    support,
                    confidence,
                    lift,
                });
            }
        }
    }

    info!(
        itemsets = frequent.len(),
        rules = rules.len(),
        min_confidence,
        "rule generation finished"
    );
    Ok(rules)
}

/// Order rules by antecedent size, then antecedent labels, then consequent.
pub fn sort_rules(rules: &mut [AssociationRule]) {
    rules.sort_by(|a, b| {
        a.antecedent
            .len()
            .cmp(&b.antecedent.len())
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            .then_with(|| a.consequent.cmp(&b.consequent))
    });
}

// Zero denominators only arise for zero-support itemsets, whose numerators
// are zero as well.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
