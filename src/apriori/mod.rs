pub mod candidates;
pub mod combinations;
pub mod config;
pub mod engine;
pub mod itemset;
pub mod rules;
pub mod storage;
pub mod support;
pub mod transactions;


pub use config::MiningConfig;
pub use engine::{mine, AprioriEngine, LevelPhase};
pub use itemset::{Item, Itemset};
pub use rules::{generate_rules, sort_rules, AssociationRule};
pub use storage::{FrequentItemsets, FrequentLevel};
pub use support::{compute_support, CandidateSet, SupportMap};
pub use transactions::TransactionSet;
