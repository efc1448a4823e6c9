#![deny(unsafe_code)]

pub mod condition;
pub mod repository;
pub mod store;

pub use condition::{ConditionEvaluator, ConditionOutcome, OpaqueConditions};
pub use repository::{RuleSetRepository, StoredRuleSet, load_rules_file};
pub use store::{MappingRuleStore, RuleField};
