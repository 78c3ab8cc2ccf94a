//! Rules module - Naming constraints, classification and name resolution

pub mod classifier;
pub mod constants;
pub mod resolver;
pub mod rule;
pub mod set;

pub use classifier::{classify, Classification, ViolationSet};
pub use resolver::NameResolver;
pub use rule::{LiteralRule, Rule, RuleKey, TerminationRule};
pub use set::{RuleSet, RuleSetBuilder};
