//! The rules engine trait and its support types.

mod engine;

pub use engine::{GameResult, RuleError, RulesEngine};
