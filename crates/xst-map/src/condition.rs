//! Pluggable condition-evaluation seam.
//!
//! Rule conditions are opaque strings. The core stores them but commits to
//! no expression grammar; consumers that want real evaluation implement
//! [`ConditionEvaluator`] and report `Unsupported` for anything outside
//! their grammar.

/// Result of evaluating a rule condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOutcome {
    True,
    False,
    /// The evaluator does not understand this expression.
    Unsupported,
}

pub trait ConditionEvaluator {
    fn evaluate(&self, condition: &str) -> ConditionOutcome;
}

/// Default evaluator: treats every non-empty condition as opaque.
///
/// An empty condition means "unconditional" and evaluates true.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueConditions;

impl ConditionEvaluator for OpaqueConditions {
    fn evaluate(&self, condition: &str) -> ConditionOutcome {
        if condition.trim().is_empty() {
            ConditionOutcome::True
        } else {
            ConditionOutcome::Unsupported
        }
    }
}
