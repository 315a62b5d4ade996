//! Typed planning failures.

use thiserror::Error;

/// Why no plan was produced for an interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The search ran out of wall-clock budget.
    #[error("planning timed out after {elapsed_ms} ms (budget {budget_ms} ms)")]
    Timeout { budget_ms: u64, elapsed_ms: u64 },
    /// Every reachable world was examined and none satisfies the goal.
    #[error("no sequence of actions achieves that goal")]
    NoPlanFound,
}
