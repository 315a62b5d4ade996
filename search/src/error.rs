//! Typed search failures.

use thiserror::Error;

/// Why a search ended without a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The wall-clock budget was exceeded. Checked once per iteration of
    /// the expansion loop; there is no other cancellation mechanism.
    #[error("search timed out after {elapsed_ms} ms (budget {budget_ms} ms)")]
    Timeout { budget_ms: u64, elapsed_ms: u64 },
    /// Every reachable node was expanded without satisfying the goal.
    #[error("search frontier exhausted without reaching the goal")]
    FrontierExhausted,
}
