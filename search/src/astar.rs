//! The A* expansion loop.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{SearchResult, TransitionSystem};

/// Best-first search from `start` to any node satisfying `is_goal`.
///
/// Frontier entries are ordered by `cost = g + h`; when a path is extended
/// along an edge the new cost is
/// `parent_cost - h(parent_end) + h(new_end) + edge_cost`, which recovers
/// `g` before adding the new endpoint's heuristic. Already-visited endpoints
/// are discarded lazily at pop time, so duplicate frontier entries for one
/// node are expected and harmless.
///
/// With an admissible heuristic the returned path is cost-optimal; the
/// engine does not verify admissibility.
///
/// # Errors
///
/// [`SearchError::Timeout`] when the wall clock exceeds `timeout` (checked
/// once per iteration), [`SearchError::FrontierExhausted`] when every
/// reachable node was expanded without reaching the goal.
pub fn astar<T, G, H>(
    system: &T,
    start: T::Node,
    mut is_goal: G,
    mut heuristic: H,
    timeout: Duration,
) -> Result<SearchResult<T::Node>, SearchError>
where
    T: TransitionSystem,
    G: FnMut(&T::Node) -> bool,
    H: FnMut(&T::Node) -> u64,
{
    let started = Instant::now();
    let mut frontier = Frontier::new();
    let mut visited: HashSet<T::Node> = HashSet::new();
    let mut expansions: u64 = 0;

    let start_estimate = heuristic(&start);
    frontier.push(vec![start], start_estimate);

    while let Some((path, cost)) = frontier.pop() {
        let elapsed = started.elapsed();
        if elapsed > timeout {
            return Err(SearchError::Timeout {
                budget_ms: timeout.as_millis() as u64,
                elapsed_ms: elapsed.as_millis() as u64,
            });
        }

        let Some(end) = path.last() else {
            continue;
        };
        // Lazy deletion: a cheaper entry for this node was popped earlier.
        if visited.contains(end) {
            continue;
        }
        if is_goal(end) {
            debug!(cost, expansions, depth = path.len() - 1, "goal reached");
            return Ok(SearchResult { path, cost });
        }
        visited.insert(end.clone());
        expansions += 1;

        let end_estimate = heuristic(end);
        for edge in system.edges(end) {
            if visited.contains(&edge.to) {
                continue;
            }
            let extended_cost = cost.saturating_sub(end_estimate) + heuristic(&edge.to) + edge.cost;
            let mut extended = path.clone();
            extended.push(edge.to);
            frontier.push(extended, extended_cost);
        }
    }

    debug!(expansions, "frontier exhausted");
    Err(SearchError::FrontierExhausted)
}
