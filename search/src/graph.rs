//! The transition-system contract the engine searches over.

use std::hash::Hash;

/// A directed edge to a successor node with a non-negative cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N> {
    pub to: N,
    pub cost: u64,
}

/// A graph given implicitly by its successor function.
///
/// Enumeration must be deterministic: the same node yields the same edges in
/// the same order on every call.
pub trait TransitionSystem {
    type Node: Clone + Eq + Hash;

    /// The edges that leave `node`.
    fn edges(&self, node: &Self::Node) -> Vec<Edge<Self::Node>>;
}

/// A successful search: the node sequence from start to goal (inclusive)
/// and the summed edge cost of that path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<N> {
    pub path: Vec<N>,
    pub cost: u64,
}
