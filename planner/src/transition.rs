//! The blocks world as a searchable transition system.
//!
//! Every state has up to four unit-cost successors: arm left, arm right,
//! pick up, drop. A drop is only offered when the physical-law table allows
//! the held object onto the top of the arm's column (or the floor), so the
//! search never visits an illegal world.

use std::fmt;
use std::hash::{Hash, Hasher};

use gantry_kernel::object::{Form, ObjectDefinition, ObjectId};
use gantry_kernel::relation::Relation;
use gantry_kernel::state::WorldState;
use gantry_search::graph::{Edge, TransitionSystem};

/// A primitive arm action. Labels follow the classic single letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmAction {
    Left,
    Right,
    Pick,
    Drop,
}

impl ArmAction {
    /// Enumeration order fixes the successor order, and with it the
    /// deterministic tie-breaking of the search.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Pick, Self::Drop];

    #[must_use]
    pub fn label(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Right => 'r',
            Self::Pick => 'p',
            Self::Drop => 'd',
        }
    }
}

impl fmt::Display for ArmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A search node: a world state plus the action that produced it (`None`
/// for the root).
///
/// Identity is the state alone; the action is bookkeeping for path
/// reconstruction and never distinguishes nodes.
#[derive(Debug, Clone)]
pub struct StateNode {
    pub state: WorldState,
    pub action: Option<ArmAction>,
}

impl StateNode {
    #[must_use]
    pub fn root(state: WorldState) -> Self {
        Self {
            state,
            action: None,
        }
    }
}

impl PartialEq for StateNode {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for StateNode {}

impl Hash for StateNode {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.state.hash(hasher);
    }
}

/// The successor function over [`StateNode`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldGraph;

/// The state after `action`, or `None` when it is illegal.
#[must_use]
pub fn apply(state: &WorldState, action: ArmAction) -> Option<WorldState> {
    match action {
        ArmAction::Left => state.arm().checked_sub(1).and_then(|c| state.with_arm(c)),
        ArmAction::Right => state.with_arm(state.arm() + 1),
        ArmAction::Pick => state.pick_up(),
        ArmAction::Drop => {
            let held = state.holding()?;
            let held_def = state.definition(held)?;
            let (target_id, target_def) = match state.top_of(state.arm()) {
                Some(top) => (top.clone(), state.definition(top)?),
                None => (ObjectId::floor(), ObjectDefinition::floor()),
            };
            // A box is entered, everything else is landed on.
            let relation = if target_def.form == Form::Box {
                Relation::Inside
            } else {
                Relation::OnTop
            };
            relation
                .check_placement((held, &held_def), (&target_id, &target_def))
                .ok()?;
            state.put_down()
        }
    }
}

/// Replay a full action sequence, failing on the first illegal step.
#[must_use]
pub fn apply_actions(state: &WorldState, actions: &[ArmAction]) -> Option<WorldState> {
    let mut current = state.clone();
    for &action in actions {
        current = apply(&current, action)?;
    }
    Some(current)
}

impl TransitionSystem for WorldGraph {
    type Node = StateNode;

    fn edges(&self, node: &StateNode) -> Vec<Edge<StateNode>> {
        ArmAction::ALL
            .iter()
            .filter_map(|&action| {
                apply(&node.state, action).map(|state| Edge {
                    to: StateNode {
                        state,
                        action: Some(action),
                    },
                    cost: 1,
                })
            })
            .collect()
    }
}
