//! The planner glue: interpretations in, action sequences out.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use gantry_interp::interpret::Interpretation;
use gantry_kernel::goal::DnfFormula;
use gantry_kernel::state::WorldState;
use gantry_search::astar::astar;
use gantry_search::error::SearchError;

use crate::error::PlanError;
use crate::heuristic::formula_estimate;
use crate::transition::{ArmAction, StateNode, WorldGraph};

/// Rendering of an already-achieved goal.
pub const ALREADY_SATISFIED: &str = "That is already true!";

/// Planner knobs.
#[derive(Debug, Clone)]
pub struct PlannerPolicy {
    /// Wall-clock budget per interpretation.
    pub timeout: Duration,
}

impl Default for PlannerPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// The outcome of planning one interpretation.
///
/// A goal the start state already satisfies yields the explicit
/// `AlreadySatisfied` sentinel, never an empty action list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Actions(Vec<ArmAction>),
    AlreadySatisfied,
}

impl Plan {
    /// The actions to execute; empty when nothing needs doing.
    #[must_use]
    pub fn actions(&self) -> &[ArmAction] {
        match self {
            Self::Actions(actions) => actions,
            Self::AlreadySatisfied => &[],
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySatisfied => write!(f, "{ALREADY_SATISFIED}"),
            Self::Actions(actions) => {
                for (i, action) in actions.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{action}")?;
                }
                Ok(())
            }
        }
    }
}

/// One interpretation successfully planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResult {
    pub interpretation: Interpretation,
    pub plan: Plan,
    /// Total action count of the plan (zero when already satisfied).
    pub cost: u64,
}

/// Find a cost-optimal action sequence satisfying `formula` from `state`.
///
/// # Errors
///
/// [`PlanError::Timeout`] when the budget runs out,
/// [`PlanError::NoPlanFound`] when every reachable world falls short.
pub fn plan_formula(
    formula: &DnfFormula,
    state: &WorldState,
    policy: &PlannerPolicy,
) -> Result<Plan, PlanError> {
    let result = astar(
        &WorldGraph,
        StateNode::root(state.clone()),
        |node: &StateNode| formula.satisfied_by(&node.state),
        |node: &StateNode| formula_estimate(formula, &node.state),
        policy.timeout,
    )
    .map_err(|error| match error {
        SearchError::Timeout {
            budget_ms,
            elapsed_ms,
        } => PlanError::Timeout {
            budget_ms,
            elapsed_ms,
        },
        SearchError::FrontierExhausted => PlanError::NoPlanFound,
    })?;

    let actions: Vec<ArmAction> = result.path.iter().filter_map(|node| node.action).collect();
    debug!(goal = %formula, cost = result.cost, steps = actions.len(), "plan found");
    if actions.is_empty() {
        Ok(Plan::AlreadySatisfied)
    } else {
        Ok(Plan::Actions(actions))
    }
}

/// Plan every interpretation, collecting per-interpretation failures; only
/// when all of them fail is the first failure surfaced.
///
/// # Errors
///
/// The first [`PlanError`], when no interpretation could be planned.
pub fn plan(
    interpretations: &[Interpretation],
    state: &WorldState,
    policy: &PlannerPolicy,
) -> Result<Vec<PlanResult>, PlanError> {
    let mut results = Vec::new();
    let mut first_error: Option<PlanError> = None;
    for interpretation in interpretations {
        match plan_formula(&interpretation.formula, state, policy) {
            Ok(plan) => {
                let cost = plan.actions().len() as u64;
                results.push(PlanResult {
                    interpretation: interpretation.clone(),
                    plan,
                    cost,
                });
            }
            Err(error) => {
                debug!(parse = interpretation.parse, %error, "interpretation rejected");
                first_error.get_or_insert(error);
            }
        }
    }
    match first_error {
        Some(error) if results.is_empty() => Err(error),
        _ => Ok(results),
    }
}
