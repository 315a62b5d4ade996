//! Goal-distance estimate for DNF formulas.
//!
//! Per literal, the relation's own lower bound (or zero when the literal
//! already holds; an unsatisfied negative literal needs at least one action
//! to undo). A conjunction is bounded by its most expensive unsatisfied
//! literal, never the sum: two literals can share actions, so the sum can
//! overestimate, while the max cannot. A formula is bounded by its cheapest
//! conjunction, since satisfying any one disjunct suffices.

use gantry_kernel::goal::{Conjunction, DnfFormula, Literal};
use gantry_kernel::state::WorldState;

/// An admissible lower bound on the actions separating `state` from
/// satisfying `formula`.
#[must_use]
pub fn formula_estimate(formula: &DnfFormula, state: &WorldState) -> u64 {
    formula
        .conjunctions()
        .iter()
        .map(|conjunction| conjunction_estimate(conjunction, state))
        .min()
        .unwrap_or(0)
}

fn conjunction_estimate(conjunction: &Conjunction, state: &WorldState) -> u64 {
    conjunction
        .literals()
        .iter()
        .map(|literal| literal_estimate(literal, state))
        .max()
        .unwrap_or(0)
}

fn literal_estimate(literal: &Literal, state: &WorldState) -> u64 {
    if literal.holds(state) {
        0
    } else if literal.polarity {
        literal.relation.estimate_actions(state, &literal.args)
    } else {
        // Undoing a holding relation takes one drop; undoing anything else
        // takes at least one action too.
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use gantry_kernel::object::{Form, ObjectDefinition, ObjectId, Size};
    use gantry_kernel::relation::Relation;

    fn id(name: &str) -> ObjectId {
        ObjectId::new(name)
    }

    fn brick_world() -> WorldState {
        let mut objects = BTreeMap::new();
        objects.insert(
            id("a"),
            ObjectDefinition::new(Size::Small, "red", Form::Brick),
        );
        objects.insert(
            id("b"),
            ObjectDefinition::new(Size::Small, "white", Form::Brick),
        );
        WorldState::new(vec![vec![id("a")], vec![id("b")]], None, 0, objects).unwrap()
    }

    fn literal(relation: Relation, args: &[&str]) -> Literal {
        Literal::positive(relation, args.iter().map(|a| ObjectId::new(a)).collect())
    }

    #[test]
    fn a_satisfied_formula_estimates_zero() {
        let formula = DnfFormula::new(vec![Conjunction::new(vec![literal(
            Relation::Beside,
            &["a", "b"],
        )])]);
        assert_eq!(formula_estimate(&formula, &brick_world()), 0);
    }

    #[test]
    fn the_cheapest_disjunct_dominates() {
        let cheap = Conjunction::new(vec![literal(Relation::Holding, &["a"])]);
        let dear = Conjunction::new(vec![literal(Relation::Holding, &["b"])]);
        let formula = DnfFormula::new(vec![dear, cheap]);
        // holding(a): pick, 1. holding(b): move and pick, 2.
        assert_eq!(formula_estimate(&formula, &brick_world()), 1);
    }

    #[test]
    fn a_conjunction_is_bounded_by_its_worst_literal() {
        let conjunction = Conjunction::new(vec![
            literal(Relation::Holding, &["b"]),
            literal(Relation::Beside, &["a", "b"]),
        ]);
        let formula = DnfFormula::new(vec![conjunction]);
        // beside(a,b) holds (0); holding(b) needs 2; max, not sum.
        assert_eq!(formula_estimate(&formula, &brick_world()), 2);
    }

    #[test]
    fn unsatisfied_negative_literals_cost_one() {
        let state = brick_world().pick_up().unwrap();
        let negated = Literal {
            polarity: false,
            relation: Relation::Holding,
            args: vec![id("a")],
        };
        let formula = DnfFormula::new(vec![Conjunction::new(vec![negated])]);
        assert_eq!(formula_estimate(&formula, &state), 1);
    }
}
