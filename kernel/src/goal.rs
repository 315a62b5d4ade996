//! Goal formulas in disjunctive normal form.
//!
//! The interpreter compiles commands into a [`DnfFormula`]; the planner
//! evaluates one against candidate states. Rendering follows the classic
//! form: `ontop(a,b) & holding(c) | -beside(a,c)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::object::ObjectId;
use crate::relation::Relation;
use crate::state::WorldState;

/// A signed relation instance over specific object ids.
///
/// Negative polarity asserts the relation must NOT hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub polarity: bool,
    pub relation: Relation,
    pub args: Vec<ObjectId>,
}

impl Literal {
    #[must_use]
    pub fn positive(relation: Relation, args: Vec<ObjectId>) -> Self {
        Self {
            polarity: true,
            relation,
            args,
        }
    }

    /// Evaluate against a concrete state, respecting polarity.
    #[must_use]
    pub fn holds(&self, state: &WorldState) -> bool {
        let holds = self.relation.holds(state, &self.args);
        if self.polarity {
            holds
        } else {
            !holds
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "-")?;
        }
        write!(f, "{}(", self.relation)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}

/// A non-empty set of literals that must hold simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conjunction(Vec<Literal>);

impl Conjunction {
    /// `literals` must be non-empty; the compiler never emits an empty
    /// conjunction.
    #[must_use]
    pub fn new(literals: Vec<Literal>) -> Self {
        debug_assert!(!literals.is_empty(), "empty conjunction");
        Self(literals)
    }

    #[must_use]
    pub fn literals(&self) -> &[Literal] {
        &self.0
    }

    #[must_use]
    pub fn satisfied_by(&self, state: &WorldState) -> bool {
        self.0.iter().all(|literal| literal.holds(state))
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, literal) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}

/// A non-empty disjunction of conjunctions: the goal is met when any one
/// conjunction holds in full.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnfFormula(Vec<Conjunction>);

impl DnfFormula {
    /// `conjunctions` must be non-empty; an interpretation with no feasible
    /// conjunction is an error, never an empty formula.
    #[must_use]
    pub fn new(conjunctions: Vec<Conjunction>) -> Self {
        debug_assert!(!conjunctions.is_empty(), "empty formula");
        Self(conjunctions)
    }

    #[must_use]
    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.0
    }

    #[must_use]
    pub fn satisfied_by(&self, state: &WorldState) -> bool {
        self.0
            .iter()
            .any(|conjunction| conjunction.satisfied_by(state))
    }
}

impl fmt::Display for DnfFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conjunction) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{conjunction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Form, ObjectDefinition, Size};
    use std::collections::BTreeMap;

    fn id(name: &str) -> ObjectId {
        ObjectId::new(name)
    }

    fn world() -> WorldState {
        let mut objects = BTreeMap::new();
        objects.insert(id("a"), ObjectDefinition::new(Size::Small, "red", Form::Brick));
        objects.insert(id("b"), ObjectDefinition::new(Size::Small, "white", Form::Brick));
        WorldState::new(vec![vec![id("a")], vec![id("b")]], None, 0, objects).unwrap()
    }

    #[test]
    fn negative_polarity_inverts_the_evaluator() {
        let state = world();
        let positive = Literal::positive(Relation::Beside, vec![id("a"), id("b")]);
        let negative = Literal {
            polarity: false,
            ..positive.clone()
        };
        assert!(positive.holds(&state));
        assert!(!negative.holds(&state));
    }

    #[test]
    fn formula_is_satisfied_by_any_conjunction() {
        let state = world();
        let impossible = Conjunction::new(vec![Literal::positive(
            Relation::Holding,
            vec![id("a")],
        )]);
        let satisfied = Conjunction::new(vec![Literal::positive(
            Relation::OnTop,
            vec![id("b"), ObjectId::floor()],
        )]);
        assert!(!impossible.satisfied_by(&state));
        let formula = DnfFormula::new(vec![impossible, satisfied]);
        assert!(formula.satisfied_by(&state));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let state = world();
        let formula = DnfFormula::new(vec![Conjunction::new(vec![Literal::positive(
            Relation::LeftOf,
            vec![id("a"), id("b")],
        )])]);
        assert_eq!(formula.satisfied_by(&state), formula.satisfied_by(&state));
    }

    #[test]
    fn rendering_matches_the_classic_form() {
        let formula = DnfFormula::new(vec![
            Conjunction::new(vec![
                Literal::positive(Relation::OnTop, vec![id("a"), id("b")]),
                Literal {
                    polarity: false,
                    relation: Relation::Holding,
                    args: vec![id("c")],
                },
            ]),
            Conjunction::new(vec![Literal::positive(Relation::Holding, vec![id("c")])]),
        ]);
        assert_eq!(
            formula.to_string(),
            "ontop(a,b) & -holding(c) | holding(c)"
        );
    }
}
