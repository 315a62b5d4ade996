//! The spatial-relation vocabulary.
//!
//! One tagged enum carries every per-relation behavior: the static
//! physical-law check ([`Relation::check_placement`]), the concrete-state
//! evaluator ([`Relation::holds`]), and the action-count estimator (in
//! [`crate::distance`]). Each is an exhaustive match, so adding a relation
//! without all three behaviors fails to compile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlacementViolation;
use crate::object::{Form, ObjectDefinition, ObjectId, Size};
use crate::state::WorldState;

/// A spatial relation between world objects (or one object and the arm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    OnTop,
    Inside,
    Above,
    Under,
    Beside,
    LeftOf,
    RightOf,
    Holding,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OnTop => "ontop",
            Self::Inside => "inside",
            Self::Above => "above",
            Self::Under => "under",
            Self::Beside => "beside",
            Self::LeftOf => "leftof",
            Self::RightOf => "rightof",
            Self::Holding => "holding",
        };
        write!(f, "{name}")
    }
}

impl Relation {
    /// Number of object arguments the relation takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Holding => 1,
            _ => 2,
        }
    }

    /// Static physical-law check: can `a` ever stand in this relation to
    /// `b`, regardless of the current state?
    ///
    /// The floor is passed as the sentinel id with
    /// [`ObjectDefinition::floor`].
    ///
    /// # Errors
    ///
    /// A [`PlacementViolation`] whose `Display` explains the rejection in
    /// user-facing prose.
    pub fn check_placement(
        self,
        a: (&ObjectId, &ObjectDefinition),
        b: (&ObjectId, &ObjectDefinition),
    ) -> Result<(), PlacementViolation> {
        let (a_id, a_def) = a;
        let (b_id, b_def) = b;
        if a_id == b_id {
            return Err(PlacementViolation::SelfRelation {
                relation: self,
                object: a_def.to_string(),
            });
        }
        match self {
            Self::OnTop => {
                if a_def.form == Form::Ball && !matches!(b_def.form, Form::Box | Form::Floor) {
                    return Err(PlacementViolation::BallNeedsBoxOrFloor {
                        relation: self,
                        ball: a_def.to_string(),
                        target: b_def.to_string(),
                    });
                }
                if a_def.size == Size::Large && b_def.size == Size::Small {
                    return Err(PlacementViolation::SmallCannotSupportLarge {
                        support: b_def.to_string(),
                        load: a_def.to_string(),
                    });
                }
                if b_def.form == Form::Ball {
                    return Err(PlacementViolation::BallCannotSupport {
                        ball: b_def.to_string(),
                    });
                }
                if b_def.form == Form::Box {
                    return Err(PlacementViolation::OnTopOfBox {
                        target: b_def.to_string(),
                    });
                }
                Ok(())
            }
            Self::Inside => {
                if a_def.size == Size::Large && b_def.size == Size::Small {
                    return Err(PlacementViolation::SmallCannotSupportLarge {
                        support: b_def.to_string(),
                        load: a_def.to_string(),
                    });
                }
                if b_def.form != Form::Box {
                    return Err(PlacementViolation::InsideNonBox {
                        target: b_def.to_string(),
                    });
                }
                Ok(())
            }
            Self::Under => {
                if a_def.size == Size::Small && b_def.size == Size::Large {
                    return Err(PlacementViolation::SmallCannotSupportLarge {
                        support: a_def.to_string(),
                        load: b_def.to_string(),
                    });
                }
                if a_def.form == Form::Ball {
                    return Err(PlacementViolation::BallCannotSupport {
                        ball: a_def.to_string(),
                    });
                }
                Ok(())
            }
            Self::Above => {
                if a_def.size == Size::Large && b_def.size == Size::Small {
                    return Err(PlacementViolation::SmallCannotSupportLarge {
                        support: b_def.to_string(),
                        load: a_def.to_string(),
                    });
                }
                Ok(())
            }
            // Lateral relations and the arm place no static constraints
            // beyond a != b.
            Self::Beside | Self::LeftOf | Self::RightOf | Self::Holding => Ok(()),
        }
    }

    /// Does the relation hold among `args` in the given state?
    ///
    /// `inside` shares the `ontop` geometry (no geometric distinction is
    /// modeled), `under` is `above` flipped, and `above` anything is true of
    /// the floor. Wrong-arity argument lists never hold.
    #[must_use]
    pub fn holds(self, state: &WorldState, args: &[ObjectId]) -> bool {
        match (self, args) {
            (Self::Holding, [a]) => state.holding() == Some(a),
            (Self::OnTop | Self::Inside, [a, b]) => on_top_of(state, a, b),
            (Self::Above, [a, b]) => above(state, a, b),
            (Self::Under, [a, b]) => above(state, b, a),
            (Self::Beside, [a, b]) => match (state.column_of(a), state.column_of(b)) {
                (Some(ca), Some(cb)) => ca.abs_diff(cb) == 1,
                _ => false,
            },
            (Self::LeftOf, [a, b]) => match (state.column_of(a), state.column_of(b)) {
                (Some(ca), Some(cb)) => ca < cb,
                _ => false,
            },
            (Self::RightOf, [a, b]) => match (state.column_of(a), state.column_of(b)) {
                (Some(ca), Some(cb)) => ca > cb,
                _ => false,
            },
            _ => false,
        }
    }
}

fn on_top_of(state: &WorldState, a: &ObjectId, b: &ObjectId) -> bool {
    if b.is_floor() {
        return state.height_of(a) == Some(0);
    }
    match (
        state.column_of(a),
        state.column_of(b),
        state.height_of(a),
        state.height_of(b),
    ) {
        (Some(ca), Some(cb), Some(ha), Some(hb)) => ca == cb && ha == hb + 1,
        _ => false,
    }
}

fn above(state: &WorldState, a: &ObjectId, b: &ObjectId) -> bool {
    if b.is_floor() {
        return true;
    }
    match (
        state.column_of(a),
        state.column_of(b),
        state.height_of(a),
        state.height_of(b),
    ) {
        (Some(ca), Some(cb), Some(ha), Some(hb)) => ca == cb && ha > hb,
        _ => false,
    }
}
