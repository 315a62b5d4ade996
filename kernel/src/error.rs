//! Typed kernel errors.
//!
//! `WorldError` covers malformed world snapshots at construction time.
//! Physical-law rejections are [`PlacementViolation`]; their `Display`
//! renderings are the user-visible explanations the interpreter aggregates.

use thiserror::Error;

use crate::object::ObjectId;
use crate::relation::Relation;

/// A world snapshot that violates the placement invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// The arm column index is not a valid column.
    #[error("arm column {arm} out of bounds for {columns} column(s)")]
    ArmOutOfBounds { arm: usize, columns: usize },
    /// An object id appears in more than one slot (or both a slot and the arm).
    #[error("object \"{id}\" is placed more than once")]
    DuplicatePlacement { id: ObjectId },
    /// A placed id has no catalog entry.
    #[error("object \"{id}\" is not in the object catalog")]
    UnknownObject { id: ObjectId },
    /// A catalog entry is neither in a stack nor held.
    #[error("object \"{id}\" is in the catalog but placed nowhere")]
    UnplacedObject { id: ObjectId },
    /// The floor sentinel may not be placed or cataloged.
    #[error("\"{id}\" is a reserved identifier")]
    ReservedId { id: ObjectId },
}

/// A physically incoherent placement, with a human-readable explanation.
///
/// Object fields carry rendered descriptions ("large red box") rather than
/// ids so the message reads like the command did.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementViolation {
    #[error("the {object} cannot be {relation} itself")]
    SelfRelation { relation: Relation, object: String },
    #[error("the {ball} can only go in a box or on the floor, not {relation} the {target}")]
    BallNeedsBoxOrFloor {
        relation: Relation,
        ball: String,
        target: String,
    },
    #[error("the {support} is too small to support the {load}")]
    SmallCannotSupportLarge { support: String, load: String },
    #[error("nothing can balance on the {ball}")]
    BallCannotSupport { ball: String },
    #[error("things go inside the {target}, not on top of it")]
    OnTopOfBox { target: String },
    #[error("things can only be inside a box, not inside the {target}")]
    InsideNonBox { target: String },
}
