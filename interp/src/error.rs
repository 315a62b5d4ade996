//! Typed interpretation failures.
//!
//! All of these are recoverable at per-parse granularity: the driver collects
//! them and only surfaces the first one when every candidate parse failed.
//! Messages are user-facing prose, never debug dumps.

use thiserror::Error;

use gantry_kernel::relation::Relation;

/// Why one candidate parse could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// A description resolved to zero candidates.
    #[error("found nothing matching \"{description}\"")]
    NoMatchingObject { description: String },
    /// A `the`-quantified object description fits several objects.
    #[error("the command is ambiguous; did you mean {}?", .candidates.join(" or "))]
    AmbiguousCommand { candidates: Vec<String> },
    /// A `the`-quantified location description fits several objects.
    #[error("the location is ambiguous; did you mean {}?", .candidates.join(" or "))]
    AmbiguousLocation { candidates: Vec<String> },
    /// Every object/location pairing violates a physical law.
    #[error("that is physically impossible: {}", .explanations.join("; "))]
    PhysicallyImpossible { explanations: Vec<String> },
    /// A relation was used with the wrong number of arguments. The grammar
    /// never produces this; it marks a malformed parse tree.
    #[error("malformed parse: {relation} cannot take a location argument")]
    UnknownRelation { relation: Relation },
    /// A bare "put" with an empty arm.
    #[error("the arm is not holding anything")]
    NothingHeld,
    /// The quantifier enumeration hit its cap.
    #[error("the command allows too many arrangements (more than {cap})")]
    TooManyCombinations { cap: usize },
}
