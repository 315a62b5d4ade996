//! The entity resolver: descriptions to matching object ids.
//!
//! Candidates scan the world left-to-right, bottom-to-top, with the held
//! object last, so resolution order is deterministic. Relative clauses keep
//! only candidates for which the relation holds against at least one related
//! candidate, and record those witnesses for anaphora ("one", "it") further
//! along the command.

use std::collections::BTreeSet;

use gantry_kernel::object::{Form, ObjectId, Size};
use gantry_kernel::state::WorldState;

use crate::describe::describe_spec;
use crate::error::InterpretError;
use crate::parse::{Entity, FormPattern, ObjectSpec};

/// Resolution context: the ids mentioned earlier in the utterance, for
/// anaphora.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub seen: BTreeSet<ObjectId>,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this context that additionally remembers `ids`.
    #[must_use]
    pub fn with_seen<I: IntoIterator<Item = ObjectId>>(&self, ids: I) -> Self {
        let mut next = self.clone();
        next.seen.extend(ids);
        next
    }
}

/// One object matching a description, with the related ids that satisfied
/// its relative clause (empty for simple descriptions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMatch {
    pub id: ObjectId,
    pub witnesses: Vec<ObjectId>,
}

/// The ordered, de-duplicated matches of one description. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    matches: Vec<ResolvedMatch>,
}

impl Resolution {
    #[must_use]
    pub fn matches(&self) -> &[ResolvedMatch] {
        &self.matches
    }

    /// The matched ids in resolution order.
    #[must_use]
    pub fn ids(&self) -> Vec<ObjectId> {
        self.matches.iter().map(|m| m.id.clone()).collect()
    }

    /// Every matched id plus every witness, for extending a [`Context`].
    #[must_use]
    pub fn mentioned_ids(&self) -> Vec<ObjectId> {
        let mut ids = Vec::new();
        for m in &self.matches {
            ids.push(m.id.clone());
            ids.extend(m.witnesses.iter().cloned());
        }
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Resolve an entity's description. The quantifier plays no part here; it
/// belongs to the goal compiler.
///
/// # Errors
///
/// [`InterpretError::NoMatchingObject`] when nothing fits the description.
pub fn resolve_entity(
    entity: &Entity,
    state: &WorldState,
    ctx: &Context,
) -> Result<Resolution, InterpretError> {
    resolve_spec(&entity.object, state, ctx)
}

/// Resolve a bare description against the world.
///
/// # Errors
///
/// [`InterpretError::NoMatchingObject`] when nothing fits the description.
pub fn resolve_spec(
    spec: &ObjectSpec,
    state: &WorldState,
    ctx: &Context,
) -> Result<Resolution, InterpretError> {
    let matches = match spec {
        ObjectSpec::Simple { size, color, form } => {
            resolve_simple(state, ctx, *size, color.as_deref(), *form)?
        }
        ObjectSpec::Qualified { object, location } => {
            let inner = resolve_spec(object, state, ctx)?;
            // The relative clause may itself refer back to the inner
            // candidates ("the ball in a box beside one").
            let nested = ctx.with_seen(inner.ids());
            let related = resolve_entity(&location.entity, state, &nested)?;

            let mut kept = Vec::new();
            for candidate in inner.matches() {
                let witnesses: Vec<ObjectId> = related
                    .matches()
                    .iter()
                    .filter(|r| {
                        location
                            .relation
                            .holds(state, &[candidate.id.clone(), r.id.clone()])
                    })
                    .map(|r| r.id.clone())
                    .collect();
                if !witnesses.is_empty() {
                    kept.push(ResolvedMatch {
                        id: candidate.id.clone(),
                        witnesses,
                    });
                }
            }
            kept
        }
    };

    if matches.is_empty() {
        return Err(InterpretError::NoMatchingObject {
            description: describe_spec(spec),
        });
    }
    Ok(Resolution { matches })
}

fn resolve_simple(
    state: &WorldState,
    ctx: &Context,
    size: Option<Size>,
    color: Option<&str>,
    form: FormPattern,
) -> Result<Vec<ResolvedMatch>, InterpretError> {
    // "the floor" bypasses the catalog entirely.
    if form == FormPattern::Named(Form::Floor) {
        return Ok(vec![ResolvedMatch {
            id: ObjectId::floor(),
            witnesses: Vec::new(),
        }]);
    }

    // "one"/"it" matches any form seen so far; with nothing seen there is
    // nothing it could mean.
    let anaphoric_forms: Option<BTreeSet<Form>> = match form {
        FormPattern::Anaphoric => {
            if ctx.seen.is_empty() {
                return Err(InterpretError::NoMatchingObject {
                    description: "one".to_owned(),
                });
            }
            Some(
                ctx.seen
                    .iter()
                    .filter_map(|id| state.definition(id))
                    .map(|def| def.form)
                    .collect(),
            )
        }
        _ => None,
    };

    let matches = state
        .known_ids()
        .filter(|id| {
            let Some(def) = state.definition(id) else {
                return false;
            };
            if size.is_some_and(|s| def.size != s) {
                return false;
            }
            if color.is_some_and(|c| def.color.as_deref() != Some(c)) {
                return false;
            }
            match (&anaphoric_forms, form) {
                (Some(forms), _) => forms.contains(&def.form),
                (None, FormPattern::Any | FormPattern::Named(Form::Anyform)) => true,
                (None, FormPattern::Named(named)) => def.form == named,
                (None, FormPattern::Anaphoric) => false,
            }
        })
        .map(|id| ResolvedMatch {
            id: id.clone(),
            witnesses: Vec::new(),
        })
        .collect();
    Ok(matches)
}
