//! The goal compiler: resolved object sets to DNF goal formulas.
//!
//! Every object/location pairing is screened through the physical-law table
//! before it may appear in a formula, so produced formulas are satisfiable
//! by construction at the pair level. Quantifier combinations that need a
//! choice per object (`all`, `two`, `three`) are enumerated iteratively over
//! an index frontier with eager pruning and a hard cap on emitted
//! conjunctions.

use tracing::debug;

use gantry_kernel::goal::{Conjunction, DnfFormula, Literal};
use gantry_kernel::object::ObjectId;
use gantry_kernel::relation::Relation;
use gantry_kernel::state::WorldState;

use crate::error::InterpretError;
use crate::parse::{Command, Entity, Quantifier};
use crate::resolve::{resolve_entity, Context};

/// Cap on conjunctions emitted for one formula. Counted quantifiers over
/// large candidate sets blow up combinatorially; past this point the
/// command is rejected rather than enumerated.
pub const MAX_CONJUNCTIONS: usize = 10_000;

/// Compile one command parse into a goal formula.
///
/// # Errors
///
/// Any [`InterpretError`]: unresolvable descriptions, ambiguity under `the`,
/// physical impossibility of every pairing, or enumeration overflow.
pub fn compile_command(
    command: &Command,
    state: &WorldState,
    ctx: &Context,
) -> Result<DnfFormula, InterpretError> {
    let formula = match command {
        Command::Take { entity } => compile_take(entity, state, ctx)?,
        Command::Move { entity, location } => {
            let objects = resolve_entity(entity, state, ctx)?;
            // Everything mentioned while resolving the object is visible to
            // anaphora in the location clause.
            let loc_ctx = ctx.with_seen(objects.mentioned_ids());
            let targets = resolve_entity(&location.entity, state, &loc_ctx)?;

            let movable: Vec<ObjectId> = objects
                .ids()
                .into_iter()
                .filter(|id| !id.is_floor())
                .collect();
            if movable.is_empty() {
                return Err(InterpretError::PhysicallyImpossible {
                    explanations: vec!["the floor cannot be moved".to_owned()],
                });
            }
            compile_pairs(
                location.relation,
                entity.quantifier,
                &movable,
                location.entity.quantifier,
                &targets.ids(),
                state,
            )?
        }
        Command::Put { location } => {
            let held = state
                .holding()
                .cloned()
                .ok_or(InterpretError::NothingHeld)?;
            let targets = resolve_entity(&location.entity, state, ctx)?;
            compile_pairs(
                location.relation,
                Quantifier::Any,
                std::slice::from_ref(&held),
                location.entity.quantifier,
                &targets.ids(),
                state,
            )?
        }
    };
    debug!(formula = %formula, "compiled goal");
    Ok(formula)
}

fn compile_take(
    entity: &Entity,
    state: &WorldState,
    ctx: &Context,
) -> Result<DnfFormula, InterpretError> {
    let resolution = resolve_entity(entity, state, ctx)?;
    let ids: Vec<ObjectId> = resolution
        .ids()
        .into_iter()
        .filter(|id| !id.is_floor())
        .collect();
    if ids.is_empty() {
        return Err(InterpretError::PhysicallyImpossible {
            explanations: vec!["the floor cannot be picked up".to_owned()],
        });
    }

    let holding = |id: &ObjectId| Literal::positive(Relation::Holding, vec![id.clone()]);
    let conjunctions = match entity.quantifier {
        Quantifier::The => {
            if ids.len() > 1 {
                return Err(InterpretError::AmbiguousCommand {
                    candidates: ids.iter().map(|id| describe_candidate(state, id)).collect(),
                });
            }
            vec![Conjunction::new(vec![holding(&ids[0])])]
        }
        Quantifier::Any => ids
            .iter()
            .map(|id| Conjunction::new(vec![holding(id)]))
            .collect(),
        // One arm, several objects: unsatisfiable past one, but compiled
        // faithfully; the planner reports those.
        Quantifier::All => vec![Conjunction::new(ids.iter().map(holding).collect())],
        Quantifier::Count(n) => {
            if n == 0 || n > ids.len() {
                return Err(InterpretError::PhysicallyImpossible {
                    explanations: vec![format!(
                        "cannot take {n} of {} matching object(s)",
                        ids.len()
                    )],
                });
            }
            let mut subsets = Vec::new();
            let mut indices: Vec<usize> = (0..n).collect();
            loop {
                subsets.push(Conjunction::new(
                    indices.iter().map(|&i| holding(&ids[i])).collect(),
                ));
                if subsets.len() > MAX_CONJUNCTIONS {
                    return Err(InterpretError::TooManyCombinations {
                        cap: MAX_CONJUNCTIONS,
                    });
                }
                if !next_combination(&mut indices, ids.len()) {
                    break;
                }
            }
            subsets
        }
    };
    Ok(DnfFormula::new(conjunctions))
}

/// Compile a two-argument relation over object and target candidate sets.
fn compile_pairs(
    relation: Relation,
    object_quantifier: Quantifier,
    objects: &[ObjectId],
    location_quantifier: Quantifier,
    targets: &[ObjectId],
    state: &WorldState,
) -> Result<DnfFormula, InterpretError> {
    if relation.arity() != 2 {
        return Err(InterpretError::UnknownRelation { relation });
    }
    if location_quantifier == Quantifier::The && targets.len() > 1 {
        return Err(InterpretError::AmbiguousLocation {
            candidates: targets
                .iter()
                .map(|id| describe_candidate(state, id))
                .collect(),
        });
    }

    // Screen every pair once; `legal[oi]` holds the target indices object
    // `oi` may be placed against.
    let mut legal: Vec<Vec<usize>> = Vec::with_capacity(objects.len());
    let mut rejections: Vec<String> = Vec::new();
    for object in objects {
        let Some(object_def) = state.definition(object) else {
            legal.push(Vec::new());
            continue;
        };
        let mut allowed = Vec::new();
        for (ti, target) in targets.iter().enumerate() {
            let Some(target_def) = state.definition(target) else {
                continue;
            };
            match relation.check_placement((object, &object_def), (target, &target_def)) {
                Ok(()) => allowed.push(ti),
                Err(violation) => rejections.push(violation.to_string()),
            }
        }
        legal.push(allowed);
    }

    // "all ... on the floor" needs a column per object.
    if object_quantifier == Quantifier::All
        && targets.iter().all(ObjectId::is_floor)
        && objects.len() > state.column_count()
    {
        return Err(InterpretError::PhysicallyImpossible {
            explanations: vec![format!(
                "there are only {} column(s) for {} object(s)",
                state.column_count(),
                objects.len()
            )],
        });
    }

    let pair = |oi: usize, ti: usize| {
        Literal::positive(relation, vec![objects[oi].clone(), targets[ti].clone()])
    };

    let conjunctions = match (object_quantifier, location_quantifier) {
        (_, Quantifier::All) => conjoin_all_targets(
            relation,
            object_quantifier,
            objects,
            targets,
            &legal,
            state,
        )?,
        (Quantifier::The | Quantifier::Any, _) => {
            if object_quantifier == Quantifier::The {
                let viable: Vec<usize> = (0..objects.len())
                    .filter(|&oi| !legal[oi].is_empty())
                    .collect();
                if viable.len() > 1 {
                    return Err(InterpretError::AmbiguousCommand {
                        candidates: viable
                            .iter()
                            .map(|&oi| describe_candidate(state, &objects[oi]))
                            .collect(),
                    });
                }
            }
            legal
                .iter()
                .enumerate()
                .flat_map(|(oi, allowed)| {
                    allowed
                        .iter()
                        .map(move |&ti| (oi, ti))
                        .collect::<Vec<_>>()
                })
                .map(|(oi, ti)| Conjunction::new(vec![pair(oi, ti)]))
                .collect()
        }
        (Quantifier::All, _) => {
            assignment_conjunctions(&pair, objects.len(), &legal, objects.len())?
        }
        (Quantifier::Count(n), _) => assignment_conjunctions(&pair, objects.len(), &legal, n)?,
    };

    if conjunctions.is_empty() {
        rejections.dedup();
        if rejections.is_empty() {
            rejections.push("no arrangement of the matching objects satisfies it".to_owned());
        }
        return Err(InterpretError::PhysicallyImpossible {
            explanations: rejections,
        });
    }
    Ok(DnfFormula::new(conjunctions))
}

/// Location quantifier `all`: each chosen object must relate to every
/// target at once.
fn conjoin_all_targets(
    relation: Relation,
    object_quantifier: Quantifier,
    objects: &[ObjectId],
    targets: &[ObjectId],
    legal: &[Vec<usize>],
    state: &WorldState,
) -> Result<Vec<Conjunction>, InterpretError> {
    let fully_legal: Vec<usize> = (0..objects.len())
        .filter(|&oi| legal[oi].len() == targets.len())
        .collect();
    let all_targets = |oi: usize| -> Vec<Literal> {
        targets
            .iter()
            .map(|target| {
                Literal::positive(relation, vec![objects[oi].clone(), target.clone()])
            })
            .collect()
    };

    let conjunctions = match object_quantifier {
        Quantifier::The => {
            if fully_legal.len() > 1 {
                return Err(InterpretError::AmbiguousCommand {
                    candidates: fully_legal
                        .iter()
                        .map(|&oi| describe_candidate(state, &objects[oi]))
                        .collect(),
                });
            }
            fully_legal
                .iter()
                .map(|&oi| Conjunction::new(all_targets(oi)))
                .collect()
        }
        Quantifier::Any => fully_legal
            .iter()
            .map(|&oi| Conjunction::new(all_targets(oi)))
            .collect(),
        Quantifier::All => {
            if fully_legal.len() < objects.len() {
                Vec::new()
            } else {
                vec![Conjunction::new(
                    (0..objects.len()).flat_map(all_targets).collect(),
                )]
            }
        }
        Quantifier::Count(n) => {
            if n == 0 || n > fully_legal.len() {
                Vec::new()
            } else {
                let mut out = Vec::new();
                let mut indices: Vec<usize> = (0..n).collect();
                loop {
                    out.push(Conjunction::new(
                        indices
                            .iter()
                            .flat_map(|&p| all_targets(fully_legal[p]))
                            .collect(),
                    ));
                    if out.len() > MAX_CONJUNCTIONS {
                        return Err(InterpretError::TooManyCombinations {
                            cap: MAX_CONJUNCTIONS,
                        });
                    }
                    if !next_combination(&mut indices, fully_legal.len()) {
                        break;
                    }
                }
                out
            }
        }
    };
    Ok(conjunctions)
}

/// Choose `choose` objects and one legal target for each: one conjunction
/// per complete assignment. Objects with no legal target prune the whole
/// branch before it starts.
fn assignment_conjunctions(
    pair: &impl Fn(usize, usize) -> Literal,
    object_count: usize,
    legal: &[Vec<usize>],
    choose: usize,
) -> Result<Vec<Conjunction>, InterpretError> {
    let mut out = Vec::new();
    if choose == 0 || choose > object_count {
        return Ok(out);
    }
    let viable: Vec<usize> = (0..object_count)
        .filter(|&oi| !legal[oi].is_empty())
        .collect();
    if viable.len() < choose {
        return Ok(out);
    }

    let mut indices: Vec<usize> = (0..choose).collect();
    loop {
        let chosen: Vec<usize> = indices.iter().map(|&p| viable[p]).collect();
        emit_cross_product(pair, legal, &chosen, &mut out)?;
        if !next_combination(&mut indices, viable.len()) {
            break;
        }
    }
    Ok(out)
}

/// Odometer over each chosen object's legal-target list, rightmost fastest.
fn emit_cross_product(
    pair: &impl Fn(usize, usize) -> Literal,
    legal: &[Vec<usize>],
    chosen: &[usize],
    out: &mut Vec<Conjunction>,
) -> Result<(), InterpretError> {
    let mut counters = vec![0usize; chosen.len()];
    loop {
        out.push(Conjunction::new(
            chosen
                .iter()
                .zip(&counters)
                .map(|(&oi, &c)| pair(oi, legal[oi][c]))
                .collect(),
        ));
        if out.len() > MAX_CONJUNCTIONS {
            return Err(InterpretError::TooManyCombinations {
                cap: MAX_CONJUNCTIONS,
            });
        }
        let mut depth = chosen.len();
        loop {
            depth -= 1;
            counters[depth] += 1;
            if counters[depth] < legal[chosen[depth]].len() {
                break;
            }
            counters[depth] = 0;
            if depth == 0 {
                return Ok(());
            }
        }
    }
}

/// Lexicographic successor of a k-combination drawn from `0..pool`.
fn next_combination(indices: &mut [usize], pool: usize) -> bool {
    let k = indices.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if indices[i] < pool - k + i {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

fn describe_candidate(state: &WorldState, id: &ObjectId) -> String {
    state
        .definition(id)
        .map_or_else(|| id.to_string(), |def| format!("the {def}"))
}
