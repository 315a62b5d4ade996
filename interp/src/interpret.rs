//! The per-parse interpretation driver.
//!
//! An ambiguous utterance arrives as several candidate parses. Each is
//! interpreted independently; failures are collected, and only when every
//! parse fails is the first failure surfaced.

use tracing::debug;

use gantry_kernel::goal::DnfFormula;
use gantry_kernel::object::ObjectId;
use gantry_kernel::state::WorldState;

use crate::error::InterpretError;
use crate::goal::compile_command;
use crate::parse::{Command, Question, QuestionWord};
use crate::resolve::{resolve_entity, Context};

/// One successful interpretation: the index of its parse and the compiled
/// goal formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub parse: usize,
    pub formula: DnfFormula,
}

/// Interpret every candidate command parse against the world.
///
/// Returns one [`Interpretation`] per parse that compiled. An empty input
/// yields an empty output.
///
/// # Errors
///
/// The first per-parse [`InterpretError`], only when every parse failed.
pub fn interpret(
    parses: &[Command],
    state: &WorldState,
    ctx: &Context,
) -> Result<Vec<Interpretation>, InterpretError> {
    let mut results = Vec::new();
    let mut first_error: Option<InterpretError> = None;
    for (index, command) in parses.iter().enumerate() {
        match compile_command(command, state, ctx) {
            Ok(formula) => results.push(Interpretation {
                parse: index,
                formula,
            }),
            Err(error) => {
                debug!(parse = index, %error, "parse rejected");
                first_error.get_or_insert(error);
            }
        }
    }
    match first_error {
        Some(error) if results.is_empty() => Err(error),
        _ => Ok(results),
    }
}

/// The resolved meaning of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionInterpretation {
    /// "where is ...": the single object asked about.
    WhereIs { id: ObjectId },
    /// "how many ...": every matching object.
    HowMany { ids: Vec<ObjectId> },
}

/// Resolve a question's entity against the world.
///
/// # Errors
///
/// [`InterpretError::NoMatchingObject`] when nothing matches, and
/// [`InterpretError::AmbiguousCommand`] for a `the`-quantified "where is"
/// that fits several objects.
pub fn interpret_question(
    question: &Question,
    state: &WorldState,
    ctx: &Context,
) -> Result<QuestionInterpretation, InterpretError> {
    let resolution = resolve_entity(&question.entity, state, ctx)?;
    match question.word {
        QuestionWord::HowMany => Ok(QuestionInterpretation::HowMany {
            ids: resolution.ids(),
        }),
        QuestionWord::WhereIs => {
            let mut ids = resolution.ids();
            if ids.len() > 1 {
                if question.entity.quantifier == crate::parse::Quantifier::The {
                    return Err(InterpretError::AmbiguousCommand {
                        candidates: ids.iter().map(ToString::to_string).collect(),
                    });
                }
                ids.truncate(1);
            }
            match ids.pop() {
                Some(id) => Ok(QuestionInterpretation::WhereIs { id }),
                None => Err(InterpretError::NoMatchingObject {
                    description: crate::describe::describe_entity(&question.entity),
                }),
            }
        }
    }
}
