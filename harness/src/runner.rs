//! One utterance end to end: candidate parses in, plans or an answer out.

use thiserror::Error;
use tracing::debug;

use gantry_interp::error::InterpretError;
use gantry_interp::interpret::interpret;
use gantry_interp::parse::{Command, ParseTree, Question};
use gantry_interp::resolve::Context;
use gantry_kernel::state::WorldState;
use gantry_planner::error::PlanError;
use gantry_planner::plan::{plan, PlanResult, PlannerPolicy};

use crate::answer::answer_question;

/// What the system says back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// One planned result per command reading that survived, in parse order.
    Plans(Vec<PlanResult>),
    /// The answer to a question.
    Answer(String),
}

/// Why an utterance produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Interpret(#[from] InterpretError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// The parser produced no readings at all.
    #[error("I do not understand")]
    NoParses,
}

/// Process every candidate reading of one utterance.
///
/// Command readings take precedence: they are interpreted together (so one
/// bad reading never sinks the others) and planned together. An utterance
/// with only question readings is answered from the first one.
///
/// # Errors
///
/// The first collected failure, only when every reading failed.
pub fn process(
    parses: &[ParseTree],
    state: &WorldState,
    policy: &PlannerPolicy,
) -> Result<Response, ProcessError> {
    let mut commands: Vec<Command> = Vec::new();
    let mut question: Option<&Question> = None;
    for parse in parses {
        match parse {
            ParseTree::Command(command) => commands.push(command.clone()),
            ParseTree::Question(q) => {
                if question.is_none() {
                    question = Some(q);
                }
            }
        }
    }

    if !commands.is_empty() {
        let interpretations = interpret(&commands, state, &Context::new())?;
        debug!(readings = interpretations.len(), "interpreted");
        let plans = plan(&interpretations, state, policy)?;
        return Ok(Response::Plans(plans));
    }
    if let Some(question) = question {
        let answer = answer_question(question, state, &Context::new())?;
        return Ok(Response::Answer(answer));
    }
    Err(ProcessError::NoParses)
}

#[cfg(test)]
mod tests {
    use super::*;

    use gantry_interp::parse::{Entity, ObjectSpec, Quantifier, QuestionWord};
    use gantry_kernel::object::Form;

    use crate::worlds::test_world;

    #[test]
    fn an_empty_parse_list_is_not_understood() {
        let state = test_world().unwrap();
        assert_eq!(
            process(&[], &state, &PlannerPolicy::default()),
            Err(ProcessError::NoParses)
        );
    }

    #[test]
    fn a_question_reading_is_answered() {
        let state = test_world().unwrap();
        let parses = vec![ParseTree::Question(Question {
            word: QuestionWord::HowMany,
            entity: Entity {
                quantifier: Quantifier::All,
                object: ObjectSpec::form(Form::Brick),
            },
        })];
        let response = process(&parses, &state, &PlannerPolicy::default()).unwrap();
        assert_eq!(response, Response::Answer("There are 2 of them.".to_owned()));
    }
}
