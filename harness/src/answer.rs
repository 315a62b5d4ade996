//! Prose answers to questions about the world.

use gantry_interp::error::InterpretError;
use gantry_interp::interpret::{interpret_question, QuestionInterpretation};
use gantry_interp::parse::Question;
use gantry_interp::resolve::Context;
use gantry_kernel::object::{Form, ObjectId};
use gantry_kernel::state::WorldState;

/// Answer a "where is" or "how many" question in a full sentence.
///
/// # Errors
///
/// Any [`InterpretError`] from resolving the question's entity.
pub fn answer_question(
    question: &Question,
    state: &WorldState,
    ctx: &Context,
) -> Result<String, InterpretError> {
    match interpret_question(question, state, ctx)? {
        QuestionInterpretation::HowMany { ids } => Ok(match ids.len() {
            1 => "There is one of them.".to_owned(),
            n => format!("There are {n} of them."),
        }),
        QuestionInterpretation::WhereIs { id } => Ok(locate(state, &id)),
    }
}

/// "The small black ball is on the floor." and friends.
fn locate(state: &WorldState, id: &ObjectId) -> String {
    let name = state
        .definition(id)
        .map_or_else(|| id.to_string(), |def| format!("the {def}"));

    if state.holding() == Some(id) {
        return format!("The arm is holding {name}.");
    }
    let support = state
        .height_of(id)
        .filter(|height| *height > 0)
        .zip(state.column_of(id))
        .map(|(height, column)| state.stack(column)[height - 1].clone());
    match support {
        None => format!("{} is on the floor.", capitalize(&name)),
        Some(below) => {
            let below_name = state
                .definition(&below)
                .map_or_else(|| below.to_string(), |def| format!("the {def}"));
            let preposition = match state.definition(&below).map(|def| def.form) {
                Some(Form::Box) => "inside",
                _ => "on top of",
            };
            format!("{} is {preposition} {below_name}.", capitalize(&name))
        }
    }
}

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
