//! Prose renderings of parse trees.
//!
//! Error messages echo the user's own words back ("found nothing matching
//! \"small red ball inside a box\""), so the renderings follow the surface
//! grammar rather than debug formatting.

use gantry_kernel::relation::Relation;

use crate::parse::{Entity, FormPattern, ObjectSpec, Quantifier};

/// The English phrase for a relation in location position.
#[must_use]
pub fn relation_phrase(relation: Relation) -> &'static str {
    match relation {
        Relation::OnTop => "on top of",
        Relation::Inside => "inside",
        Relation::Above => "above",
        Relation::Under => "under",
        Relation::Beside => "beside",
        Relation::LeftOf => "left of",
        Relation::RightOf => "right of",
        Relation::Holding => "held",
    }
}

fn quantifier_word(quantifier: Quantifier) -> String {
    match quantifier {
        Quantifier::The => "the".to_owned(),
        Quantifier::Any => "a".to_owned(),
        Quantifier::All => "all".to_owned(),
        Quantifier::Count(2) => "two".to_owned(),
        Quantifier::Count(3) => "three".to_owned(),
        Quantifier::Count(n) => n.to_string(),
    }
}

/// Render a description the way the user said it: "small red ball",
/// "object", "ball inside a box".
#[must_use]
pub fn describe_spec(spec: &ObjectSpec) -> String {
    match spec {
        ObjectSpec::Simple { size, color, form } => {
            let mut words: Vec<String> = Vec::new();
            if let Some(size) = size {
                words.push(size.to_string());
            }
            if let Some(color) = color {
                words.push(color.clone());
            }
            words.push(match form {
                FormPattern::Any => "object".to_owned(),
                FormPattern::Anaphoric => "one".to_owned(),
                FormPattern::Named(form) => form.to_string(),
            });
            words.join(" ")
        }
        ObjectSpec::Qualified { object, location } => format!(
            "{} {} {}",
            describe_spec(object),
            relation_phrase(location.relation),
            describe_entity(&location.entity),
        ),
    }
}

/// Render an entity with its determiner: "the small red ball", "two bricks".
#[must_use]
pub fn describe_entity(entity: &Entity) -> String {
    format!(
        "{} {}",
        quantifier_word(entity.quantifier),
        describe_spec(&entity.object)
    )
}
