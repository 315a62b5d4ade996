//! Parse-tree shapes consumed from the external surface grammar.
//!
//! The parser owns tokenization and grammar; this crate receives its output
//! as read-only trees. The serde shapes mirror the parser's JSON: verbs and
//! quantifiers as lowercase tags, forms as plain strings with `"anyform"`
//! for the wildcard and `"one"` for anaphora.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use gantry_kernel::object::{Form, Size};
use gantry_kernel::relation::Relation;

/// One candidate reading of an utterance: a command to execute or a question
/// to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseTree {
    Command(Command),
    Question(Question),
}

/// An imperative command.
///
/// `take` lifts an object, `move` relocates an object to a location, and
/// `put` places the already-held object at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verb", rename_all = "lowercase")]
pub enum Command {
    Take { entity: Entity },
    Move { entity: Entity, location: Location },
    Put { location: Location },
}

/// A quantified object description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub quantifier: Quantifier,
    pub object: ObjectSpec,
}

/// The determiner of an [`Entity`].
///
/// `a`/`an`/`one` parse as `Any`; `two` and `three` as `Count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    The,
    Any,
    All,
    Count(usize),
}

/// An object description, optionally qualified by a relative clause
/// ("the ball *in the box on the table*").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectSpec {
    Qualified {
        object: Box<ObjectSpec>,
        location: Box<Location>,
    },
    Simple {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Size>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(default)]
        form: FormPattern,
    },
}

impl ObjectSpec {
    /// A bare form with no size or color filter.
    #[must_use]
    pub fn form(form: Form) -> Self {
        Self::Simple {
            size: None,
            color: None,
            form: FormPattern::Named(form),
        }
    }
}

/// The form slot of a simple description.
///
/// `Any` matches every form (the grammar's `"anyform"` or an absent slot),
/// `Anaphoric` is the placeholder `"one"`/`"it"` resolved against
/// previously-seen objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPattern {
    #[default]
    Any,
    Named(Form),
    Anaphoric,
}

impl Serialize for FormPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("anyform"),
            Self::Anaphoric => serializer.serialize_str("one"),
            Self::Named(form) => form.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FormPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let word = String::deserialize(deserializer)?;
        Ok(match word.as_str() {
            "anyform" => Self::Any,
            "one" | "it" => Self::Anaphoric,
            other => Self::Named(Form::deserialize(other.into_deserializer())?),
        })
    }
}

/// A location: a relation to a quantified entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub relation: Relation,
    pub entity: Entity,
}

/// A question about the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub word: QuestionWord,
    pub entity: Entity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionWord {
    WhereIs,
    HowMany,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_move_command_round_trips() {
        let json = r#"{
            "command": {
                "verb": "move",
                "entity": {
                    "quantifier": "the",
                    "object": { "size": "small", "color": "red", "form": "brick" }
                },
                "location": {
                    "relation": "ontop",
                    "entity": {
                        "quantifier": "the",
                        "object": { "color": "white", "form": "brick" }
                    }
                }
            }
        }"#;
        let parse: ParseTree = serde_json::from_str(json).unwrap();
        let ParseTree::Command(Command::Move { entity, location }) = &parse else {
            panic!("expected a move command, got {parse:?}");
        };
        assert_eq!(entity.quantifier, Quantifier::The);
        assert_eq!(location.relation, Relation::OnTop);

        let back: ParseTree = serde_json::from_str(&serde_json::to_string(&parse).unwrap()).unwrap();
        assert_eq!(back, parse);
    }

    #[test]
    fn quantifier_counts_are_tagged() {
        assert_eq!(
            serde_json::to_string(&Quantifier::All).unwrap(),
            "\"all\""
        );
        let two: Quantifier = serde_json::from_str("{\"count\":2}").unwrap();
        assert_eq!(two, Quantifier::Count(2));
    }

    #[test]
    fn form_patterns_read_as_plain_words() {
        let any: FormPattern = serde_json::from_str("\"anyform\"").unwrap();
        assert_eq!(any, FormPattern::Any);
        let it: FormPattern = serde_json::from_str("\"it\"").unwrap();
        assert_eq!(it, FormPattern::Anaphoric);
        let ball: FormPattern = serde_json::from_str("\"ball\"").unwrap();
        assert_eq!(ball, FormPattern::Named(Form::Ball));
        assert!(serde_json::from_str::<FormPattern>("\"cone\"").is_err());
    }

    #[test]
    fn qualified_specs_deserialize_before_simple_ones() {
        let json = r#"{
            "object": { "form": "ball" },
            "location": {
                "relation": "inside",
                "entity": { "quantifier": "any", "object": { "form": "box" } }
            }
        }"#;
        let spec: ObjectSpec = serde_json::from_str(json).unwrap();
        assert!(matches!(spec, ObjectSpec::Qualified { .. }));
    }

    #[test]
    fn absent_slots_default_to_wildcards() {
        let spec: ObjectSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(
            spec,
            ObjectSpec::Simple {
                size: None,
                color: None,
                form: FormPattern::Any,
            }
        );
    }

    #[test]
    fn questions_round_trip() {
        let json = r#"{
            "question": {
                "word": "where_is",
                "entity": { "quantifier": "the", "object": { "form": "ball" } }
            }
        }"#;
        let parse: ParseTree = serde_json::from_str(json).unwrap();
        assert!(matches!(
            parse,
            ParseTree::Question(Question {
                word: QuestionWord::WhereIs,
                ..
            })
        ));
    }
}
