//! Cross-cutting properties checked over the embedded worlds.

use gantry_harness::worlds::small_world;
use gantry_interp::goal::compile_command;
use gantry_interp::parse::Command;
use gantry_interp::resolve::Context;
use gantry_kernel::object::ObjectId;
use gantry_kernel::relation::Relation;

fn command(json: &str) -> Command {
    serde_json::from_str(json).expect("well-formed command JSON")
}

#[test]
fn lateral_and_vertical_relations_are_mirror_images() {
    let state = small_world().unwrap();
    let ids: Vec<ObjectId> = state.known_ids().cloned().collect();
    for a in &ids {
        for b in &ids {
            let ab = [a.clone(), b.clone()];
            let ba = [b.clone(), a.clone()];
            assert_eq!(
                Relation::LeftOf.holds(&state, &ab),
                Relation::RightOf.holds(&state, &ba),
                "leftof({a},{b}) vs rightof({b},{a})"
            );
            assert_eq!(
                Relation::Under.holds(&state, &ab),
                Relation::Above.holds(&state, &ba),
                "under({a},{b}) vs above({b},{a})"
            );
        }
    }
}

#[test]
fn no_compiled_literal_relates_an_object_to_itself() {
    let state = small_world().unwrap();
    let commands = [
        r#"{
            "verb": "move",
            "entity": { "quantifier": "any", "object": { "form": "ball" } },
            "location": {
                "relation": "beside",
                "entity": { "quantifier": "any", "object": { "form": "ball" } }
            }
        }"#,
        r#"{
            "verb": "move",
            "entity": { "quantifier": "all", "object": { "form": "box" } },
            "location": {
                "relation": "ontop",
                "entity": { "quantifier": "the", "object": { "form": "floor" } }
            }
        }"#,
        r#"{
            "verb": "move",
            "entity": { "quantifier": { "count": 2 }, "object": { "form": "box" } },
            "location": {
                "relation": "leftof",
                "entity": { "quantifier": "any", "object": { "form": "box" } }
            }
        }"#,
    ];
    for json in commands {
        let formula = compile_command(&command(json), &state, &Context::new()).unwrap();
        for conjunction in formula.conjunctions() {
            for literal in conjunction.literals() {
                if literal.args.len() == 2 {
                    assert_ne!(
                        literal.args[0], literal.args[1],
                        "self-relating literal {literal} in {formula}"
                    );
                }
            }
        }
    }
}

#[test]
fn goal_evaluation_is_idempotent() {
    let state = small_world().unwrap();
    let formula = compile_command(
        &command(
            r#"{
                "verb": "move",
                "entity": { "quantifier": "any", "object": { "form": "ball" } },
                "location": {
                    "relation": "inside",
                    "entity": { "quantifier": "any", "object": { "form": "box" } }
                }
            }"#,
        ),
        &state,
        &Context::new(),
    )
    .unwrap();
    let first = formula.satisfied_by(&state);
    let second = formula.satisfied_by(&state);
    assert_eq!(first, second);
    assert!(!first, "no ball starts inside a box in the small world");
}
