use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gantry_benchmarks::{command, small_world, test_world};
use gantry_interp::goal::compile_command;
use gantry_interp::resolve::Context;
use gantry_planner::plan::{plan_formula, PlannerPolicy};

// ---------------------------------------------------------------------------
// Interpretation: resolution + goal compilation
// ---------------------------------------------------------------------------

fn bench_interpret(c: &mut Criterion) {
    let state = small_world();
    let simple = command(
        r#"{
            "verb": "take",
            "entity": { "quantifier": "the", "object": { "color": "black", "form": "ball" } }
        }"#,
    );
    let combinatorial = command(
        r#"{
            "verb": "move",
            "entity": { "quantifier": "all", "object": { "form": "box" } },
            "location": {
                "relation": "ontop",
                "entity": { "quantifier": "the", "object": { "form": "floor" } }
            }
        }"#,
    );

    let mut group = c.benchmark_group("interpret");
    group.bench_function("take_the_black_ball", |b| {
        b.iter(|| {
            black_box(compile_command(
                black_box(&simple),
                &state,
                &Context::new(),
            ))
        });
    });
    group.bench_function("all_boxes_on_the_floor", |b| {
        b.iter(|| {
            black_box(compile_command(
                black_box(&combinatorial),
                &state,
                &Context::new(),
            ))
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Planning: A* over the world graph
// ---------------------------------------------------------------------------

fn bench_plan(c: &mut Criterion) {
    let ctx = Context::new();
    let policy = PlannerPolicy::default();

    let test = test_world();
    let shallow = compile_command(
        &command(
            r#"{
                "verb": "move",
                "entity": { "quantifier": "the", "object": { "color": "red", "form": "brick" } },
                "location": {
                    "relation": "ontop",
                    "entity": { "quantifier": "the", "object": { "color": "white", "form": "brick" } }
                }
            }"#,
        ),
        &test,
        &ctx,
    )
    .expect("compiles");

    let small = small_world();
    let deep = compile_command(
        &command(
            r#"{
                "verb": "move",
                "entity": { "quantifier": "the", "object": { "color": "black", "form": "ball" } },
                "location": {
                    "relation": "inside",
                    "entity": { "quantifier": "the", "object": { "size": "large", "color": "red", "form": "box" } }
                }
            }"#,
        ),
        &small,
        &ctx,
    )
    .expect("compiles");

    let mut group = c.benchmark_group("plan");
    group.bench_function("three_step_stack", |b| {
        b.iter(|| black_box(plan_formula(black_box(&shallow), &test, &policy)));
    });
    group.bench_function("ball_across_the_world", |b| {
        b.iter(|| black_box(plan_formula(black_box(&deep), &small, &policy)));
    });
    group.finish();
}

criterion_group!(benches, bench_interpret, bench_plan);
criterion_main!(benches);
