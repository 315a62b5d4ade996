//! Gantry Planner: goal formulas to arm-action sequences.
//!
//! # API Surface
//!
//! - [`transition`] -- the blocks world as a searchable graph: four unit-cost
//!   arm actions per state, with physical legality screened at the drop
//! - [`heuristic`] -- the admissible goal-distance estimate driving the
//!   search
//! - [`plan`] -- the glue: evaluate a [`gantry_kernel::goal::DnfFormula`] as
//!   the goal predicate, invoke the search engine, and read the action
//!   sequence off the returned path
//!
//! # Module Dependency Direction
//!
//! `transition` ← `heuristic` ← `plan`
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod heuristic;
pub mod plan;
pub mod transition;
