//! Gantry Search: a reusable best-first (A*) search engine.
//!
//! The engine is generic over the node type: callers supply a
//! [`graph::TransitionSystem`] for successor enumeration, a goal predicate,
//! a heuristic, and a wall-clock timeout. Heuristic admissibility is the
//! caller's responsibility; the engine performs no consistency checks.
//!
//! This crate depends on no other gantry crate.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod astar;
pub mod error;
pub mod frontier;
pub mod graph;
