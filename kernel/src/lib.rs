//! Gantry Kernel: the blocks-world vocabulary shared by every other crate.
//!
//! # API Surface
//!
//! - [`object`] -- object descriptions ([`object::ObjectDefinition`]) and
//!   identifiers ([`object::ObjectId`]), including the floor pseudo-object
//! - [`state`] -- the persistent [`state::WorldState`] value and its
//!   positional queries and transitions
//! - [`relation`] -- the [`relation::Relation`] vocabulary with per-relation
//!   physical-law checks and concrete-state evaluators
//! - [`distance`] -- per-relation admissible action-count estimators
//! - [`goal`] -- [`goal::Literal`], [`goal::Conjunction`] and
//!   [`goal::DnfFormula`], the goal-formula vocabulary
//!
//! # Module Dependency Direction
//!
//! `object` ← `state` ← `relation` ← (`distance`, `goal`)
//!
//! One-way only. No cycles. The kernel depends on no other gantry crate.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod distance;
pub mod error;
pub mod goal;
pub mod object;
pub mod relation;
pub mod state;
