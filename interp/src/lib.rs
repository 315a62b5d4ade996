//! Gantry Interp: from parse trees to goal formulas.
//!
//! # API Surface
//!
//! - [`parse`] -- the parse-tree shapes handed over by the external surface
//!   grammar ([`parse::ParseTree`], [`parse::Command`], [`parse::Entity`])
//! - [`describe`] -- prose renderings of parse trees for error messages
//! - [`resolve`] -- the entity resolver: descriptions to matching object ids,
//!   with anaphora tracked through [`resolve::Context`]
//! - [`goal`] -- the goal compiler: resolved sets + relation + quantifier to
//!   a [`gantry_kernel::goal::DnfFormula`]
//! - [`interpret`] -- the per-parse driver collecting failures so one bad
//!   parse never sinks its siblings
//!
//! # Module Dependency Direction
//!
//! `parse` ← `describe` ← `resolve` ← `goal` ← `interpret`
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod describe;
pub mod error;
pub mod goal;
pub mod interpret;
pub mod parse;
pub mod resolve;
