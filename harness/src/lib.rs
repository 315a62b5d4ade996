//! Gantry Harness: example worlds and the interpret-then-plan runner.
//!
//! # API Surface
//!
//! - [`worlds`] -- serde world snapshots and the embedded example worlds
//! - [`runner`] -- one utterance end to end: candidate parses in, plans or
//!   an answer out
//! - [`answer`] -- prose answers for "where is" and "how many" questions
//!
//! The external surface grammar and any rendering stay outside; this crate
//! starts at parse trees and stops at text.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod answer;
pub mod runner;
pub mod worlds;
