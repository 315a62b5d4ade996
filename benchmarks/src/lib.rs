//! Shared fixtures for the gantry benchmarks.
//!
//! Panics here are fine: benchmarks run against the embedded example worlds
//! and hand-written parse JSON, both covered by the harness tests.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use gantry_harness::worlds::{load, SMALL_WORLD, TEST_WORLD};
use gantry_interp::parse::Command;
use gantry_kernel::state::WorldState;

#[must_use]
pub fn small_world() -> WorldState {
    load(SMALL_WORLD).expect("embedded world validates")
}

#[must_use]
pub fn test_world() -> WorldState {
    load(TEST_WORLD).expect("embedded world validates")
}

#[must_use]
pub fn command(json: &str) -> Command {
    serde_json::from_str(json).expect("well-formed command JSON")
}
