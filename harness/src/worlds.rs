//! World snapshots and the embedded example worlds.
//!
//! A snapshot mirrors the shape the external world module hands over:
//! stacks of ids, an optional held id, the arm column, and the object
//! catalog. Converting a snapshot into a [`WorldState`] runs the full
//! placement validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gantry_kernel::error::WorldError;
use gantry_kernel::object::{ObjectDefinition, ObjectId};
use gantry_kernel::state::WorldState;

/// The raw, unvalidated shape of a world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub stacks: Vec<Vec<ObjectId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding: Option<ObjectId>,
    pub arm: usize,
    pub objects: BTreeMap<ObjectId, ObjectDefinition>,
}

impl WorldSnapshot {
    /// Validate the snapshot into a state.
    ///
    /// # Errors
    ///
    /// A [`WorldError`] naming the violated placement invariant.
    pub fn into_state(self) -> Result<WorldState, WorldError> {
        WorldState::new(self.stacks, self.holding, self.arm, self.objects)
    }
}

/// Why a world definition could not be loaded.
#[derive(Debug, Error)]
pub enum WorldLoadError {
    #[error("malformed world snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] WorldError),
}

/// Parse and validate a JSON world snapshot.
///
/// # Errors
///
/// [`WorldLoadError`] on malformed JSON or an invalid placement.
pub fn load(json: &str) -> Result<WorldState, WorldLoadError> {
    let snapshot: WorldSnapshot = serde_json::from_str(json)?;
    Ok(snapshot.into_state()?)
}

/// Two small bricks on two columns; the smallest interesting world.
pub const TEST_WORLD: &str = r#"{
    "stacks": [["a"], ["b"]],
    "arm": 0,
    "objects": {
        "a": { "form": "brick", "size": "small", "color": "red" },
        "b": { "form": "brick", "size": "small", "color": "white" }
    }
}"#;

/// Five columns with balls, boxes and a table; the standard demo world.
pub const SMALL_WORLD: &str = r#"{
    "stacks": [["e"], ["g", "l"], [], ["k", "m"], ["f"]],
    "arm": 0,
    "objects": {
        "e": { "form": "ball", "size": "large", "color": "white" },
        "g": { "form": "table", "size": "large", "color": "blue" },
        "l": { "form": "box", "size": "large", "color": "red" },
        "k": { "form": "box", "size": "large", "color": "yellow" },
        "m": { "form": "box", "size": "small", "color": "blue" },
        "f": { "form": "ball", "size": "small", "color": "black" }
    }
}"#;

/// The test world, validated.
///
/// # Errors
///
/// Never fails in practice; the embedded JSON is covered by tests.
pub fn test_world() -> Result<WorldState, WorldLoadError> {
    load(TEST_WORLD)
}

/// The small demo world, validated.
///
/// # Errors
///
/// Never fails in practice; the embedded JSON is covered by tests.
pub fn small_world() -> Result<WorldState, WorldLoadError> {
    load(SMALL_WORLD)
}
