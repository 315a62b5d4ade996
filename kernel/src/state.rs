//! The persistent world state value and its positional queries.
//!
//! A `WorldState` is never mutated in place. Every transition returns a new
//! value that shares the untouched columns and the object catalog with its
//! parent, so search nodes reachable from one another never alias mutable
//! data.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::WorldError;
use crate::object::{ObjectDefinition, ObjectId};

/// A snapshot of the blocks world: stacks of object ids, an optional held
/// object, and the arm's column.
///
/// Equality and hashing cover `(stacks, holding, arm)` only -- two states are
/// the same search node exactly when the same ids sit in the same slots. The
/// catalog is shared descriptive data and takes no part in identity.
#[derive(Debug, Clone)]
pub struct WorldState {
    stacks: Vec<Arc<Vec<ObjectId>>>,
    holding: Option<ObjectId>,
    arm: usize,
    objects: Arc<BTreeMap<ObjectId, ObjectDefinition>>,
}

impl WorldState {
    /// Build a state from raw parts, validating the placement invariants:
    /// every catalog id sits in exactly one stack slot or the arm, no id is
    /// placed twice, nothing placed is uncataloged, and the arm column is in
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] naming the first violated invariant.
    pub fn new(
        stacks: Vec<Vec<ObjectId>>,
        holding: Option<ObjectId>,
        arm: usize,
        objects: BTreeMap<ObjectId, ObjectDefinition>,
    ) -> Result<Self, WorldError> {
        if arm >= stacks.len() {
            return Err(WorldError::ArmOutOfBounds {
                arm,
                columns: stacks.len(),
            });
        }
        if let Some(id) = objects.keys().find(|id| id.is_floor()) {
            return Err(WorldError::ReservedId { id: id.clone() });
        }

        let mut placed = BTreeSet::new();
        let all = stacks
            .iter()
            .flat_map(|stack| stack.iter())
            .chain(holding.iter());
        for id in all {
            if id.is_floor() {
                return Err(WorldError::ReservedId { id: id.clone() });
            }
            if !objects.contains_key(id) {
                return Err(WorldError::UnknownObject { id: id.clone() });
            }
            if !placed.insert(id.clone()) {
                return Err(WorldError::DuplicatePlacement { id: id.clone() });
            }
        }
        if let Some(id) = objects.keys().find(|id| !placed.contains(*id)) {
            return Err(WorldError::UnplacedObject { id: id.clone() });
        }

        Ok(Self {
            stacks: stacks.into_iter().map(Arc::new).collect(),
            holding,
            arm,
            objects: Arc::new(objects),
        })
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.stacks.len()
    }

    #[must_use]
    pub fn stack(&self, column: usize) -> &[ObjectId] {
        &self.stacks[column]
    }

    #[must_use]
    pub fn holding(&self) -> Option<&ObjectId> {
        self.holding.as_ref()
    }

    #[must_use]
    pub fn arm(&self) -> usize {
        self.arm
    }

    /// The definition of `id`, or the floor pseudo-object for the sentinel.
    #[must_use]
    pub fn definition(&self, id: &ObjectId) -> Option<ObjectDefinition> {
        if id.is_floor() {
            Some(ObjectDefinition::floor())
        } else {
            self.objects.get(id).cloned()
        }
    }

    /// The zero-based column `id` sits in, or `None` if it is held or absent.
    #[must_use]
    pub fn column_of(&self, id: &ObjectId) -> Option<usize> {
        self.stacks
            .iter()
            .position(|stack| stack.iter().any(|o| o == id))
    }

    /// The zero-based position of `id` counted from the floor, or `None` if
    /// it is held or absent.
    #[must_use]
    pub fn height_of(&self, id: &ObjectId) -> Option<usize> {
        let column = self.column_of(id)?;
        self.stacks[column].iter().position(|o| o == id)
    }

    /// The topmost object of a column.
    #[must_use]
    pub fn top_of(&self, column: usize) -> Option<&ObjectId> {
        self.stacks.get(column).and_then(|stack| stack.last())
    }

    /// How many objects sit above `id` in its stack. Held or absent ids have
    /// no blockers.
    #[must_use]
    pub fn blockers_above(&self, id: &ObjectId) -> usize {
        match (self.column_of(id), self.height_of(id)) {
            (Some(column), Some(height)) => self.stacks[column].len() - height - 1,
            _ => 0,
        }
    }

    /// All placed and held ids, scanned left-to-right, bottom-to-top, with
    /// the held object last. This is the candidate order the resolver uses.
    pub fn known_ids(&self) -> impl Iterator<Item = &ObjectId> + '_ {
        self.stacks
            .iter()
            .flat_map(|stack| stack.iter())
            .chain(self.holding.iter())
    }

    /// A copy of this state with the arm over `column`.
    ///
    /// `None` if `column` is out of bounds.
    #[must_use]
    pub fn with_arm(&self, column: usize) -> Option<Self> {
        if column >= self.stacks.len() {
            return None;
        }
        let mut next = self.clone();
        next.arm = column;
        Some(next)
    }

    /// A copy of this state where the arm has picked up the top object of
    /// its column.
    ///
    /// `None` if the arm is full or the column is empty. Only the touched
    /// column is copied; every other column is shared with `self`.
    #[must_use]
    pub fn pick_up(&self) -> Option<Self> {
        if self.holding.is_some() {
            return None;
        }
        let (top, rest) = self.stacks[self.arm].split_last()?;
        let mut stacks = self.stacks.clone();
        stacks[self.arm] = Arc::new(rest.to_vec());
        Some(Self {
            stacks,
            holding: Some(top.clone()),
            arm: self.arm,
            objects: Arc::clone(&self.objects),
        })
    }

    /// A copy of this state where the held object has been dropped onto the
    /// arm's column.
    ///
    /// `None` if nothing is held. Physical legality is the caller's concern;
    /// this is geometry only.
    #[must_use]
    pub fn put_down(&self) -> Option<Self> {
        let held = self.holding.clone()?;
        let mut column = (*self.stacks[self.arm]).clone();
        column.push(held);
        let mut stacks = self.stacks.clone();
        stacks[self.arm] = Arc::new(column);
        Some(Self {
            stacks,
            holding: None,
            arm: self.arm,
            objects: Arc::clone(&self.objects),
        })
    }
}

impl PartialEq for WorldState {
    fn eq(&self, other: &Self) -> bool {
        self.arm == other.arm && self.holding == other.holding && self.stacks == other.stacks
    }
}

impl Eq for WorldState {}

impl Hash for WorldState {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.arm.hash(hasher);
        self.holding.hash(hasher);
        self.stacks.hash(hasher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Form, Size};

    fn catalog(ids: &[(&str, Size, &str, Form)]) -> BTreeMap<ObjectId, ObjectDefinition> {
        ids.iter()
            .map(|(id, size, color, form)| {
                (ObjectId::new(id), ObjectDefinition::new(*size, color, *form))
            })
            .collect()
    }

    fn two_brick_world() -> WorldState {
        WorldState::new(
            vec![vec![ObjectId::new("a")], vec![ObjectId::new("b")]],
            None,
            0,
            catalog(&[
                ("a", Size::Small, "red", Form::Brick),
                ("b", Size::Small, "white", Form::Brick),
            ]),
        )
        .unwrap()
    }

    #[test]
    fn construction_rejects_duplicate_placement() {
        let err = WorldState::new(
            vec![vec![ObjectId::new("a")], vec![ObjectId::new("a")]],
            None,
            0,
            catalog(&[("a", Size::Small, "red", Form::Brick)]),
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::DuplicatePlacement { .. }));
    }

    #[test]
    fn construction_rejects_unplaced_catalog_entry() {
        let err = WorldState::new(
            vec![vec![ObjectId::new("a")], vec![]],
            None,
            0,
            catalog(&[
                ("a", Size::Small, "red", Form::Brick),
                ("b", Size::Small, "white", Form::Brick),
            ]),
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::UnplacedObject { .. }));
    }

    #[test]
    fn construction_rejects_out_of_bounds_arm() {
        let err = WorldState::new(vec![vec![]], None, 3, BTreeMap::new()).unwrap_err();
        assert!(matches!(err, WorldError::ArmOutOfBounds { arm: 3, columns: 1 }));
    }

    #[test]
    fn construction_rejects_floor_in_catalog() {
        let err = WorldState::new(
            vec![vec![]],
            None,
            0,
            catalog(&[("floor", Size::Large, "grey", Form::Brick)]),
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::ReservedId { .. }));
    }

    #[test]
    fn positional_queries() {
        let state = two_brick_world();
        let a = ObjectId::new("a");
        let b = ObjectId::new("b");
        assert_eq!(state.column_of(&a), Some(0));
        assert_eq!(state.column_of(&b), Some(1));
        assert_eq!(state.height_of(&a), Some(0));
        assert_eq!(state.blockers_above(&a), 0);
        assert_eq!(state.top_of(1), Some(&b));
    }

    #[test]
    fn pick_up_and_put_down_round_trip() {
        let state = two_brick_world();
        let lifted = state.pick_up().unwrap();
        assert_eq!(lifted.holding(), Some(&ObjectId::new("a")));
        assert!(lifted.stack(0).is_empty());
        // Second pick with a full arm is illegal.
        assert!(lifted.pick_up().is_none());

        let dropped = lifted.put_down().unwrap();
        assert_eq!(dropped, state);
    }

    #[test]
    fn transitions_share_untouched_columns() {
        let state = two_brick_world();
        let lifted = state.pick_up().unwrap();
        // Column 1 was not touched; both states point at the same storage.
        assert!(Arc::ptr_eq(&state.stacks[1], &lifted.stacks[1]));
        assert!(!Arc::ptr_eq(&state.stacks[0], &lifted.stacks[0]));
    }

    #[test]
    fn equality_ignores_the_shared_catalog_but_not_placement() {
        let state = two_brick_world();
        let moved = state.with_arm(1).unwrap();
        assert_ne!(state, moved);
        assert_eq!(state, moved.with_arm(0).unwrap());
    }
}
