//! Object descriptions and identifiers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The label of the floor sentinel identifier.
pub const FLOOR_LABEL: &str = "floor";

/// The size of a world object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Large => write!(f, "large"),
        }
    }
}

/// The shape of a world object.
///
/// `Anyform` is the wildcard the surface grammar produces for bare "object";
/// `Floor` is the shape of the floor pseudo-object only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Anyform,
    Ball,
    Box,
    Brick,
    Plank,
    Table,
    Pyramid,
    Floor,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anyform => write!(f, "object"),
            Self::Ball => write!(f, "ball"),
            Self::Box => write!(f, "box"),
            Self::Brick => write!(f, "brick"),
            Self::Plank => write!(f, "plank"),
            Self::Table => write!(f, "table"),
            Self::Pyramid => write!(f, "pyramid"),
            Self::Floor => write!(f, "floor"),
        }
    }
}

/// Immutable descriptive attributes of a world object.
///
/// Definitions live in the shared catalog of a
/// [`WorldState`](crate::state::WorldState) and are never copied per search
/// node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    pub form: Form,
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ObjectDefinition {
    #[must_use]
    pub fn new(size: Size, color: &str, form: Form) -> Self {
        Self {
            form,
            size,
            color: Some(color.to_owned()),
        }
    }

    /// The floor pseudo-object: large, colorless, shaped `Floor`.
    #[must_use]
    pub fn floor() -> Self {
        Self {
            form: Form::Floor,
            size: Size::Large,
            color: None,
        }
    }
}

impl fmt::Display for ObjectDefinition {
    /// Renders "large red box", "small ball", or "floor".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.form == Form::Floor {
            return write!(f, "floor");
        }
        write!(f, "{} ", self.size)?;
        if let Some(color) = &self.color {
            write!(f, "{color} ")?;
        }
        write!(f, "{}", self.form)
    }
}

/// Identifier of a world object.
///
/// Cheap to clone; every state produced during search shares the same
/// underlying id storage. The sentinel [`ObjectId::floor`] names the floor
/// and never appears in the object catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(Arc<str>);

impl ObjectId {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    /// The floor sentinel.
    #[must_use]
    pub fn floor() -> Self {
        Self::new(FLOOR_LABEL)
    }

    #[must_use]
    pub fn is_floor(&self) -> bool {
        &*self.0 == FLOOR_LABEL
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self(Arc::from(id)))
    }
}
