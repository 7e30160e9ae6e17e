use serde::{Deserialize, Serialize};
use std::fmt;

/// An activity identifier.
///
/// Wraps i64 to match the SQLite INTEGER PRIMARY KEY (rowid) type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(i64);

impl ActivityId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ActivityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ActivityId> for i64 {
    fn from(id: ActivityId) -> Self {
        id.0
    }
}

/// A production identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionId(i64);

impl ProductionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Extract the raw i64 value (consistent with `ActivityId::as_i64()`).
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ProductionId> for i64 {
    fn from(id: ProductionId) -> Self {
        id.0
    }
}
