//! Typed handle for namespace entities.
//!
//! `EntityId` wraps a UUIDv7 (time-ordered, globally unique). Parents are
//! referenced by handle rather than by pointer, so a stale handle resolves to
//! "absent" instead of dangling. The `short()` form (first 8 hex chars) is for
//! log lines only, never a lookup key.
//!
//! The root entity uses a deterministic sentinel via `EntityId::root()`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An entity identifier (UUIDv7, or UUIDv5 for the root sentinel).
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(uuid::Uuid);

/// Fixed namespace for deriving the deterministic root id via UUIDv5.
const ENTGRAPH_ENTITY_NS: uuid::Uuid = uuid::uuid!("3f6d2a91-0c4e-4b7a-9e15-8d2c7f4a1b03");

impl EntityId {
    /// Create a new time-ordered ID (UUIDv7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// The well-known root entity.
    ///
    /// Deterministic: same value every time (UUIDv5 derived from `b"root"`).
    pub fn root() -> Self {
        Self(uuid::Uuid::new_v5(&ENTGRAPH_ENTITY_NS, b"root"))
    }

    /// First 8 hex characters, for log lines only.
    pub fn short(&self) -> String {
        self.0.as_simple().to_string()[..8].to_string()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<uuid::Uuid> for EntityId {
    fn from(u: uuid::Uuid) -> Self {
        Self(u)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Full UUID with hyphens for log readability
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.short())
    }
}

// ============================================================================
// Tests
// ============================================================================
