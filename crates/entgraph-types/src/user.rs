//! The acting user.
//!
//! Exactly one `User` is active at a time. A user holds a single role, and
//! roles (not individual users) are what file permissions are granted to.

use serde::{Deserialize, Serialize};

/// The identity permission checks are made against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Display handle: "amy", "guest".
    pub name: String,
    /// The one role this user acts under: "editor", "viewer".
    pub role: String,
}

impl User {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// The unprivileged user a fresh session starts as.
    pub fn guest() -> Self {
        Self::new("guest", "guest")
    }
}

impl Default for User {
    fn default() -> Self {
        Self::guest()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}

// ============================================================================
// Tests
// ============================================================================
