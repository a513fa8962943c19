//! Permission vocabulary.
//!
//! Files grant permissions per role. The only recognized words are `read`
//! and `write`; anything else fails to parse, so an unrecognized permission
//! can never reach a file's permission table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// A grantable permission. Also names the kind of access being checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// May read file content.
    #[strum(serialize = "read")]
    Read,
    /// May append to or overwrite file content.
    #[strum(serialize = "write")]
    Write,
}

/// Error for a permission word other than `read` / `write`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission '{0}': expected 'read' or 'write'")]
pub struct UnknownPermission(pub String);

impl Permission {
    /// Parse from the exact lowercase word.
    pub fn parse(s: &str) -> Result<Self, UnknownPermission> {
        <Self as FromStr>::from_str(s).map_err(|_| UnknownPermission(s.to_string()))
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
