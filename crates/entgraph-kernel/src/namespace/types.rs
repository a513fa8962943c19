//! Core namespace types.
//!
//! Listings render as a bracketed, comma-separated list (`[a,b,c]`). Order is
//! whatever the caller supplies; the tree hands names over already sorted.

use std::fmt;
use std::str::FromStr;

use entgraph_types::Permission;
use strum::EnumString;

/// Entity type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum EntityKind {
    /// Holds content and a permission table.
    #[strum(serialize = "file")]
    File,
    /// Holds children.
    #[strum(serialize = "directory")]
    Directory,
}

impl EntityKind {
    /// Parse from the exact lowercase word used on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::File => "file",
            EntityKind::Directory => "directory",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Child names of a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub names: Vec<String>,
}

impl Listing {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.names.iter())
    }
}

/// Permissions one role holds on one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionList {
    pub permissions: Vec<Permission>,
}

impl PermissionList {
    pub fn new(permissions: Vec<Permission>) -> Self {
        Self { permissions }
    }
}

impl fmt::Display for PermissionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.permissions.iter())
    }
}

fn write_bracketed<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
