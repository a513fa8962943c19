//! In-memory hierarchical namespace.
//!
//! Key components:
//!
//! - [`Namespace`] - Owns the entity arena and the current-directory cursor
//! - [`Entity`] - A directory or a file node
//! - [`File`] - Content buffer plus role permission table
//!
//! ## Design Decisions
//!
//! - **Handles, not pointers**: parents and children reference each other by
//!   [`EntityId`](entgraph_types::EntityId). A subtree is released by
//!   removing its arena slots.
//! - **Name-sorted children**: child maps are `BTreeMap`s so listings are
//!   reproducible.
//! - **cwd-relative only**: every name resolves against the current
//!   directory. There are no multi-segment paths.
//! - **Default-open files**: a file with no permission entries is readable
//!   and writable by every role.

mod entity;
mod error;
mod file;
mod tree;
mod types;

pub use entity::Entity;
pub use error::{NamespaceError, NamespaceResult};
pub use file::File;
pub use tree::Namespace;
pub use types::{EntityKind, Listing, PermissionList};
