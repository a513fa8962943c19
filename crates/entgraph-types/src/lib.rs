//! Shared identity and permission types for entgraph.
//!
//! This is the leaf crate: typed entity handles, the acting user, and the
//! permission vocabulary. It has **no internal entgraph dependencies**.
//!
//! # Key Types
//!
//! |------------------|----------------------------------------------|
//! | Type             | Purpose                                      |
//! |------------------|----------------------------------------------|
//! | [`EntityId`]     | Stable handle to a node in the namespace     |
//! | [`User`]         | Acting identity (name + single role)         |
//! | [`Permission`]   | `read` or `write`, granted per role per file |
//! |------------------|----------------------------------------------|

pub mod ids;
pub mod permission;
pub mod user;

// Re-export primary types at crate root for convenience.
pub use ids::EntityId;
pub use permission::{Permission, UnknownPermission};
pub use user::User;
