//! File payload: content buffer plus role permission table.
//!
//! Buffer mutation is always allowed at this layer. Callers decide whether
//! the acting user may perform it by asking [`File::check_permission`].
//!
//! ## Access policy
//!
//! A file with an empty permission table is open to every role. Once any
//! role has an entry, only roles with an entry containing the requested
//! permission are allowed; roles without an entry are denied.

use std::collections::BTreeMap;

use entgraph_types::{Permission, User};

use super::types::PermissionList;

/// Content and access rules of a file entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    content: Vec<u8>,
    permissions: BTreeMap<String, Vec<Permission>>,
}

impl File {
    /// An empty file with no permission entries (open to everyone).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Extend the content.
    pub fn append(&mut self, bytes: &[u8]) {
        self.content.extend_from_slice(bytes);
    }

    /// Replace the content wholesale.
    pub fn overwrite(&mut self, bytes: &[u8]) {
        self.content.clear();
        self.content.extend_from_slice(bytes);
    }

    /// Whether `user` may perform `access` on this file.
    pub fn check_permission(&self, user: &User, access: Permission) -> bool {
        if self.is_unrestricted() {
            return true;
        }

        self.permissions
            .get(&user.role)
            .is_some_and(|granted| granted.contains(&access))
    }

    /// Grant `permission` to `role`. Repeated grants accumulate.
    pub fn set_role_permission(&mut self, role: impl Into<String>, permission: Permission) {
        self.permissions.entry(role.into()).or_default().push(permission);
    }

    /// Permissions granted to `role`; empty for a role with no entry.
    pub fn permissions_for(&self, role: &str) -> PermissionList {
        PermissionList::new(self.permissions.get(role).cloned().unwrap_or_default())
    }

    /// True when no role has an entry (the file is open to everyone).
    pub fn is_unrestricted(&self) -> bool {
        self.permissions.is_empty()
    }
}
