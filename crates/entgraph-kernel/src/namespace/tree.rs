//! The namespace: an arena of entities plus the current-directory cursor.
//!
//! Entities live in a `HashMap<EntityId, Entity>` owned by [`Namespace`].
//! Parent links and child maps hold handles, never references, so removing a
//! subtree is a matter of dropping its arena slots.
//!
//! All name-taking operations resolve against the current directory only.
//! Names are bare (no quoting); the shell strips quotes before calling in.

use std::collections::HashMap;

use entgraph_types::{EntityId, Permission, User};

use super::entity::Entity;
use super::error::{NamespaceError, NamespaceResult};
use super::file::File;
use super::types::{EntityKind, Listing, PermissionList};

/// Owner of the entity tree and the current working directory.
#[derive(Debug, Clone)]
pub struct Namespace {
    entities: HashMap<EntityId, Entity>,
    root: EntityId,
    cwd: EntityId,
    /// Names from root to `cwd`, root excluded. Kept in step with `cwd`.
    cwd_path: Vec<String>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create a namespace holding only an empty root directory.
    pub fn new() -> Self {
        let root = EntityId::root();
        let mut entities = HashMap::new();
        entities.insert(root, Entity::new_directory("", None));
        Self {
            entities,
            root,
            cwd: root,
            cwd_path: Vec::new(),
        }
    }

    pub fn root(&self) -> EntityId {
        self.root
    }

    pub fn cwd(&self) -> EntityId {
        self.cwd
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Number of live entities, root included.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when only the root remains.
    pub fn is_empty(&self) -> bool {
        self.entities.len() == 1
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    fn current(&self) -> &Entity {
        // cwd is never removed: delete only detaches children of cwd.
        &self.entities[&self.cwd]
    }

    fn current_mut(&mut self) -> &mut Entity {
        self.entities
            .get_mut(&self.cwd)
            .unwrap_or_else(|| unreachable!("cwd {} is not in the arena", self.cwd))
    }

    /// Child of the current directory with this name.
    pub fn lookup(&self, name: &str) -> Option<EntityId> {
        self.current().children.get(name).copied()
    }

    fn child(&self, name: &str) -> NamespaceResult<(EntityId, &Entity)> {
        let id = self
            .lookup(name)
            .ok_or_else(|| NamespaceError::not_found(name))?;
        let entity = self
            .entities
            .get(&id)
            .ok_or_else(|| NamespaceError::not_found(name))?;
        Ok((id, entity))
    }

    /// Kind of the named child, if it exists. Does not search subtrees.
    pub fn find(&self, name: &str) -> Option<EntityKind> {
        self.child(name).ok().map(|(_, entity)| entity.kind())
    }

    /// Names of the current directory's children, sorted.
    pub fn list_current_directory(&self) -> Listing {
        Listing::new(self.current().children.keys().cloned().collect())
    }

    // ========================================================================
    // Creation and removal
    // ========================================================================

    /// Create an empty directory under the current directory.
    pub fn create_directory(&mut self, name: &str) -> NamespaceResult<EntityId> {
        let entity = Entity::new_directory(name, Some(self.cwd));
        self.insert_child(entity)
    }

    /// Create an empty, unrestricted file under the current directory.
    pub fn create_file(&mut self, name: &str) -> NamespaceResult<EntityId> {
        let entity = Entity::new_file(name, self.cwd);
        self.insert_child(entity)
    }

    fn insert_child(&mut self, entity: Entity) -> NamespaceResult<EntityId> {
        if self.lookup(&entity.name).is_some() {
            return Err(NamespaceError::already_exists(entity.name));
        }

        let id = EntityId::new();
        let name = entity.name.clone();
        let kind = entity.kind();
        self.entities.insert(id, entity);
        self.current_mut().children.insert(name.clone(), id);

        tracing::debug!(name = %name, id = %id.short(), kind = %kind, "created entity");
        Ok(id)
    }

    /// Remove the named child and everything beneath it.
    ///
    /// Returns `false` (not an error) when no such child exists.
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(id) = self.current_mut().children.remove(name) else {
            tracing::debug!(name = %name, "delete of absent entity ignored");
            return false;
        };

        let released = self.release(id);
        tracing::debug!(name = %name, id = %id.short(), released, "deleted entity");
        true
    }

    /// Drop a detached subtree from the arena. Returns the number of slots freed.
    fn release(&mut self, id: EntityId) -> usize {
        let mut pending = vec![id];
        let mut released = 0;
        while let Some(id) = pending.pop() {
            if let Some(entity) = self.entities.remove(&id) {
                pending.extend(entity.children.into_values());
                released += 1;
            }
        }
        released
    }

    /// Rename a child of the current directory. It stays under the same parent.
    pub fn rename(&mut self, name: &str, new_name: &str) -> NamespaceResult<()> {
        let (id, _) = self.child(name)?;
        if name == new_name {
            return Ok(());
        }
        if self.lookup(new_name).is_some() {
            return Err(NamespaceError::already_exists(new_name));
        }

        let cwd = self.current_mut();
        cwd.children.remove(name);
        cwd.children.insert(new_name.to_string(), id);
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.name = new_name.to_string();
        }

        tracing::debug!(from = %name, to = %new_name, id = %id.short(), "renamed entity");
        Ok(())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Step into the named child directory.
    pub fn change_directory(&mut self, name: &str) -> NamespaceResult<()> {
        let (id, entity) = self.child(name)?;
        if entity.is_file() {
            return Err(NamespaceError::not_a_directory(name));
        }

        self.cwd = id;
        self.cwd_path.push(name.to_string());
        tracing::debug!(path = %self.working_directory(), "changed directory");
        Ok(())
    }

    /// Step up to the parent directory.
    pub fn change_to_parent(&mut self) -> NamespaceResult<()> {
        let parent = self
            .current()
            .parent
            .ok_or(NamespaceError::AtNamespaceRoot)?;

        self.cwd = parent;
        self.cwd_path.pop();
        tracing::debug!(path = %self.working_directory(), "changed to parent directory");
        Ok(())
    }

    /// Slash-joined names from root to the current directory (empty at root).
    pub fn cwd_path(&self) -> String {
        self.cwd_path.join("/")
    }

    /// The current directory as an absolute path: `/` at root, `/a/b` below it.
    pub fn working_directory(&self) -> String {
        format!("/{}", self.cwd_path())
    }

    /// Rebuild the segment list for `id` by walking parent links.
    ///
    /// `None` if `id` is not live. Agrees with [`Self::cwd_path`] for `cwd`.
    pub fn path_segments(&self, id: EntityId) -> Option<Vec<String>> {
        let mut segments = Vec::new();
        let mut current = self.entities.get(&id)?;
        while let Some(parent) = current.parent {
            segments.push(current.name.clone());
            current = self.entities.get(&parent)?;
        }
        segments.reverse();
        Some(segments)
    }

    // ========================================================================
    // File content and permissions
    // ========================================================================

    fn file(&self, name: &str) -> NamespaceResult<&File> {
        let (_, entity) = self.child(name)?;
        entity
            .file
            .as_ref()
            .ok_or_else(|| NamespaceError::not_a_file(name))
    }

    fn file_mut(&mut self, name: &str) -> NamespaceResult<&mut File> {
        let id = self
            .lookup(name)
            .ok_or_else(|| NamespaceError::not_found(name))?;
        self.entities
            .get_mut(&id)
            .ok_or_else(|| NamespaceError::not_found(name))?
            .file
            .as_mut()
            .ok_or_else(|| NamespaceError::not_a_file(name))
    }

    /// Content of the named file, if `user` may read it.
    pub fn read_file(&self, name: &str, user: &User) -> NamespaceResult<&[u8]> {
        let file = self.file(name)?;
        if !file.check_permission(user, Permission::Read) {
            tracing::warn!(user = %user, name = %name, "read denied");
            return Err(NamespaceError::permission_denied(&user.name, name));
        }
        Ok(file.content())
    }

    /// Append to the named file, if `user` may write it.
    pub fn append_file(&mut self, name: &str, bytes: &[u8], user: &User) -> NamespaceResult<()> {
        self.write_with(name, user, |file| file.append(bytes))?;
        tracing::debug!(name = %name, len = bytes.len(), "appended to file");
        Ok(())
    }

    /// Replace the named file's content, if `user` may write it.
    pub fn overwrite_file(
        &mut self,
        name: &str,
        bytes: &[u8],
        user: &User,
    ) -> NamespaceResult<()> {
        self.write_with(name, user, |file| file.overwrite(bytes))?;
        tracing::debug!(name = %name, len = bytes.len(), "overwrote file");
        Ok(())
    }

    fn write_with(
        &mut self,
        name: &str,
        user: &User,
        mutate: impl FnOnce(&mut File),
    ) -> NamespaceResult<()> {
        let file = self.file_mut(name)?;
        if !file.check_permission(user, Permission::Write) {
            tracing::warn!(user = %user, name = %name, "write denied");
            return Err(NamespaceError::permission_denied(&user.name, name));
        }
        mutate(file);
        Ok(())
    }

    /// Grant `permission` to `role` on the named file.
    pub fn set_role_permission(
        &mut self,
        name: &str,
        role: &str,
        permission: Permission,
    ) -> NamespaceResult<()> {
        self.file_mut(name)?.set_role_permission(role, permission);
        tracing::debug!(name = %name, role = %role, permission = %permission, "granted permission");
        Ok(())
    }

    /// Permissions `role` holds on the named file.
    pub fn permissions(&self, name: &str, role: &str) -> NamespaceResult<PermissionList> {
        Ok(self.file(name)?.permissions_for(role))
    }
}

// ============================================================================
// Tests
// ============================================================================
