//! Entity: one node of the namespace tree.

use std::collections::BTreeMap;

use entgraph_types::EntityId;

use super::file::File;
use super::types::EntityKind;

/// A node in the namespace tree.
///
/// A directory is an entity without a file payload. Files never have
/// children. The parent is a handle into the owning [`Namespace`] arena;
/// only the root has none.
///
/// [`Namespace`]: super::Namespace
#[derive(Debug, Clone)]
pub struct Entity {
    pub(crate) name: String,
    pub(crate) parent: Option<EntityId>,
    pub(crate) children: BTreeMap<String, EntityId>,
    pub(crate) file: Option<File>,
}

impl Entity {
    pub(crate) fn new_directory(name: impl Into<String>, parent: Option<EntityId>) -> Self {
        Self {
            name: name.into(),
            parent,
            children: BTreeMap::new(),
            file: None,
        }
    }

    pub(crate) fn new_file(name: impl Into<String>, parent: EntityId) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent),
            children: BTreeMap::new(),
            file: Some(File::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn kind(&self) -> EntityKind {
        if self.file.is_some() {
            EntityKind::File
        } else {
            EntityKind::Directory
        }
    }

    pub fn is_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn is_dir(&self) -> bool {
        self.file.is_none()
    }

    pub fn file(&self) -> Option<&File> {
        self.file.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        let root = Entity::new_directory("", None);
        assert_eq!(root.kind(), EntityKind::Directory);
        assert!(root.file().is_none());
        assert_eq!(root.parent(), None);

        let parent = EntityId::root();
        let notes = Entity::new_file("notes", parent);
        assert_eq!(notes.kind(), EntityKind::File);
        assert_eq!(notes.name(), "notes");
        assert_eq!(notes.parent(), Some(parent));
        assert!(notes.file().is_some_and(File::is_unrestricted));
    }
}
