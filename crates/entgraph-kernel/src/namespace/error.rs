//! Namespace error types.

use thiserror::Error;

/// Namespace error type.
///
/// Every variant is recoverable: the operation that produced it left the
/// tree untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// A sibling with this name already exists.
    #[error("entity with name {0} already exists")]
    AlreadyExists(String),

    /// No entity with this name in the current directory.
    #[error("entity {0} not found")]
    NotFound(String),

    /// Expected a directory.
    #[error("entity {0} is a file, provide a directory")]
    NotADirectory(String),

    /// Expected a file.
    #[error("entity {0} is not a file")]
    NotAFile(String),

    /// The user's role lacks the required permission.
    #[error("access denied for user {user} on {name}")]
    PermissionDenied { user: String, name: String },

    /// Attempted to step above the root.
    #[error("already at root, cannot change to parent directory")]
    AtNamespaceRoot,
}

impl NamespaceError {
    /// Create an AlreadyExists error.
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists(name.into())
    }

    /// Create a NotFound error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(name: impl Into<String>) -> Self {
        Self::NotADirectory(name.into())
    }

    /// Create a NotAFile error.
    pub fn not_a_file(name: impl Into<String>) -> Self {
        Self::NotAFile(name.into())
    }

    /// Create a PermissionDenied error.
    pub fn permission_denied(user: impl Into<String>, name: impl Into<String>) -> Self {
        Self::PermissionDenied {
            user: user.into(),
            name: name.into(),
        }
    }
}

/// Namespace result type.
pub type NamespaceResult<T> = Result<T, NamespaceError>;
