//! Shell error types.

use entgraph_types::UnknownPermission;
use thiserror::Error;

use crate::namespace::NamespaceError;

/// Anything that stops a command line from taking effect.
///
/// The first three variants come from parsing and are raised before the
/// namespace is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Wrong token count, unknown verb or unknown sub-verb.
    #[error("invalid command: {0}")]
    MalformedCommand(String),

    /// Entity name not wrapped in double quotes.
    #[error("invalid entity {0}: must be wrapped in quotes")]
    InvalidEntityName(String),

    /// Permission word other than `read` / `write`.
    #[error(transparent)]
    InvalidPermission(#[from] UnknownPermission),

    /// The namespace refused the operation.
    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}

impl CommandError {
    /// Create a MalformedCommand error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedCommand(msg.into())
    }

    /// Create an InvalidEntityName error.
    pub fn invalid_name(token: impl Into<String>) -> Self {
        Self::InvalidEntityName(token.into())
    }
}

/// Shell result type.
pub type CommandResult<T> = Result<T, CommandError>;
