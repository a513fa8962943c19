//! entgraph kernel.
//!
//! An in-memory tree of directories and files with per-role file
//! permissions, driven by a small line-oriented command language.
//!
//! ```
//! use entgraph_kernel::{Interpreter, Namespace};
//! use entgraph_types::User;
//!
//! let mut shell = Interpreter::new(Namespace::new(), User::guest());
//! assert_eq!(shell.execute("make \"docs\" directory").stdout, "Created directory docs.");
//! assert_eq!(shell.execute("change directory to \"docs\"").stdout, "[]");
//! assert_eq!(shell.execute("get working directory").stdout, "/docs");
//! ```

pub mod namespace;
pub mod shell;

pub use namespace::{
    Entity, EntityKind, File, Listing, Namespace, NamespaceError, NamespaceResult, PermissionList,
};
pub use shell::{ChangeTarget, Command, CommandError, CommandResult, ExecResult, Interpreter};
