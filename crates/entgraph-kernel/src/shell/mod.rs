//! Command-line shell over a [`Namespace`](crate::namespace::Namespace).
//!
//! A line flows through three stages:
//!
//! 1. [`tokenize`] splits on single spaces
//! 2. [`Command::parse`] validates shape and strips entity-name quotes
//! 3. [`Interpreter::run`] applies the command and renders an [`ExecResult`]
//!
//! Nothing touches the namespace until stage 3, so a rejected line has no
//! effect.

mod command;
mod error;
mod exec;
mod interpreter;
mod tokenize;

pub use command::{ChangeTarget, Command};
pub use error::{CommandError, CommandResult};
pub use exec::ExecResult;
pub use interpreter::Interpreter;
pub use tokenize::{parse_entity_name, tokenize};
