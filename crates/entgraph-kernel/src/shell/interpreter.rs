//! Command interpreter.
//!
//! Binds a [`Namespace`] to the active [`User`] and turns command lines into
//! [`ExecResult`]s.

use entgraph_types::User;

use super::command::{ChangeTarget, Command};
use super::error::CommandResult;
use super::exec::ExecResult;
use crate::namespace::{EntityKind, Namespace};

/// A single-user session over one namespace.
#[derive(Debug, Default)]
pub struct Interpreter {
    namespace: Namespace,
    user: User,
}

impl Interpreter {
    pub fn new(namespace: Namespace, user: User) -> Self {
        Self { namespace, user }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Parse and run one command line.
    ///
    /// Errors never escape: they are rendered as `Error: <message>` on
    /// stderr and leave the namespace unchanged.
    #[tracing::instrument(skip(self), fields(user = %self.user.name))]
    pub fn execute(&mut self, line: &str) -> ExecResult {
        match Command::parse(line).and_then(|command| self.run(command)) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                ExecResult::failure(format!("Error: {e}"))
            }
        }
    }

    /// Run an already-parsed command.
    pub fn run(&mut self, command: Command) -> CommandResult<ExecResult> {
        let ns = &mut self.namespace;
        let out = match command {
            Command::ChangeDirectory(ChangeTarget::Parent) => {
                ns.change_to_parent()?;
                ns.list_current_directory().to_string()
            }
            Command::ChangeDirectory(ChangeTarget::Named(name)) => {
                ns.change_directory(&name)?;
                ns.list_current_directory().to_string()
            }
            Command::Make { name, kind } => {
                match kind {
                    EntityKind::Directory => ns.create_directory(&name)?,
                    EntityKind::File => ns.create_file(&name)?,
                };
                format!("Created {kind} {name}.")
            }
            Command::Delete { name } => {
                // Absent names are reported the same way.
                ns.delete(&name);
                format!("Deleted entity {name}.")
            }
            Command::Move { name, new_name } => {
                ns.rename(&name, &new_name)?;
                format!("Moved {name} to {new_name}.")
            }
            Command::Find { name } => match ns.find(&name) {
                Some(kind) => format!("Found entity with name {name}, type: {kind}"),
                None => "Entity not found.".to_string(),
            },
            Command::GetWorkingDirectory => ns.working_directory(),
            Command::GetWorkingDirectoryContents => ns.list_current_directory().to_string(),
            Command::GetFile { name } => {
                String::from_utf8_lossy(ns.read_file(&name, &self.user)?).into_owned()
            }
            Command::GetPermissions { role, name } => ns.permissions(&name, &role)?.to_string(),
            Command::Write { name, content } => {
                ns.append_file(&name, content.as_bytes(), &self.user)?;
                format!("Finished writing to file {name}.")
            }
            Command::Overwrite { name, content } => {
                ns.overwrite_file(&name, content.as_bytes(), &self.user)?;
                format!("Finished writing to file {name}.")
            }
            Command::Set {
                permission,
                role,
                name,
            } => {
                ns.set_role_permission(&name, &role, permission)?;
                format!("Permission {permission} set on role {role} on file {name}.")
            }
            Command::UserSet { name, role } => {
                self.user = User::new(name, role);
                tracing::debug!(user = %self.user, "switched user");
                format!("User set as {} with role {}.", self.user.name, self.user.role)
            }
            Command::UserGet => {
                format!("Current user: {}, role: {}", self.user.name, self.user.role)
            }
            Command::Exit => return Ok(ExecResult::exit()),
        };
        Ok(ExecResult::success(out))
    }
}
