//! Typed commands.
//!
//! `Command::parse` does all shape validation: token counts, sub-verbs,
//! quoting, permission words and entity kinds. A `Command` value is always
//! well formed, so running it can only fail on namespace state.
//!
//! ```text
//! change directory to "<name>" | ..
//! make "<name>" directory|file
//! delete "<name>"
//! move "<name>" "<new name>"
//! find "<name>"
//! get working directory [contents]
//! get file "<name>"
//! get permissions <role> "<name>"
//! write "<name>" <content...>
//! overwrite "<name>" <content...>
//! set read|write <role> "<name>"
//! user set <name> <role>
//! user get
//! exit
//! ```

use entgraph_types::Permission;

use super::error::{CommandError, CommandResult};
use super::tokenize::{parse_entity_name, tokenize};
use crate::namespace::EntityKind;

/// Where `change directory to` goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeTarget {
    /// Unquoted `..`.
    Parent,
    /// A child of the current directory.
    Named(String),
}

/// A validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ChangeDirectory(ChangeTarget),
    Make { name: String, kind: EntityKind },
    Delete { name: String },
    Move { name: String, new_name: String },
    Find { name: String },
    GetWorkingDirectory,
    GetWorkingDirectoryContents,
    GetFile { name: String },
    GetPermissions { role: String, name: String },
    /// Append content to a file.
    Write { name: String, content: String },
    /// Replace a file's content.
    Overwrite { name: String, content: String },
    Set { permission: Permission, role: String, name: String },
    UserSet { name: String, role: String },
    UserGet,
    Exit,
}

impl Command {
    /// Parse one line (without its trailing newline).
    pub fn parse(line: &str) -> CommandResult<Self> {
        let tokens = tokenize(line);
        let Some((&verb, args)) = tokens.split_first() else {
            return Err(CommandError::malformed("empty command"));
        };

        match verb {
            "change" => parse_change(args),
            "make" => parse_make(args),
            "delete" => {
                expect_args(args, 1, "delete \"<name>\"")?;
                Ok(Command::Delete {
                    name: parse_entity_name(args[0])?,
                })
            }
            "move" => {
                expect_args(args, 2, "move \"<name>\" \"<new name>\"")?;
                Ok(Command::Move {
                    name: parse_entity_name(args[0])?,
                    new_name: parse_entity_name(args[1])?,
                })
            }
            "find" => {
                expect_args(args, 1, "find \"<name>\"")?;
                Ok(Command::Find {
                    name: parse_entity_name(args[0])?,
                })
            }
            "get" => parse_get(args),
            "write" => {
                let (name, content) = parse_content(args, "write \"<name>\" <content>")?;
                Ok(Command::Write { name, content })
            }
            "overwrite" => {
                let (name, content) = parse_content(args, "overwrite \"<name>\" <content>")?;
                Ok(Command::Overwrite { name, content })
            }
            "set" => parse_set(args),
            "user" => parse_user(args),
            "exit" => {
                expect_args(args, 0, "exit")?;
                Ok(Command::Exit)
            }
            "" => Err(CommandError::malformed("empty command")),
            other => Err(CommandError::malformed(format!("unknown command '{other}'"))),
        }
    }
}

fn expect_args(args: &[&str], count: usize, usage: &str) -> CommandResult<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(CommandError::malformed(format!(
            "expected {count} argument(s), got {}; usage: {usage}",
            args.len()
        )))
    }
}

fn parse_change(args: &[&str]) -> CommandResult<Command> {
    const USAGE: &str = "change directory to \"<name>\"";
    expect_args(args, 3, USAGE)?;
    if args[0] != "directory" || args[1] != "to" {
        return Err(CommandError::malformed(format!("usage: {USAGE}")));
    }

    let target = match args[2] {
        ".." => ChangeTarget::Parent,
        token => ChangeTarget::Named(parse_entity_name(token)?),
    };
    Ok(Command::ChangeDirectory(target))
}

fn parse_make(args: &[&str]) -> CommandResult<Command> {
    const USAGE: &str = "make \"<name>\" directory|file";
    expect_args(args, 2, USAGE)?;
    let name = parse_entity_name(args[0])?;
    let kind = EntityKind::parse(args[1]).ok_or_else(|| {
        CommandError::malformed(format!("unknown entity kind '{}'; usage: {USAGE}", args[1]))
    })?;
    Ok(Command::Make { name, kind })
}

fn parse_get(args: &[&str]) -> CommandResult<Command> {
    match args {
        ["working", "directory"] => Ok(Command::GetWorkingDirectory),
        ["working", "directory", "contents"] => Ok(Command::GetWorkingDirectoryContents),
        ["working", ..] => Err(CommandError::malformed(
            "usage: get working directory [contents]",
        )),
        ["file", rest @ ..] => {
            expect_args(rest, 1, "get file \"<name>\"")?;
            Ok(Command::GetFile {
                name: parse_entity_name(rest[0])?,
            })
        }
        ["permissions", rest @ ..] => {
            expect_args(rest, 2, "get permissions <role> \"<name>\"")?;
            Ok(Command::GetPermissions {
                role: rest[0].to_string(),
                name: parse_entity_name(rest[1])?,
            })
        }
        [other, ..] => Err(CommandError::malformed(format!(
            "unknown get command '{other}'"
        ))),
        [] => Err(CommandError::malformed(
            "usage: get working|file|permissions ...",
        )),
    }
}

/// `<verb> "<name>" <content...>`: everything after the name is rejoined
/// with single spaces.
fn parse_content(args: &[&str], usage: &str) -> CommandResult<(String, String)> {
    let Some((&name, content)) = args.split_first() else {
        return Err(CommandError::malformed(format!("usage: {usage}")));
    };
    Ok((parse_entity_name(name)?, content.join(" ")))
}

fn parse_set(args: &[&str]) -> CommandResult<Command> {
    expect_args(args, 3, "set read|write <role> \"<name>\"")?;
    let permission = Permission::parse(args[0])?;
    let name = parse_entity_name(args[2])?;
    Ok(Command::Set {
        permission,
        role: args[1].to_string(),
        name,
    })
}

fn parse_user(args: &[&str]) -> CommandResult<Command> {
    match args {
        ["set", rest @ ..] => {
            expect_args(rest, 2, "user set <name> <role>")?;
            Ok(Command::UserSet {
                name: rest[0].to_string(),
                role: rest[1].to_string(),
            })
        }
        ["get"] => Ok(Command::UserGet),
        ["get", ..] => Err(CommandError::malformed("usage: user get")),
        [other, ..] => Err(CommandError::malformed(format!(
            "unknown user command '{other}'"
        ))),
        [] => Err(CommandError::malformed("usage: user set|get ...")),
    }
}

// ============================================================================
// Tests
// ============================================================================
