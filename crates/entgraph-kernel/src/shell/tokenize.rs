//! Line tokenizing and entity-name quoting.
//!
//! Fields are separated by exactly one ASCII space. Runs of spaces produce
//! empty tokens and tabs are ordinary characters; neither is normalized.

use super::error::{CommandError, CommandResult};

/// Split a command line into fields.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

/// Strip the surrounding double quotes from an entity-name token.
///
/// The token must start and end with `"` and have a non-empty interior.
/// Interior characters are not inspected.
pub fn parse_entity_name(token: &str) -> CommandResult<String> {
    token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CommandError::invalid_name(token))
}
