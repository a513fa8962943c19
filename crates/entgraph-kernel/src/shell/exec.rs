//! Command execution result.

/// Outcome of one command line.
///
/// Exactly one of `stdout` / `stderr` carries text. `exit` is set only by the
/// `exit` verb and tells the caller to stop reading input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
    /// Whether execution succeeded.
    pub success: bool,
    /// Stop the session after this result.
    pub exit: bool,
}

impl ExecResult {
    /// Create a successful result.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
            exit: false,
        }
    }

    /// Create a failure result.
    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
            exit: false,
        }
    }

    /// Create the result of the `exit` verb.
    pub fn exit() -> Self {
        Self {
            success: true,
            exit: true,
            ..Self::default()
        }
    }

    /// The text a terminal should show for this result.
    pub fn text(&self) -> &str {
        if self.success { &self.stdout } else { &self.stderr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_follows_success() {
        assert_eq!(ExecResult::success("ok").text(), "ok");
        assert_eq!(ExecResult::failure("Error: no").text(), "Error: no");
    }

    #[test]
    fn test_exit_is_successful() {
        let result = ExecResult::exit();
        assert!(result.success);
        assert!(result.exit);
        assert!(result.text().is_empty());
    }
}
