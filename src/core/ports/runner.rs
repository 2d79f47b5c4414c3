//! Command runner port
//!
//! Defines the interface for invoking external programs.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single external program invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Program to run
    pub program: String,
    /// Arguments, already split
    pub args: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
}

impl Invocation {
    /// Create an invocation with no arguments
    #[must_use]
    pub fn new(program: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Whether any argument equals `arg`
    #[must_use]
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// Render as a shell-like command line
    ///
    /// Words containing whitespace are double-quoted.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(word: &str) -> String {
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        format!("\"{word}\"")
    } else {
        word.to_string()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Runs external programs
///
/// Implementations return the exit code: `Some(0)` on success, `Some(n)` on
/// failure, `None` if the process was terminated by a signal. Failing to start
/// the program at all is an error.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run an invocation to completion
    fn run(&self, invocation: &Invocation) -> crate::Result<Option<i32>>;
}
