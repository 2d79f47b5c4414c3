//! Process-backed command runners
//!
//! - [`ProcessRunner`] spawns the program and waits for it
//! - [`DryRunRunner`] only records and prints what would run

use std::cell::RefCell;
use std::io;
use std::process::Command;

use crate::core::ports::{CommandRunner, Invocation};
use crate::error::{BuildError, Result};

/// Runs invocations as child processes
///
/// Children inherit stdin and stderr. Their stdout is inherited too, unless
/// the runner was created with [`ProcessRunner::stdout_to_stderr`], which keeps
/// our own stdout free for machine-readable output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    stdout_to_stderr: bool,
}

impl ProcessRunner {
    /// Runner whose children write straight to our stdout
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stdout_to_stderr: false,
        }
    }

    /// Runner that redirects children's stdout to our stderr
    #[must_use]
    pub const fn stdout_to_stderr() -> Self {
        Self {
            stdout_to_stderr: true,
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<Option<i32>> {
        log::debug!("exec in {}: {}", invocation.cwd.display(), invocation);
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);
        if self.stdout_to_stderr {
            command.stdout(io::stderr());
        }
        let status = command
            .status()
            .map_err(|source| BuildError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        Ok(status.code())
    }
}

/// Records invocations without running them
#[derive(Debug, Default)]
pub struct DryRunRunner {
    recorded: RefCell<Vec<Invocation>>,
}

impl DryRunRunner {
    /// Create a dry-run runner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocations seen so far
    #[must_use]
    pub fn recorded(&self) -> Vec<Invocation> {
        self.recorded.borrow().clone()
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> Result<Option<i32>> {
        log::info!("[dry-run] {invocation}");
        self.recorded.borrow_mut().push(invocation.clone());
        Ok(Some(0))
    }
}
