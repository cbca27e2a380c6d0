//! External scaffolding commands (`cargo new`, `npm create vite`, ...).

use std::{path::Path, process::Command};

use hatch_core::{Error, Result};

/// Runs an external command to completion in an explicit directory.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Runs commands as child processes that inherit stdio.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command = command_line(program, args);
        tracing::info!(command = %command, cwd = %cwd.display(), "running");

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| Error::external_process(&command, e.to_string()))?;

        if !status.success() {
            return Err(Error::external_process(command, status.to_string()));
        }
        Ok(())
    }
}

/// `program arg1 arg2`, for messages.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
