// src/host.rs
//
// Capabilities the detector uses to look at the host. Both are injected so
// the decision table can be driven by fakes.

use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// An external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl SystemCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl std::fmt::Display for SystemCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, -1 when the process was killed by a signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run `command` to completion. Errors only when it could not be spawned.
    fn run(&self, command: &SystemCommand) -> io::Result<CommandOutput>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ConfigFileReader {
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>>;
    fn exists(&self, path: &Path) -> bool;
}

pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &SystemCommand) -> io::Result<CommandOutput> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(std::process::Stdio::null())
            .output()?;

        let result = CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!("`{}` exited with {}", command, result.code);

        Ok(result)
    }
}

pub struct FsConfigReader;

impl ConfigFileReader for FsConfigReader {
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        // rc.conf is not guaranteed to be UTF-8; stray bytes must not hide other lines.
        let content = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&content)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
