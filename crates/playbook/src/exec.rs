//! Synchronous execution of the external process.
//!
//! The controller talks to the outside world through the [`Runner`]
//! trait; the default implementation spawns the real binary and waits
//! for completion. No timeout, cancellation or retry is applied.

use std::io;
use std::process::{Command, Output};

/// Captured output of a finished process.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Raw standard output.
    pub stdout: Vec<u8>,
    /// Raw standard error.
    pub stderr: Vec<u8>,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Whether the process exited successfully.
    pub success: bool,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: output.stdout,
            stderr: output.stderr,
            code: output.status.code(),
            success: output.status.success(),
        }
    }
}

impl CommandOutput {
    /// Get stdout as UTF-8 text.
    pub fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Get stderr as UTF-8 text.
    pub fn stderr_str(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }
}

/// Process execution seam.
pub trait Runner {
    /// Run `binary` with `args` to completion, capturing output.
    ///
    /// An `Err` means the process could not be started; a nonzero exit
    /// is reported through [`CommandOutput::success`].
    fn run(&self, binary: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runner that spawns the real process with no inherited stdin.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&self, binary: &str, args: &[String]) -> io::Result<CommandOutput> {
        let output = Command::new(binary).args(args).output()?;
        Ok(CommandOutput::from(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_captures_stdout() {
        let output = ProcessRunner
            .run("echo", &["hello".to_string()])
            .unwrap();

        assert!(output.success);
        assert_eq!(output.code, Some(0));
        assert_eq!(output.stdout_str().trim(), "hello");
        assert!(output.stderr_str().is_empty());
    }

    #[test]
    fn test_process_runner_reports_nonzero_exit() {
        let output = ProcessRunner.run("false", &[]).unwrap();

        assert!(!output.success);
        assert_eq!(output.code, Some(1));
    }

    #[test]
    fn test_process_runner_spawn_failure() {
        let result = ProcessRunner.run("definitely-not-a-real-binary", &[]);
        assert!(result.is_err());
    }
}
