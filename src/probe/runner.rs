//! External command execution for package manager queries

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Looks up and runs package manager executables.
///
/// Both operations are best-effort: a failed lookup or a command that cannot
/// be spawned yields `None` rather than an error.
pub trait CommandRunner: Send + Sync {
    /// Resolve `program` against the search path.
    fn which(&self, program: &str) -> Option<PathBuf>;

    /// Run `program` to completion and return its captured stdout.
    ///
    /// The exit status is not consulted; stdout is returned as-is, the way a
    /// shell pipeline would pass it on.
    fn run(&self, program: &Path, args: &[&str]) -> Option<String>;
}

/// Runs real processes on the local host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn which(&self, program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(program, error = %e, "Executable not found on search path");
                None
            }
        }
    }

    fn run(&self, program: &Path, args: &[&str]) -> Option<String> {
        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                debug!(program = %program.display(), error = %e, "Failed to spawn command");
                return None;
            }
        };

        if !output.status.success() {
            debug!(
                program = %program.display(),
                exit_code = output.status.code().unwrap_or(-1),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Command exited with non-zero status"
            );
        }

        Some(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_which_missing_program() {
        let runner = SystemCommandRunner::new();
        assert!(runner
            .which("definitely-not-a-real-package-manager-xyz")
            .is_none());
    }

    #[test]
    fn test_run_unspawnable_program() {
        let runner = SystemCommandRunner::new();
        let output = runner.run(Path::new("/nonexistent/bin/pacman"), &["-Si", "samba"]);
        assert!(output.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout_despite_failure() {
        let runner = SystemCommandRunner::new();
        let output = runner
            .run(Path::new("sh"), &["-c", "echo 'Version : 1.2.3'; exit 1"])
            .unwrap();
        assert_eq!(output.trim(), "Version : 1.2.3");
    }
}
