// src/system/executor.rs

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Why a single command did not succeed.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The argv was empty.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// The process could not be spawned or waited on.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    /// The process ran and exited unsuccessfully.
    #[error("Command '{command}' exited with a non-zero error code ({status}).")]
    NonZeroExitStatus {
        /// The command line, shell-quoted.
        command: String,
        /// The exit status reported by the OS.
        status: ExitStatus,
    },
}

/// Joins an argv into a single line with shell quoting, for display and for
/// the `cmd /C` fallback.
pub fn display_command(argv: &[&str]) -> String {
    shlex::try_join(argv.iter().copied()).unwrap_or_else(|_| argv.join(" "))
}

/// Runs `argv` in `cwd` and blocks until it exits.
///
/// The child inherits stdin, stdout and stderr, so its output reaches the
/// terminal as it is produced. Nothing is captured.
pub fn execute_command(argv: &[&str], cwd: &Path) -> Result<(), ExecutionError> {
    let (program, args) = argv.split_first().ok_or(ExecutionError::EmptyCommand)?;
    let command_line = display_command(argv);
    let clean_cwd = dunce::simplified(cwd);

    log::debug!(
        "Spawning '{}' with args {:?} in '{}'",
        program,
        args,
        clean_cwd.display()
    );

    let mut command = StdCommand::new(program);
    command
        .args(args)
        .current_dir(clean_cwd)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    // Windows shims like `php.bat` are not found by a direct spawn.
    // Retry through `cmd /C` before giving up.
    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound && cfg!(target_os = "windows") => {
            log::debug!("Command '{}' not found. Retrying with cmd /C.", program);
            StdCommand::new("cmd")
                .arg("/C")
                .arg(&command_line)
                .current_dir(clean_cwd)
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .spawn()
                .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?
        }
        Err(e) => return Err(ExecutionError::CommandFailed(command_line, e)),
    };

    let status = child
        .wait()
        .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;
    log::debug!("'{}' exited with {}", command_line, status);

    if status.success() {
        Ok(())
    } else {
        Err(ExecutionError::NonZeroExitStatus {
            command: command_line,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command_quotes_arguments_with_spaces() {
        assert_eq!(
            display_command(&["php", "artisan", "cache:clear"]),
            "php artisan cache:clear"
        );
        let quoted = display_command(&["echo", "a b"]);
        assert_eq!(
            shlex::split(&quoted),
            Some(vec!["echo".to_string(), "a b".to_string()])
        );
    }

    #[test]
    fn test_empty_argv_is_rejected() {
        let cwd = std::env::temp_dir();
        assert!(matches!(
            execute_command(&[], &cwd),
            Err(ExecutionError::EmptyCommand)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        let cwd = std::env::temp_dir();
        assert!(execute_command(&["true"], &cwd).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_reported() {
        let cwd = std::env::temp_dir();
        assert!(matches!(
            execute_command(&["false"], &cwd),
            Err(ExecutionError::NonZeroExitStatus { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_program_is_a_launch_failure() {
        let cwd = std::env::temp_dir();
        let err = execute_command(&["artisan-runner-no-such-program", "x"], &cwd).unwrap_err();
        assert!(matches!(err, ExecutionError::CommandFailed(ref cmd, _) if cmd.contains("no-such-program")));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_given_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        assert!(execute_command(&["test", "-f", "marker"], dir.path()).is_ok());
    }
}
