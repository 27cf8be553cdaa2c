//! Subprocess helpers: binary discovery and bounded execution

use crate::error::AdapterError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default limit for a single IaC command
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(180);

/// Limit for quick read-only commands (`terraform output`)
pub const SHORT_COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// Captured output of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Both streams joined by a newline
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Locate an executable on `PATH`
#[must_use]
pub fn find_binary(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    find_binary_in(name, &path_var)
}

/// Locate an executable in an explicit `PATH`-style list
#[must_use]
pub fn find_binary_in(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}

/// Run `program args..` in `cwd`, failing on spawn error, timeout or non-zero exit
///
/// The child is killed if the limit elapses.
pub async fn run_checked(
    program: &Path,
    args: &[&str],
    cwd: &Path,
    limit: Duration,
) -> Result<CommandOutput, AdapterError> {
    let command = describe(program, args);
    tracing::debug!(%command, cwd = %cwd.display(), "running command");

    let child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(limit, child)
        .await
        .map_err(|_| AdapterError::Timeout {
            command: command.clone(),
            limit,
        })?
        .map_err(|source| AdapterError::Spawn {
            command: command.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(AdapterError::CommandFailed {
            command,
            code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
        });
    }
    Ok(CommandOutput { stdout, stderr })
}

fn describe(program: &Path, args: &[&str]) -> String {
    let name = program
        .file_name()
        .map_or_else(|| program.display().to_string(), |n| n.to_string_lossy().into_owned());
    std::iter::once(name.as_str())
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_uses_file_name() {
        assert_eq!(
            describe(Path::new("/usr/bin/terraform"), &["init", "-input=false"]),
            "terraform init -input=false"
        );
    }

    #[test]
    fn empty_path_finds_nothing() {
        assert_eq!(find_binary_in("terraform", OsStr::new("")), None);
    }

    #[cfg(unix)]
    #[test]
    fn finds_executable_and_skips_plain_files() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain-tool");
        std::fs::write(&plain, "data").unwrap();
        let exe = dir.path().join("real-tool");
        std::fs::write(&exe, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let path_var = dir.path().as_os_str();
        assert_eq!(find_binary_in("plain-tool", path_var), None);
        assert_eq!(find_binary_in("real-tool", path_var), Some(exe));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_command_failed() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_checked(
            Path::new("/bin/sh"),
            &["-c", "echo boom >&2; exit 3"],
            dir.path(),
            COMMAND_TIMEOUT,
        )
        .await
        .unwrap_err();
        match err {
            AdapterError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, 3);
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_command_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_checked(
            Path::new("/bin/sh"),
            &["-c", "sleep 5"],
            dir.path(),
            Duration::from_millis(100),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdapterError::Timeout { .. }));
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_checked(
            Path::new("/definitely/not/a/binary"),
            &[],
            dir.path(),
            COMMAND_TIMEOUT,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdapterError::Spawn { .. }));
    }
}
