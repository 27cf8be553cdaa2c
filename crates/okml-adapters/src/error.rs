//! Error types for OKML adapters
//!
//! Only [`AdapterError::MissingWorkspace`] ever reaches callers of
//! [`ProvisioningRunner::run`](crate::ProvisioningRunner::run); every other
//! variant describes a failed real run and is absorbed by the mock fallback.

use std::path::PathBuf;
use std::time::Duration;

/// Adapter error type
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// IaC directory the runner works from does not exist
    #[error("missing {runner} workspace: {}", .path.display())]
    MissingWorkspace { runner: &'static str, path: PathBuf },

    /// Filesystem error while preparing the scratch copy
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed while mirroring
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Process could not be started
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process did not finish in time
    #[error("`{command}` timed out after {}s", .limit.as_secs())]
    Timeout { command: String, limit: Duration },

    /// Process exited unsuccessfully
    #[error("`{command}` failed rc={code}\nSTDOUT:\n{stdout}\nSTDERR:\n{stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// `terraform output -json` did not produce a JSON object
    #[error("unparsable terraform outputs: {0}")]
    InvalidOutputs(String),
}

impl AdapterError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when a mock result may stand in for the failed run
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::MissingWorkspace { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_workspace_is_not_recoverable() {
        let err = AdapterError::MissingWorkspace {
            runner: "terraform",
            path: PathBuf::from("/repo/iac/terraform"),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "missing terraform workspace: /repo/iac/terraform");
    }

    #[test]
    fn command_failure_reports_both_streams() {
        let err = AdapterError::CommandFailed {
            command: "terraform init -input=false".to_string(),
            code: 1,
            stdout: "out".to_string(),
            stderr: "err".to_string(),
        };
        assert!(err.is_recoverable());
        let text = err.to_string();
        assert!(text.contains("rc=1"));
        assert!(text.contains("STDOUT:\nout"));
        assert!(text.contains("STDERR:\nerr"));
    }
}
