//! Error types for the OKML pipeline
//!
//! - [`ConfigError`]: bad environment configuration, raised before any work
//! - [`ServiceError`]: a pipeline stage failed

use okml_adapters::AdapterError;
use okml_core::LoadError;
use okml_report::ReportError;
use std::path::PathBuf;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable present but unusable
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// Unknown log format name
    #[error("unknown log format {0:?} (expected pretty or json)")]
    UnknownLogFormat(String),

    /// Global subscriber could not be installed
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Pipeline stage error
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Input environment could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Provisioning adapter failed
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// Artifact could not be written
    #[error(transparent)]
    Report(#[from] ReportError),

    /// A stage ran before the stage that produces its input
    #[error("missing upstream artifact at {}. Run: {command}.", .artifact.display())]
    MissingUpstreamArtifact {
        artifact: PathBuf,
        command: &'static str,
    },

    /// Upstream artifact exists but does not deserialize (or fails validation)
    #[error("corrupt upstream artifact at {}: {source}", .artifact.display())]
    CorruptArtifact {
        artifact: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error reading an upstream artifact
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ServiceError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the fix is to run an earlier stage first
    #[inline]
    #[must_use]
    pub fn is_missing_upstream(&self) -> bool {
        matches!(self, Self::MissingUpstreamArtifact { .. })
    }
}
