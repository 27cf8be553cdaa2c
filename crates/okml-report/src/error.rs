//! Error types for OKML report writing

use std::path::PathBuf;

/// Report writing error
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// IO error while writing an artifact
    #[error("io error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chart could not be drawn or encoded
    #[error("failed to render {chart} chart: {reason}")]
    Chart { chart: &'static str, reason: String },

    /// Payload could not be serialized
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
