//! Error types for OKML Core
//!
//! Only input handling can fail:
//! - Field constraint violations (range, enum membership, non-empty lists)
//! - Document syntax errors (YAML/JSON)
//! - IO errors while reading the input file
//!
//! Scoring, recommendation and KPI simulation are total over a validated
//! [`LegacyEnvironment`](crate::LegacyEnvironment).

use crate::loader::DocumentFormat;
use std::path::PathBuf;

/// A field of the input document violates its constraint
///
/// `field` is a dotted path with list indices, e.g.
/// `provisioning_workflow[2].error_rate_percent`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field `{field}`: {constraint}")]
pub struct ValidationError {
    /// Path of the offending field
    pub field: String,
    /// Human-readable constraint that was violated
    pub constraint: String,
}

impl ValidationError {
    /// Create validation error for field
    #[inline]
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

/// Errors while loading an environment document
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not well-formed YAML/JSON or has the wrong shape
    #[error("{format} syntax error{}: {message}", path_suffix(.path.as_ref()))]
    Syntax {
        format: DocumentFormat,
        path: Option<PathBuf>,
        message: String,
    },

    /// Document parsed but a field constraint failed
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl LoadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the source path to a syntax error
    #[must_use]
    pub fn at(self, origin: impl Into<PathBuf>) -> Self {
        match self {
            Self::Syntax {
                format, message, ..
            } => Self::Syntax {
                format,
                path: Some(origin.into()),
                message,
            },
            other => other,
        }
    }

    /// Validation error, if this is a constraint failure
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

fn path_suffix(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display_names_field_and_constraint() {
        let err = ValidationError::new("compute.compute_nodes", "must be >= 1");
        let msg = err.to_string();
        assert!(msg.contains("compute.compute_nodes"));
        assert!(msg.contains("must be >= 1"));
    }

    #[test]
    fn syntax_error_gains_path() {
        let err = LoadError::Syntax {
            format: DocumentFormat::Yaml,
            path: None,
            message: "bad indent".to_string(),
        }
        .at("env.yaml");
        assert!(err.to_string().contains("in env.yaml"));
        assert!(err.validation().is_none());
    }

    #[test]
    fn invalid_exposes_validation_error() {
        let err = LoadError::from(ValidationError::new("name", "must not be empty"));
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("name"));
    }
}
