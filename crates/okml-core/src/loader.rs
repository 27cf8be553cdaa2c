//! Input loading
//!
//! YAML for `.yaml`/`.yml`, JSON for everything else. The whole document is
//! rejected on the first problem; nothing is partially accepted.

use crate::document::EnvironmentDocument;
use crate::error::LoadError;
use crate::model::LegacyEnvironment;
use std::fmt;
use std::path::Path;

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick format from file extension (case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => f.write_str("YAML"),
            Self::Json => f.write_str("JSON"),
        }
    }
}

/// Parse and validate an environment from text
///
/// # Errors
/// [`LoadError::Syntax`] for malformed documents, [`LoadError::Invalid`] for
/// constraint violations.
pub fn parse_environment(text: &str, format: DocumentFormat) -> Result<LegacyEnvironment, LoadError> {
    let syntax = |message: String| LoadError::Syntax {
        format,
        path: None,
        message,
    };
    let doc: EnvironmentDocument = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| syntax(e.to_string()))?,
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| syntax(e.to_string()))?,
    };
    Ok(LegacyEnvironment::from_document(doc)?)
}

/// Read, parse and validate an environment file
///
/// # Errors
/// See [`parse_environment`]; IO failures surface as [`LoadError::Io`].
pub fn load_environment(path: impl AsRef<Path>) -> Result<LegacyEnvironment, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))?;
    parse_environment(&text, DocumentFormat::from_path(path)).map_err(|e| e.at(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_environment, SAMPLE_YAML};

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("env.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("env.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("env.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("env")), DocumentFormat::Json);
    }

    #[test]
    fn yaml_and_json_agree() {
        let from_yaml = parse_environment(SAMPLE_YAML, DocumentFormat::Yaml).unwrap();
        let json = serde_json::to_string(&from_yaml).unwrap();
        let from_json = parse_environment(&json, DocumentFormat::Json).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml, sample_environment());
    }

    #[test]
    fn missing_required_field_is_syntax_error() {
        let err = parse_environment("name: x\nregion: y\n", DocumentFormat::Yaml).unwrap_err();
        assert!(matches!(err, LoadError::Syntax { .. }));
    }

    #[test]
    fn constraint_failure_is_invalid() {
        let text = SAMPLE_YAML.replace("tenants: 36", "tenants: 0");
        let err = parse_environment(&text, DocumentFormat::Yaml).unwrap_err();
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("tenancy.tenants"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_environment("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn defaults_apply_for_optional_fields() {
        let text = SAMPLE_YAML.replace("  upgrade_strategy: in_place\n", "");
        let env = parse_environment(&text, DocumentFormat::Yaml).unwrap();
        assert_eq!(
            env.control_plane().upgrade_strategy,
            crate::model::UpgradeStrategy::Unknown
        );
    }
}
