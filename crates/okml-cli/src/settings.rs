//! Runtime settings
//!
//! Layered as: built-in defaults, then `OKML_*` environment variables, then
//! command-line flags (applied by the caller through the `with_*` builders).

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default KPI simulation seed
pub const DEFAULT_SEED: u64 = 2026;

pub const ENV_ARTIFACTS_DIR: &str = "OKML_ARTIFACTS_DIR";
pub const ENV_LOG_FORMAT: &str = "OKML_LOG_FORMAT";
pub const ENV_SEED: &str = "OKML_SEED";
pub const ENV_REPO_ROOT: &str = "OKML_REPO_ROOT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// OKML settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Root of all written artifacts
    pub artifacts_dir: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
    /// KPI simulation seed
    pub seed: u64,
    /// Repository root holding `iac/` and `sample_data/`
    pub repo_root: PathBuf,
}

impl Settings {
    /// Create default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `OKML_*` process environment variables
    ///
    /// # Errors
    /// [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overlaid with variables from `lookup`
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(dir) = get(ENV_ARTIFACTS_DIR) {
            settings.artifacts_dir = PathBuf::from(dir);
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            settings.log_format = format.parse().map_err(|e: ConfigError| ConfigError::InvalidEnv {
                var: ENV_LOG_FORMAT,
                value: format.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(seed) = get(ENV_SEED) {
            settings.seed = seed.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    var: ENV_SEED,
                    value: seed.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(root) = get(ENV_REPO_ROOT) {
            settings.repo_root = PathBuf::from(root);
        }
        Ok(settings)
    }

    /// With artifacts directory
    #[inline]
    #[must_use]
    pub fn with_artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = dir.into();
        self
    }

    /// With log format
    #[inline]
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// With KPI seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// With repository root
    #[inline]
    #[must_use]
    pub fn with_repo_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.repo_root = root.into();
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("artifacts"),
            log_format: LogFormat::Pretty,
            seed: DEFAULT_SEED,
            repo_root: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let s = Settings::new();
        assert_eq!(s.artifacts_dir, PathBuf::from("artifacts"));
        assert_eq!(s.log_format, LogFormat::Pretty);
        assert_eq!(s.seed, 2026);
    }

    #[test]
    fn env_overrides_defaults() {
        let s = Settings::from_lookup(lookup(&[
            (ENV_ARTIFACTS_DIR, "/tmp/out"),
            (ENV_LOG_FORMAT, "JSON"),
            (ENV_SEED, " 7 "),
            (ENV_REPO_ROOT, "/srv/okml"),
        ]))
        .unwrap();
        assert_eq!(s.artifacts_dir, PathBuf::from("/tmp/out"));
        assert_eq!(s.log_format, LogFormat::Json);
        assert_eq!(s.seed, 7);
        assert_eq!(s.repo_root, PathBuf::from("/srv/okml"));
    }

    #[test]
    fn flags_override_env() {
        let s = Settings::from_lookup(lookup(&[(ENV_SEED, "7")]))
            .unwrap()
            .with_seed(11)
            .with_artifacts_dir("elsewhere");
        assert_eq!(s.seed, 11);
        assert_eq!(s.artifacts_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let s = Settings::from_lookup(lookup(&[(ENV_SEED, ""), (ENV_LOG_FORMAT, "  ")])).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn bad_env_values_are_config_errors() {
        let err = Settings::from_lookup(lookup(&[(ENV_SEED, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_SEED, .. }));

        let err = Settings::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_LOG_FORMAT, .. }));
    }
}
