//! Runner outcomes

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Whether a result came from the real tool or the built-in mock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Real,
    Mock,
}

impl RunMode {
    /// Wire name ("real" or "mock")
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool-specific evidence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tool", rename_all = "lowercase")]
pub enum AdapterPayload {
    Terraform {
        /// Plan output followed by apply output
        plan_text: String,
        /// Parsed `terraform output -json` object
        outputs: Map<String, Value>,
    },
    Ansible {
        /// Playbook stdout and stderr
        run_log: String,
    },
}

/// What a runner produced and how
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdapterResult {
    pub mode: RunMode,
    pub payload: AdapterPayload,
}

impl AdapterResult {
    /// Create real-mode result
    #[inline]
    #[must_use]
    pub fn real(payload: AdapterPayload) -> Self {
        Self {
            mode: RunMode::Real,
            payload,
        }
    }

    /// Create mock-mode result
    #[inline]
    #[must_use]
    pub fn mock(payload: AdapterPayload) -> Self {
        Self {
            mode: RunMode::Mock,
            payload,
        }
    }

    /// Human-readable evidence: plan text or run log
    #[must_use]
    pub fn transcript(&self) -> &str {
        match &self.payload {
            AdapterPayload::Terraform { plan_text, .. } => plan_text,
            AdapterPayload::Ansible { run_log } => run_log,
        }
    }

    /// Terraform outputs, if this is a Terraform result
    #[must_use]
    pub fn outputs(&self) -> Option<&Map<String, Value>> {
        match &self.payload {
            AdapterPayload::Terraform { outputs, .. } => Some(outputs),
            AdapterPayload::Ansible { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_value(RunMode::Mock).unwrap(), "mock");
        assert_eq!(RunMode::Real.to_string(), "real");
    }

    #[test]
    fn accessors_follow_payload_kind() {
        let ansible = AdapterResult::mock(AdapterPayload::Ansible {
            run_log: "ok: [localhost]".to_string(),
        });
        assert_eq!(ansible.transcript(), "ok: [localhost]");
        assert!(ansible.outputs().is_none());

        let terraform = AdapterResult::real(AdapterPayload::Terraform {
            plan_text: "Plan: 1 to add".to_string(),
            outputs: Map::new(),
        });
        assert_eq!(terraform.mode, RunMode::Real);
        assert_eq!(terraform.outputs().map(Map::len), Some(0));
    }
}
