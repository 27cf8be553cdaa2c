//! Terraform runner
//!
//! Real mode runs `init`, `plan`, `apply` and `output -json` against a scratch
//! copy of `iac/terraform`. Without a `terraform` binary, or when any step
//! fails, the fixed mock plan and outputs are returned instead.

use crate::command::{find_binary, run_checked, COMMAND_TIMEOUT, SHORT_COMMAND_TIMEOUT};
use crate::error::AdapterError;
use crate::result::{AdapterPayload, AdapterResult};
use crate::scratch::Scratch;
use crate::{fallback, ProvisioningRunner};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

const BINARY: &str = "terraform";

const MOCK_PLAN: &str = "\
Terraform used the selected providers to generate the following execution plan.

  # null_resource.provision_units will be created
  + resource \"null_resource\" \"provision_units\" {
      + id = (known after apply)
    }

Plan: 1 to add, 0 to change, 0 to destroy.
";

/// Runs the Terraform workspace under `<repo_root>/iac/terraform`
#[derive(Debug, Clone)]
pub struct TerraformRunner {
    workspace: PathBuf,
    binary: Option<PathBuf>,
}

impl TerraformRunner {
    /// Create new runner; the binary is looked up on `PATH`
    #[must_use]
    pub fn new(repo_root: impl AsRef<Path>) -> Self {
        Self {
            workspace: repo_root.as_ref().join("iac").join("terraform"),
            binary: find_binary(BINARY),
        }
    }

    /// Override binary discovery (`None` forces mock mode)
    #[inline]
    #[must_use]
    pub fn with_binary(mut self, binary: Option<PathBuf>) -> Self {
        self.binary = binary;
        self
    }

    /// Directory the runner mirrors
    #[inline]
    #[must_use]
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Deterministic stand-in result
    #[must_use]
    pub fn mock_result() -> AdapterResult {
        let mut outputs = Map::new();
        outputs.insert(
            "provisioning_units".to_string(),
            json!({ "value": 12, "type": "number" }),
        );
        outputs.insert(
            "standardized_k8s_baseline".to_string(),
            json!({ "value": true, "type": "bool" }),
        );
        outputs.insert(
            "run_mode".to_string(),
            json!({ "value": "mock", "type": "string" }),
        );
        AdapterResult::mock(AdapterPayload::Terraform {
            plan_text: MOCK_PLAN.to_string(),
            outputs,
        })
    }

    async fn run_real(&self, binary: &Path) -> Result<AdapterResult, AdapterError> {
        let scratch = Scratch::mirror(&self.workspace, "okml-tf-", "tf")?;
        let cwd = scratch.root();

        run_checked(binary, &["init", "-input=false"], cwd, COMMAND_TIMEOUT).await?;
        let plan = run_checked(binary, &["plan", "-input=false", "-no-color"], cwd, COMMAND_TIMEOUT)
            .await?;
        let apply = run_checked(
            binary,
            &["apply", "-input=false", "-auto-approve", "-no-color"],
            cwd,
            COMMAND_TIMEOUT,
        )
        .await?;
        let output = run_checked(binary, &["output", "-json"], cwd, SHORT_COMMAND_TIMEOUT).await?;

        Ok(AdapterResult::real(AdapterPayload::Terraform {
            plan_text: format!("{}\n{}", plan.stdout, apply.stdout),
            outputs: parse_outputs(&output.stdout)?,
        }))
    }
}

/// Parse `terraform output -json`; blank output means no outputs
fn parse_outputs(stdout: &str) -> Result<Map<String, Value>, AdapterError> {
    if stdout.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(stdout) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AdapterError::InvalidOutputs(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(AdapterError::InvalidOutputs(e.to_string())),
    }
}

#[async_trait]
impl ProvisioningRunner for TerraformRunner {
    fn name(&self) -> &'static str {
        BINARY
    }

    async fn run(&self) -> Result<AdapterResult, AdapterError> {
        if !self.workspace.is_dir() {
            return Err(AdapterError::MissingWorkspace {
                runner: BINARY,
                path: self.workspace.clone(),
            });
        }
        let Some(binary) = &self.binary else {
            tracing::info!(runner = BINARY, "binary not on PATH, using mock");
            return Ok(Self::mock_result());
        };
        Ok(fallback(BINARY, self.run_real(binary).await, Self::mock_result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::RunMode;

    #[test]
    fn mock_outputs_are_fixed() {
        let result = TerraformRunner::mock_result();
        assert_eq!(result.mode, RunMode::Mock);
        let outputs = result.outputs().unwrap();
        assert_eq!(outputs["provisioning_units"]["value"], 12);
        assert_eq!(outputs["provisioning_units"]["type"], "number");
        assert_eq!(outputs["standardized_k8s_baseline"]["value"], true);
        assert_eq!(outputs["run_mode"]["value"], "mock");
        assert!(result.transcript().contains("Plan: 1 to add, 0 to change, 0 to destroy."));
    }

    #[test]
    fn outputs_parsing() {
        assert!(parse_outputs("  \n").unwrap().is_empty());
        let map = parse_outputs(r#"{"x": {"value": 1, "type": "number"}}"#).unwrap();
        assert_eq!(map["x"]["value"], 1);
        assert!(matches!(parse_outputs("[1]"), Err(AdapterError::InvalidOutputs(_))));
        assert!(matches!(parse_outputs("{nope"), Err(AdapterError::InvalidOutputs(_))));
    }

    #[test]
    fn workspace_is_under_iac() {
        let runner = TerraformRunner::new("/repo");
        assert_eq!(runner.workspace(), Path::new("/repo/iac/terraform"));
    }
}
