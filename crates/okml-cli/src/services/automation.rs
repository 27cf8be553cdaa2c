use super::RunContext;
use crate::error::ServiceError;
use crate::run_id::RunId;
use okml_adapters::{AnsibleRunner, ProvisioningRunner, RunMode, TerraformRunner};
use okml_report::{
    render_k8s_baseline_manifest, render_openstack_controller_standard, write_json, write_text,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Contents of `automation/automation_metadata.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutomationMetadata {
    pub terraform_mode: RunMode,
    pub ansible_mode: RunMode,
    pub run_id: RunId,
}

/// Runs Terraform and Ansible (or their mocks) and writes the evidence
pub struct AutomationService<'a> {
    ctx: &'a RunContext,
    terraform: Box<dyn ProvisioningRunner>,
    ansible: Box<dyn ProvisioningRunner>,
}

impl<'a> AutomationService<'a> {
    /// Create new service with runners rooted at the configured repo root
    #[must_use]
    pub fn new(ctx: &'a RunContext) -> Self {
        let root = &ctx.settings().repo_root;
        Self::with_runners(
            ctx,
            Box::new(TerraformRunner::new(root)),
            Box::new(AnsibleRunner::new(root)),
        )
    }

    #[must_use]
    pub fn with_runners(
        ctx: &'a RunContext,
        terraform: Box<dyn ProvisioningRunner>,
        ansible: Box<dyn ProvisioningRunner>,
    ) -> Self {
        Self {
            ctx,
            terraform,
            ansible,
        }
    }

    /// Run the stage
    ///
    /// # Errors
    /// A missing IaC directory or write failures. Tool failures are not
    /// errors; they show up as mock mode in the metadata.
    pub async fn run(&self) -> Result<AutomationMetadata, ServiceError> {
        let tf = self.terraform.run().await?;
        let ans = self.ansible.run().await?;

        let out_dir = self.ctx.stage_dir("automation");
        write_text(
            &out_dir.join("terraform_plan.txt"),
            &format!("{}\nMode: {}\n", tf.transcript(), tf.mode),
        )?;
        let empty = Map::new();
        write_json(
            &out_dir.join("terraform_outputs.json"),
            &Value::Object(tf.outputs().unwrap_or(&empty).clone()),
        )?;
        write_text(
            &out_dir.join("ansible_run.log"),
            &format!("{}\nMode: {}\n", ans.transcript(), ans.mode),
        )?;

        let generated = out_dir.join("generated_configs");
        write_text(&generated.join("k8s_baseline.yaml"), render_k8s_baseline_manifest())?;
        write_text(
            &generated.join("openstack_controller_standard.md"),
            render_openstack_controller_standard(),
        )?;

        let metadata = AutomationMetadata {
            terraform_mode: tf.mode,
            ansible_mode: ans.mode,
            run_id: self.ctx.run_id(),
        };
        write_json(&out_dir.join("automation_metadata.json"), &metadata)?;

        tracing::info!(
            run_id = %metadata.run_id,
            out_dir = %out_dir.display(),
            terraform_mode = %metadata.terraform_mode,
            ansible_mode = %metadata.ansible_mode,
            "automation_complete"
        );
        Ok(metadata)
    }
}

impl std::fmt::Debug for AutomationService<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutomationService")
            .field("run_id", &self.ctx.run_id())
            .field("terraform", &self.terraform.name())
            .field("ansible", &self.ansible.name())
            .finish()
    }
}
