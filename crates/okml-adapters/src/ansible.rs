//! Ansible runner
//!
//! Real mode runs `ansible-playbook -i inventory.ini site.yml` against a
//! scratch copy of `iac/ansible` with a localhost-only inventory.

use crate::command::{find_binary, run_checked, COMMAND_TIMEOUT};
use crate::error::AdapterError;
use crate::result::{AdapterPayload, AdapterResult};
use crate::scratch::Scratch;
use crate::{fallback, ProvisioningRunner};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

const BINARY: &str = "ansible-playbook";

const INVENTORY: &str = "[local]\nlocalhost ansible_connection=local\n";

const MOCK_LOG: &str = "\
PLAY [local] *********************************************************************
TASK [Gathering Facts] ***********************************************************
ok: [localhost]
TASK [Render example configs/manifests] ******************************************
changed: [localhost]
TASK [Validate conventions] ******************************************************
ok: [localhost]
PLAY RECAP ***********************************************************************
localhost                  : ok=3    changed=1    unreachable=0    failed=0
NOTE: Mock runner used (ansible-playbook not available or execution not required).
";

/// Runs the playbook under `<repo_root>/iac/ansible`
#[derive(Debug, Clone)]
pub struct AnsibleRunner {
    workspace: PathBuf,
    binary: Option<PathBuf>,
}

impl AnsibleRunner {
    /// Create new runner; the binary is looked up on `PATH`
    #[must_use]
    pub fn new(repo_root: impl AsRef<Path>) -> Self {
        Self {
            workspace: repo_root.as_ref().join("iac").join("ansible"),
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

    /// Deterministic stand-in result
    #[must_use]
    pub fn mock_result() -> AdapterResult {
        AdapterResult::mock(AdapterPayload::Ansible {
            run_log: MOCK_LOG.to_string(),
        })
    }

    async fn run_real(&self, binary: &Path) -> Result<AdapterResult, AdapterError> {
        let scratch = Scratch::mirror(&self.workspace, "okml-ans-", "ansible")?;
        scratch.write("inventory.ini", INVENTORY)?;

        let output = run_checked(
            binary,
            &["-i", "inventory.ini", "site.yml"],
            scratch.root(),
            COMMAND_TIMEOUT,
        )
        .await?;

        Ok(AdapterResult::real(AdapterPayload::Ansible {
            run_log: output.combined(),
        }))
    }
}

#[async_trait]
impl ProvisioningRunner for AnsibleRunner {
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
