//! OKML Adapters
//!
//! Infrastructure-as-code runners used by the automation stage:
//! - [`TerraformRunner`]: init/plan/apply/output against `iac/terraform`
//! - [`AnsibleRunner`]: playbook run against `iac/ansible`
//!
//! Both run in a scratch copy of their directory and degrade to a fixed mock
//! result when the tool is missing or any step fails, so the pipeline always
//! produces evidence.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod ansible;
pub mod command;
pub mod error;
pub mod result;
pub mod scratch;
pub mod terraform;

pub use ansible::AnsibleRunner;
pub use command::find_binary;
pub use error::AdapterError;
pub use result::{AdapterPayload, AdapterResult, RunMode};
pub use terraform::TerraformRunner;

use async_trait::async_trait;

/// A provisioning tool wrapped for the automation stage
#[async_trait]
pub trait ProvisioningRunner: Send + Sync {
    /// Tool name used in logs
    fn name(&self) -> &'static str;

    /// Run the tool, falling back to mock evidence on failure
    ///
    /// # Errors
    /// Only [`AdapterError::MissingWorkspace`].
    async fn run(&self) -> Result<AdapterResult, AdapterError>;
}

/// Replace a failed real run with the mock result
pub(crate) fn fallback(
    runner: &'static str,
    outcome: Result<AdapterResult, AdapterError>,
    mock: fn() -> AdapterResult,
) -> AdapterResult {
    match outcome {
        Ok(result) => result,
        Err(error) => {
            tracing::warn!(runner, %error, "real run failed, falling back to mock");
            mock()
        }
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
