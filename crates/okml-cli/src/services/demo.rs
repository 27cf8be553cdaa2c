use super::{
    AssessmentService, AutomationService, DesignService, ExecutiveService, KpiService, RunContext,
};
use crate::error::ServiceError;
use crate::run_id::RunId;
use okml_report::write_json;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Sample input, relative to the repository root
pub const SAMPLE_INPUT: &str = "sample_data/legacy_env.yaml";

/// Contents of `run_metadata.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunMetadata {
    pub run_id: RunId,
    pub artifacts_dir: PathBuf,
}

/// Run every stage in order, then write `run_metadata.json`
///
/// # Errors
/// The first failing stage's error; later stages do not run.
pub async fn run_demo(ctx: &RunContext, input: &Path) -> Result<RunMetadata, ServiceError> {
    AssessmentService::new(ctx).run(input)?;
    DesignService::new(ctx).run()?;
    AutomationService::new(ctx).run().await?;
    KpiService::new(ctx).run()?;
    ExecutiveService::new(ctx).run()?;

    let metadata = RunMetadata {
        run_id: ctx.run_id(),
        artifacts_dir: ctx.artifacts_dir().to_path_buf(),
    };
    write_json(&ctx.artifacts_dir().join("run_metadata.json"), &metadata)?;

    tracing::info!(
        run_id = %metadata.run_id,
        artifacts_dir = %metadata.artifacts_dir.display(),
        "demo_complete"
    );
    Ok(metadata)
}
