use super::RunContext;
use crate::error::ServiceError;
use okml_report::{render_executive_summary_md, write_text};

/// Writes the executive summary around the stored KPI JSON
#[derive(Debug)]
pub struct ExecutiveService<'a> {
    ctx: &'a RunContext,
}

impl<'a> ExecutiveService<'a> {
    #[must_use]
    pub fn new(ctx: &'a RunContext) -> Self {
        Self { ctx }
    }

    /// Run the stage
    ///
    /// # Errors
    /// [`ServiceError::MissingUpstreamArtifact`] when the KPI stage has not
    /// run, or IO failures.
    pub fn run(&self) -> Result<(), ServiceError> {
        let artifact = self.ctx.stage_dir("kpis").join("kpis.json");
        if !artifact.is_file() {
            return Err(ServiceError::MissingUpstreamArtifact {
                artifact,
                command: "okml kpis (or okml demo)",
            });
        }
        let kpis_json =
            std::fs::read_to_string(&artifact).map_err(|e| ServiceError::io_error(&artifact, e))?;

        let out_dir = self.ctx.stage_dir("executive");
        write_text(
            &out_dir.join("executive_summary.md"),
            &render_executive_summary_md(&kpis_json),
        )?;

        tracing::info!(
            run_id = %self.ctx.run_id(),
            out_dir = %out_dir.display(),
            "executive_summary_complete"
        );
        Ok(())
    }
}
