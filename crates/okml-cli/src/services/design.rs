use super::RunContext;
use crate::error::ServiceError;
use okml_report::{render_architecture_mermaid, render_target_state_md, write_text, ADRS};

/// Writes the target-state design, architecture diagram and ADRs
#[derive(Debug)]
pub struct DesignService<'a> {
    ctx: &'a RunContext,
}

impl<'a> DesignService<'a> {
    #[must_use]
    pub fn new(ctx: &'a RunContext) -> Self {
        Self { ctx }
    }

    /// Run the stage
    ///
    /// # Errors
    /// Write failures.
    pub fn run(&self) -> Result<(), ServiceError> {
        let out_dir = self.ctx.stage_dir("design");
        write_text(&out_dir.join("target_state.md"), render_target_state_md())?;
        write_text(&out_dir.join("architecture.mmd"), render_architecture_mermaid())?;

        let adr_dir = out_dir.join("adr");
        for adr in &ADRS {
            write_text(&adr_dir.join(adr.file_name), adr.body)?;
        }

        tracing::info!(
            run_id = %self.ctx.run_id(),
            out_dir = %out_dir.display(),
            adrs = ADRS.len(),
            "design_complete"
        );
        Ok(())
    }
}
