use super::RunContext;
use crate::error::ServiceError;
use okml_core::{assess, load_environment, AssessmentReport};
use okml_report::{render_assessment_md, render_risk_register_csv, write_json, write_text};
use std::path::Path;

/// Loads the environment and writes the assessment report and risk register
#[derive(Debug)]
pub struct AssessmentService<'a> {
    ctx: &'a RunContext,
}

impl<'a> AssessmentService<'a> {
    #[must_use]
    pub fn new(ctx: &'a RunContext) -> Self {
        Self { ctx }
    }

    /// Run the stage
    ///
    /// # Errors
    /// Load failures (IO, syntax, validation) or write failures.
    pub fn run(&self, input: &Path) -> Result<AssessmentReport, ServiceError> {
        let env = load_environment(input)?;
        let report = assess(env);

        let out_dir = self.ctx.stage_dir("assessment");
        write_text(&out_dir.join("assessment_report.md"), &render_assessment_md(&report))?;
        write_json(&out_dir.join("assessment_report.json"), &report)?;
        write_text(
            &out_dir.join("risk_register.csv"),
            &render_risk_register_csv(&report.recommendations),
        )?;

        tracing::info!(
            run_id = %self.ctx.run_id(),
            out_dir = %out_dir.display(),
            env = report.env.name(),
            recommendations = report.recommendations.len(),
            "assessment_complete"
        );
        Ok(report)
    }
}
