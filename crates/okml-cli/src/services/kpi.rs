use super::RunContext;
use crate::error::ServiceError;
use okml_core::{simulate, AssessmentReport, KpiPair};
use okml_report::{
    render_dashboard_html, render_kpis_md, render_provisioning_png, render_uptime_trend_png,
    write_bytes, write_json, write_text,
};

/// Simulates KPIs from the stored assessment and writes the evidence pack
#[derive(Debug)]
pub struct KpiService<'a> {
    ctx: &'a RunContext,
}

impl<'a> KpiService<'a> {
    #[must_use]
    pub fn new(ctx: &'a RunContext) -> Self {
        Self { ctx }
    }

    /// Run the stage
    ///
    /// The stored report is re-validated on read, so a hand-edited report
    /// with out-of-range values is rejected rather than simulated.
    ///
    /// # Errors
    /// [`ServiceError::MissingUpstreamArtifact`] when the assessment has not
    /// run, [`ServiceError::CorruptArtifact`] when its JSON is unusable, or
    /// write failures.
    pub fn run(&self) -> Result<KpiPair, ServiceError> {
        let artifact = self.ctx.stage_dir("assessment").join("assessment_report.json");
        if !artifact.is_file() {
            return Err(ServiceError::MissingUpstreamArtifact {
                artifact,
                command: "okml assess (or okml demo)",
            });
        }
        let text =
            std::fs::read_to_string(&artifact).map_err(|e| ServiceError::io_error(&artifact, e))?;
        let report: AssessmentReport = serde_json::from_str(&text)
            .map_err(|source| ServiceError::CorruptArtifact { artifact, source })?;

        let seed = self.ctx.settings().seed;
        let kpis = simulate(&report.scores, &report.recommendations, seed);

        let (before, after) = (kpis.before, kpis.after);
        let uptime_png =
            render_uptime_trend_png(before.uptime_monthly_percent, after.uptime_monthly_percent)?;
        let provisioning_png = render_provisioning_png(
            before.provisioning_time_minutes_p50,
            after.provisioning_time_minutes_p50,
        )?;

        let out_dir = self.ctx.stage_dir("kpis");
        write_json(&out_dir.join("kpis.json"), &kpis)?;
        write_text(&out_dir.join("kpis.md"), &render_kpis_md(&kpis))?;
        write_bytes(&out_dir.join("uptime_trend.png"), &uptime_png)?;
        write_bytes(&out_dir.join("provisioning_time.png"), &provisioning_png)?;
        write_text(
            &out_dir.join("dashboard.html"),
            &render_dashboard_html(&kpis, &uptime_png, &provisioning_png),
        )?;

        tracing::info!(
            run_id = %self.ctx.run_id(),
            out_dir = %out_dir.display(),
            seed,
            after_uptime = after.uptime_monthly_percent,
            "kpis_complete"
        );
        Ok(kpis)
    }
}
