//! Command-line interface

use crate::error::ServiceError;
use crate::services::{
    run_demo, AssessmentService, AutomationService, DesignService, ExecutiveService, KpiService,
    RunContext, SAMPLE_INPUT,
};
use crate::settings::{LogFormat, Settings};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// OpenStack + Kubernetes Modernization Lab
#[derive(Debug, Parser)]
#[command(name = "okml", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every subcommand
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Where to write artifacts (default: ./artifacts)
    #[arg(long, global = true)]
    pub artifacts_dir: Option<PathBuf>,

    /// Deterministic seed for KPI simulation (default: 2026)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log format: pretty or json (default: pretty)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Repository root holding iac/ and sample_data/ (default: .)
    #[arg(long, global = true)]
    pub repo_root: Option<PathBuf>,
}

impl GlobalArgs {
    /// Apply flags on top of `settings`
    #[must_use]
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.artifacts_dir {
            settings = settings.with_artifacts_dir(dir);
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(format) = self.log_format {
            settings = settings.with_log_format(format);
        }
        if let Some(root) = &self.repo_root {
            settings = settings.with_repo_root(root);
        }
        settings
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a legacy environment and write the assessment report
    Assess {
        /// Legacy environment YAML/JSON
        #[arg(long)]
        input: PathBuf,
    },
    /// Write target-state design documents and ADRs
    Design,
    /// Run Terraform/Ansible (or mocks) and write automation evidence
    Automate,
    /// Simulate KPIs from the assessment and write the evidence pack
    Kpis,
    /// Write the executive summary from the KPI evidence
    ExecutiveSummary,
    /// Run every stage end to end
    Demo {
        /// Legacy environment YAML/JSON (default: <repo-root>/sample_data/legacy_env.yaml)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Command {
    /// Subcommand name as typed on the command line
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Assess { .. } => "assess",
            Self::Design => "design",
            Self::Automate => "automate",
            Self::Kpis => "kpis",
            Self::ExecutiveSummary => "executive-summary",
            Self::Demo { .. } => "demo",
        }
    }

    /// Run the subcommand
    ///
    /// # Errors
    /// Whatever the underlying stage reports.
    pub async fn execute(&self, ctx: &RunContext) -> Result<(), ServiceError> {
        match self {
            Self::Assess { input } => {
                AssessmentService::new(ctx).run(input)?;
            }
            Self::Design => DesignService::new(ctx).run()?,
            Self::Automate => {
                AutomationService::new(ctx).run().await?;
            }
            Self::Kpis => {
                KpiService::new(ctx).run()?;
            }
            Self::ExecutiveSummary => ExecutiveService::new(ctx).run()?,
            Self::Demo { input } => {
                let input = input
                    .clone()
                    .unwrap_or_else(|| ctx.settings().repo_root.join(SAMPLE_INPUT));
                run_demo(ctx, &input).await?;
                println!("Artifacts written to: {}", ctx.artifacts_dir().display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "okml", "kpis", "--seed", "9", "--artifacts-dir", "out", "--log-format", "json",
        ])
        .unwrap();
        assert_eq!(cli.command.name(), "kpis");
        let settings = cli.global.apply(Settings::default());
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.artifacts_dir, PathBuf::from("out"));
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn assess_requires_input() {
        assert!(Cli::try_parse_from(["okml", "assess"]).is_err());
        let cli = Cli::try_parse_from(["okml", "assess", "--input", "env.yaml"]).unwrap();
        assert!(matches!(cli.command, Command::Assess { ref input } if input == &PathBuf::from("env.yaml")));
    }

    #[test]
    fn executive_summary_is_kebab_case() {
        let cli = Cli::try_parse_from(["okml", "executive-summary"]).unwrap();
        assert_eq!(cli.command.name(), "executive-summary");
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(Cli::try_parse_from(["okml", "design", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn unset_flags_leave_settings_alone() {
        let settings = Settings::default().with_seed(5);
        assert_eq!(GlobalArgs::default().apply(settings.clone()), settings);
    }
}
