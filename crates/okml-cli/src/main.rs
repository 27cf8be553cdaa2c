use anyhow::Context;
use clap::Parser;
use okml_cli::{init_logging, Cli, RunContext, Settings};
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli
        .global
        .apply(Settings::from_env().context("loading OKML_* environment")?);
    init_logging(settings.log_format)?;

    let ctx = RunContext::new(settings);
    let span = tracing::info_span!("okml", run_id = %ctx.run_id(), command = cli.command.name());

    cli.command
        .execute(&ctx)
        .instrument(span)
        .await
        .with_context(|| format!("okml {} failed", cli.command.name()))
}
