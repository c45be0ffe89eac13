use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use herald_config::HeraldConfig;
use herald_llm::OpenAiClient;
use herald_tools::{CampaignTools, ToolParams, status};

mod cli;

use cli::{Cli, Commands, OutputFormat};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("herald error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = HeraldConfig::load_with_dotenv().context("failed to load configuration")?;
    tracing::debug!(model = %config.llm.model, base_url = %config.llm.base_url, "configuration loaded");
    let client = OpenAiClient::from_config(&config.llm).context("failed to build LLM client")?;
    let tools = CampaignTools::from_config(Arc::new(client), &config);

    let campaign = &cli.command.campaign().campaign;
    let mut params = ToolParams::new(campaign.to_string_lossy());
    if let Some(trace_id) = &cli.trace_id {
        params = params.with_trace_id(trace_id);
    }

    let outcome = tools
        .run(&params)
        .await
        .with_context(|| format!("campaign {} failed", campaign.display()))?;

    let rendered = match (cli.format, &cli.command) {
        (OutputFormat::Json, _) => serde_json::to_string_pretty(&outcome.report)?,
        (OutputFormat::Text, Commands::Validate(_)) => status::validation_summary(&outcome),
        (OutputFormat::Text, Commands::Enhance(_)) => status::enhancement_summary(&outcome),
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HERALD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
