use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output mode for command results.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable status summary.
    Text,
    /// The validation report as pretty JSON.
    Json,
}

/// Top-level CLI parser for the `herald` binary.
#[derive(Debug, Parser)]
#[command(
    name = "herald",
    version,
    about = "Herald - validate and enhance campaign email templates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Trace identifier recorded in reports and logs
    #[arg(short, long, global = true)]
    pub trace_id: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the campaign template, enhance it, and write reports
    Validate(CampaignArgs),
    /// Enhance the campaign template's design and write every variant
    Enhance(CampaignArgs),
}

#[derive(Debug, Args)]
pub struct CampaignArgs {
    /// Campaign directory (contains templates/email-template.html)
    pub campaign: PathBuf,
}

impl Commands {
    #[must_use]
    pub const fn campaign(&self) -> &CampaignArgs {
        match self {
            Self::Validate(args) | Self::Enhance(args) => args,
        }
    }
}
