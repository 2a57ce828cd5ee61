//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for catalog records
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted record
    Full,
    /// One-line summary per record
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for vigia_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => vigia_domain::OutputFormat::Full,
            OutputFormat::Summary => vigia_domain::OutputFormat::Summary,
            OutputFormat::Json => vigia_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for vigia
#[derive(Parser, Debug)]
#[command(name = "vigia")]
#[command(author, version, about = "Research catalog for government-contractor due diligence")]
#[command(long_about = r#"
Vigia is the configuration catalog for a contractor due-diligence
research pipeline: three research tiers (standard, deep, ultra),
corruption-detection patterns, due-diligence checklists, risk weights,
and sector/jurisdiction profiles.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./vigia.toml        Project-level config
3. ~/.config/vigia/config.toml   Global config

Example:
  vigia modes
  vigia mode deep
  vigia plan --tier ultra --sector infrastructure --jurisdiction colombia
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Catalog queries
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare the three research tiers
    Modes,
    /// Show the full preset for one tier
    Mode {
        /// Tier to show (standard, deep, ultra)
        tier: String,
    },
    /// Show the corruption-detection pattern table
    Patterns,
    /// Show the due-diligence checklists
    Checklist,
    /// Show the risk factor weights
    Weights,
    /// Show a sector profile
    Sector {
        /// Sector key (e.g. infrastructure, healthcare)
        key: String,
    },
    /// Show a jurisdiction profile
    Jurisdiction {
        /// Jurisdiction key (e.g. colombia, mexico, brazil)
        key: String,
    },
    /// Resolve a full investigation plan
    Plan {
        /// Tier to plan with (standard, deep, ultra)
        #[arg(short, long)]
        tier: Option<String>,
        /// Sector profile to layer on
        #[arg(short, long)]
        sector: Option<String>,
        /// Jurisdiction profile to layer on
        #[arg(short, long)]
        jurisdiction: Option<String>,
    },
}
