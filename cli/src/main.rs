//! CLI entrypoint for vigia
//!
//! This is the main binary that wires together all layers: file
//! configuration, catalog lookups, and output formatting.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vigia_application::{InvestigationConfig, PlanInvestigationUseCase};
use vigia_domain::{
    JurisdictionProfile, OutputFormat, ResearchMode, ResearchTier, SectorProfile,
    corruption_patterns, due_diligence_checklists, risk_weights,
};
use vigia_infrastructure::ConfigLoader;
use vigia_presentation::{Cli, Command, ConsoleFormatter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting vigia");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load file configuration
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    file_config.validate()?;

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    // CLI flag wins, then the config file, then the default
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(file_config.output.format)
        .unwrap_or_default();

    let output = match cli.command {
        Command::Modes => {
            let modes: Vec<ResearchMode> = ResearchTier::all()
                .into_iter()
                .map(ResearchMode::for_tier)
                .collect();
            match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&modes),
                OutputFormat::Summary => ConsoleFormatter::format_modes_summary(&modes),
                OutputFormat::Full => modes
                    .iter()
                    .map(ConsoleFormatter::format_mode)
                    .collect::<Vec<_>>()
                    .join("\n"),
            }
        }
        Command::Mode { tier } => {
            let tier: ResearchTier = tier.parse()?;
            let mode = ResearchMode::for_tier(tier);
            match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&mode),
                _ => ConsoleFormatter::format_mode(&mode),
            }
        }
        Command::Patterns => {
            let patterns = corruption_patterns();
            match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&patterns),
                _ => ConsoleFormatter::format_patterns(&patterns),
            }
        }
        Command::Checklist => {
            let checklists = due_diligence_checklists();
            match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&checklists),
                _ => ConsoleFormatter::format_checklists(&checklists),
            }
        }
        Command::Weights => {
            let factors = risk_weights();
            match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&factors),
                _ => ConsoleFormatter::format_weights(factors),
            }
        }
        Command::Sector { key } => {
            let profile = SectorProfile::lookup(&key);
            match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&profile),
                _ => ConsoleFormatter::format_sector(&key, &profile),
            }
        }
        Command::Jurisdiction { key } => {
            let profile = JurisdictionProfile::lookup(&key);
            match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&profile),
                _ => ConsoleFormatter::format_jurisdiction(&key, &profile),
            }
        }
        Command::Plan {
            tier,
            sector,
            jurisdiction,
        } => {
            // File config provides the defaults, CLI flags override
            let mut config: InvestigationConfig = file_config.to_investigation_config();
            if let Some(tier) = tier {
                config = config.with_tier(tier.parse()?);
            }
            if let Some(sector) = sector {
                config = config.with_sector(sector);
            }
            if let Some(jurisdiction) = jurisdiction {
                config = config.with_jurisdiction(jurisdiction);
            }

            let (plan, issues) = PlanInvestigationUseCase::new().execute(&config);
            match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&plan),
                _ => ConsoleFormatter::format_plan(&plan, &issues),
            }
        }
    };

    println!("{}", output);

    Ok(())
}
