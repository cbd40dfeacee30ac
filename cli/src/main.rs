//! CLI entrypoint for e-camara
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use camara_application::TramitationEngine;
use camara_infrastructure::{
    ConfigLoader, FileConfig, JsonlTramitationLogger, directories_from_roster,
};
use camara_presentation::{Cli, OutputConfig, SessionRepl, SessionRunner, formatter_for, run_script};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
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
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting e-camara");

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    // === Dependency Injection ===
    let chamber = config.chamber.to_chamber_config()?;
    let (persons, committees) = directories_from_roster(&config.roster)?;
    info!(
        "Roster loaded: {} people, {} committees",
        config.roster.people.len(),
        config.roster.committees.len()
    );

    let mut engine = TramitationEngine::new(persons, committees, chamber);
    if let Some(path) = &config.log.events_file {
        match JsonlTramitationLogger::new(path) {
            Some(logger) => engine = engine.with_logger(Arc::new(logger)),
            None => warn!("Event log disabled: cannot open {}", path.display()),
        }
    }

    let output = OutputConfig::resolve(&cli, config.output.format, config.output.color);
    output.apply_color();
    let runner = SessionRunner::new(engine, formatter_for(output.format));

    match &cli.script {
        Some(path) => {
            let summary = run_script(&runner, path, cli.fail_fast)
                .await
                .with_context(|| format!("failed to read script {}", path.display()))?;
            if summary.aborted {
                bail!(
                    "script stopped after {} commands on the first failure",
                    summary.commands
                );
            }
        }
        None => {
            SessionRepl::new(runner)
                .with_banner(!cli.quiet)
                .run()
                .await?;
        }
    }

    Ok(())
}
