//! Site Pulse entry point
//!
//! Single-site liveness checker with AI-assisted diagnosis

use anyhow::{Context, Result};
use clap::Parser;
use site_pulse::cli::args::{Args, Commands};
use site_pulse::cli::commands::{
    CheckCommand, Command, InitCommand, ValidateCommand, VersionCommand,
};
use site_pulse::logging::{LogConfig, LoggingSystem};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_config = LogConfig {
        level: if args.verbose {
            log::LevelFilter::Debug
        } else {
            args.log_level.into()
        },
        console: true,
        ..Default::default()
    };

    let _logging_system =
        LoggingSystem::setup_logging(log_config).context("failed to initialize logging")?;

    if let Err(e) = execute_command(&args).await {
        error!("command failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Dispatch the parsed subcommand
async fn execute_command(args: &Args) -> Result<()> {
    let command: Box<dyn Command> = match &args.command {
        Commands::Check { .. } => Box::new(CheckCommand),
        Commands::Init { .. } => Box::new(InitCommand),
        Commands::Validate { .. } => Box::new(ValidateCommand),
        Commands::Version { .. } => Box::new(VersionCommand),
    };

    command.execute(args).await.map_err(|e| anyhow::anyhow!(e))
}
