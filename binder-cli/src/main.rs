use anyhow::{Context, Result};
use binder_config::LoggingConfig;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::{handle_config_generate, handle_config_validate};
use commands::serve::{resolve_config, serve_command};
use logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = cli.log_level.as_deref();

    match cli.command {
        Some(Commands::Serve {
            config,
            port,
            database_url,
        }) => {
            let config = resolve_config(config.as_deref(), port, database_url)?;
            init_tracing(&config.logging, log_level);
            serve_command(config).await
        }
        Some(Commands::Config { config_cmd }) => {
            init_tracing(&LoggingConfig::default(), log_level);
            match config_cmd {
                ConfigCommands::Validate { config } => handle_config_validate(&config),
                ConfigCommands::Generate { output, force } => handle_config_generate(output.as_deref(), force),
            }
        }
        None => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help().context("Failed to print help")?;
            println!();
            Ok(())
        }
    }
}
