//! computer-use: mouse, keyboard and screen control for AI agents.
//!
//! Main entry point for the computer-use CLI.

mod adapters;
mod cli;
mod cmd_exec;
mod server;

use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Cli, Commands};
use crate::server::{build_tool, init_tracing, load_config, run_serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, warnings) = load_config(&cli.config)?;
    init_tracing(&config.logging)?;
    for warning in &warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    info!("Starting computer-use v{}", env!("CARGO_PKG_VERSION"));

    let tool = build_tool(&config).await?;
    let output_dir = config.computer.output_dir_path();

    match cli.command {
        Commands::Describe => cmd_exec::describe(&tool),
        Commands::Exec {
            action,
            text,
            coordinate,
        } => {
            let request = cmd_exec::exec_request(action, text, coordinate);
            if !cmd_exec::exec(&tool, request, &output_dir).await? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Serve {
            save_screenshots,
            session,
        } => {
            let output_dir = save_screenshots.then_some(output_dir);
            run_serve(tool, session, output_dir).await
        }
    }
}
