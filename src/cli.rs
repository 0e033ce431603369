//! CLI definitions for computer-use.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// computer-use CLI.
#[derive(Parser)]
#[command(name = "computer-use")]
#[command(about = "Mouse, keyboard and screen control tool for AI agents")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the tool descriptor and definition as JSON
    Describe,

    /// Run a single action and print the result as JSON
    Exec {
        /// Action name (key, type, mouse_move, left_click, ...)
        action: String,

        /// Text to type or key combination to press
        #[arg(long)]
        text: Option<String>,

        /// Target position as X,Y in screenshot pixels
        #[arg(long, value_parser = parse_coordinate)]
        coordinate: Option<(u32, u32)>,
    },

    /// Read JSON action requests from stdin, one per line
    Serve {
        /// Also write screenshots to the output directory
        #[arg(long)]
        save_screenshots: bool,

        /// Session ID reported in logs
        #[arg(long, env = "COMPUTER_USE_SESSION", default_value = "computer-use")]
        session: String,
    },
}

fn parse_coordinate(s: &str) -> Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid coordinate '{}': {}", v.trim(), e))
    };
    Ok((parse(x)?, parse(y)?))
}
