//! Waypoint CLI - Shortest walking routes across campus
//!
//! Loads a campus map from plain-text data files and answers route queries
//! with turn-by-turn compass directions.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod constants;
mod output;

use commands::*;
use config::WaypointConfig;
use output::OutputFormat;

/// Shortest walking routes across campus.
#[derive(Parser)]
#[command(name = "waypoint")]
#[command(author, version)]
#[command(about = "Shortest walking routes across campus")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  waypoint buildings           List all buildings
  waypoint route CSE MGH       Walk from CSE to MGH
  waypoint shell               Interactive route finder")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Paths data file (overrides config)
    #[arg(long, global = true, env = "WAYPOINT_PATHS")]
    paths: Option<PathBuf>,

    /// Buildings data file (overrides config)
    #[arg(long, global = true, env = "WAYPOINT_BUILDINGS")]
    buildings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all buildings, sorted by abbreviation
    #[command(visible_alias = "b")]
    Buildings,

    /// Find the shortest route between two buildings
    #[command(visible_alias = "r")]
    Route {
        /// Abbreviated name of the starting building
        from: String,

        /// Abbreviated name of the destination building
        to: String,
    },

    /// Interactive menu for routes and building lists
    Shell,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: completions::Shell,

        /// Show installation instructions instead of generating completions
        #[arg(long)]
        instructions: bool,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .waypointrc.toml
    let config = WaypointConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    let files = config.data_files(cli.paths, cli.buildings);
    let speed = config.walking_speed();
    tracing::debug!(?files, speed, ?format, "Resolved settings");

    match command {
        Commands::Buildings => buildings::run(&files, format).await,
        Commands::Route { from, to } => route::run(&from, &to, &files, speed, format).await,
        Commands::Shell => shell::run(&files, speed).await,
        Commands::Completions {
            shell,
            instructions,
        } => completions::run(shell, &mut Cli::command(), instructions, format),
    }
}
