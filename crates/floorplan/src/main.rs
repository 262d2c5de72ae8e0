//! Floorplan CLI - extract square footage and floor counts from floor
//! plan images with a hosted vision model.
//!
//! # Usage
//!
//! ```bash
//! # Analyze every .jpeg under $IMAGES_DIR
//! REPLICATE_API_TOKEN=... IMAGES_DIR=./plans floorplan run
//!
//! # Analyze a specific directory
//! floorplan run ./plans
//!
//! # Send the extraction prompt with no image (connectivity check)
//! floorplan probe
//!
//! # View configuration
//! floorplan config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Floorplan - floor plan analysis via a hosted vision model.
#[derive(Parser, Debug)]
#[command(name = "floorplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a directory of floor plan images
    Run(cli::run::RunArgs),

    /// Send the extraction prompt without an image and print the reply
    Probe(cli::probe::ProbeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match floorplan_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `floorplan config path`."
            );
            floorplan_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("floorplan v{}", floorplan_core::VERSION);

    match cli.command {
        Commands::Run(args) => cli::run::execute(args, config).await,
        Commands::Probe(args) => cli::probe::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
