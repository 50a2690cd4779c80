use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "Infinite-looping carousel with a progress page control")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read configuration from this file instead of ~/.config/carousel/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal demo
    Run,
    /// Replay gestures headlessly and print every page-control update
    Simulate {
        /// Number of logical items (defaults to the configured count)
        #[arg(short = 'n', long)]
        items: Option<usize>,
        /// Drag gestures in pages, e.g. `--drag 1.5 --drag=-1`
        #[arg(short = 'd', long = "drag", allow_hyphen_values = true)]
        drags: Vec<f64>,
        /// Scroll samples per drag gesture
        #[arg(long, default_value_t = 1)]
        steps: u32,
        /// Autoscroll beats to run after the drags
        #[arg(short = 'a', long, default_value_t = 0)]
        autoscroll: u32,
        /// Emit JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show or initialize the configuration
    Config {
        /// Print only the configuration file path
        #[arg(long)]
        path: bool,
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(AppConfig::from_toml_str(&content)?)
        }
        None => Ok(AppConfig::load()?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_ref())?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Simulate {
            items,
            drags,
            steps,
            autoscroll,
            json,
        }) => {
            let options = commands::simulate::SimulateOptions {
                items,
                drags,
                steps,
                autoscroll_beats: autoscroll,
                json,
            };
            commands::simulate::run(&config, &options)
        }
        Some(Commands::Config { path, init }) => commands::config::run(&config, path, init),
    }
}
