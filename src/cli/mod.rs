//! CLI module for Skybridge
//!
//! Command-line interface definitions and handlers for the Skybridge
//! flight-data gateway.
//!
//! # Commands
//!
//! - `serve` - Start the gateway server
//! - `models` - List dispatchable models
//! - `probe` - Look up one flight from the terminal
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start the gateway with default config
//! skybridge serve
//!
//! # Look up a flight without going through the HTTP surface
//! skybridge probe TK1934
//!
//! # Generate shell completions
//! skybridge completions bash > ~/.bash_completion.d/skybridge
//! ```

pub mod completions;
pub mod config;
pub mod models;
pub mod output;
pub mod probe;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Skybridge - Flight-data model gateway
#[derive(Parser, Debug)]
#[command(
    name = "skybridge",
    version,
    about = "Flight-data model gateway over the AviationStack API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the gateway server
    Serve(ServeArgs),
    /// List dispatchable models
    Models(ModelsArgs),
    /// Fetch flight data for one IATA code
    Probe(ProbeArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "skybridge.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "SKYBRIDGE_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "SKYBRIDGE_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SKYBRIDGE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Flight IATA code to look up (e.g. TK1934)
    pub flight_iata: String,

    /// Path to configuration file
    #[arg(short, long, default_value = "skybridge.toml")]
    pub config: PathBuf,

    /// Print the provider payload verbatim instead of the reshaped table
    #[arg(long)]
    pub raw: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "skybridge.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
