//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod quote;
pub mod stay;

use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Condotel pricing - resolve nightly and stay prices for listings.
#[derive(Parser, Debug)]
#[command(name = "condotel-pricing")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a single night
    Quote(QuoteArgs),

    /// Price every night of a stay
    Stay(StayArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `condotel-pricing check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments shared by the pricing subcommands.
#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON request file, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for the `quote` subcommand.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Date to price (YYYY-MM-DD); overrides `referenceDate` in the request
    #[arg(long)]
    pub on: Option<NaiveDate>,
}

/// Arguments for the `stay` subcommand.
#[derive(Parser, Debug)]
pub struct StayArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl InputArgs {
    /// Load configuration, apply CLI overrides, and start logging.
    pub fn prepare(&self) -> Result<Config> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(level) = &self.log_level {
            config = config.with_log_level(level)?;
        }
        config.init_logging();
        Ok(config)
    }

    /// Read and parse the JSON request.
    pub fn read_request<T: DeserializeOwned>(&self) -> Result<T> {
        let raw = if self.input == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(&self.input)?
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Load configuration from `path`, or use defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}
