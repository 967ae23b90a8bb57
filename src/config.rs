//! Configuration
//!
//! Every setting has a default, so running with no flags or environment
//! generates (or reuses) `Orders.csv` in the current directory.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::{
    generator::DEFAULT_ORDER_COUNT,
    pipeline::{DEFAULT_FILE_NAME, PipelineOptions},
};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Order expiry configuration
#[derive(Debug, Clone, Parser)]
#[command(
    name = "order-expiry",
    about = "Count orders due today, generating a synthetic order file if none exists",
    long_about = None
)]
pub struct Config {
    /// Order file to read, or to create when absent
    #[arg(short, long, env = "ORDERS_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Number of orders to generate when the file is absent
    #[arg(
        short,
        long,
        env = "ORDER_COUNT",
        default_value_t = DEFAULT_ORDER_COUNT,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub count: u64,

    /// Seed for order generation; random when omitted
    #[arg(long, env = "ORDER_SEED")]
    pub seed: Option<u64>,

    /// Print a table of up to this many due orders
    #[arg(long, env = "SHOW_DUE", default_value_t = 0)]
    pub show: usize,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Pipeline options derived from this configuration.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            path: self.file.clone(),
            order_count: self.count,
        }
    }
}
