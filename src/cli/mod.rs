//! CLI argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{api, defaults, retry};
use crate::webex::RetryPolicy;

/// Webex device inventory exporter
#[derive(Parser, Debug)]
#[command(name = "wxinventory")]
#[command(version)]
#[command(
    about = "Export Webex devices with their workspace, location and floor",
    long_about = None
)]
pub struct Cli {
    /// Webex access token (overrides env vars and token file)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Webex API base URL
    #[arg(long, env = "WEBEX_BASE_URL", default_value = api::BASE_URL)]
    pub base_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Directory for the export file
    #[arg(short = 'd', long, default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Hide spinner and progress bar
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Fail instead of paging past this many full workspace pages
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,

    /// Seconds to wait after a 429 (rate limited) response
    #[arg(long, default_value_t = retry::RATE_LIMIT_WAIT_SECS)]
    pub rate_limit_wait: u64,

    /// Failed attempts allowed per request before the run aborts
    #[arg(long, default_value_t = retry::MAX_RETRIES, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_retries: u32,
}

impl Cli {
    /// Retry policy built from the CLI knobs
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_rate_limit_wait(Duration::from_secs(self.rate_limit_wait))
            .with_max_retries(self.max_retries)
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values file (default)
    Csv,
    /// JSON array file
    Json,
    /// YAML file
    Yaml,
    /// ASCII table on stdout
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
