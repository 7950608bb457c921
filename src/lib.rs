//! wxinventory - Export Webex devices with their workspace context
//!
//! Walks every workspace in a Webex organization and produces one row per
//! device, enriched with the workspace's location name, postal address and
//! floor number.
//!
//! # Features
//!
//! - Rate-limit aware fetching (429s wait and retry without limit)
//! - Exponential backoff on transient failures
//! - Offset pagination over the workspace collection
//! - CSV, JSON, YAML or table output
//!
//! # Example
//!
//! ```bash
//! # Export to ./webex_devices_and_workspaces_<timestamp>.csv
//! WEBEX_TOKEN=... wxinventory
//!
//! # JSON into a reports directory
//! wxinventory -t <TOKEN> -f json -d reports
//!
//! # Print a table instead of writing a file
//! wxinventory -f table
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod output;
pub mod ui;
pub mod webex;

pub use cli::{Cli, OutputFormat};
pub use error::{Result, WxError};
pub use inventory::{format_address, ExportRecord, InventoryPipeline, PipelineState};
pub use output::{sink_for, ExportSink, FileExporter, FileFormat, TableExporter};
pub use webex::{
    ClientConfig, Device, Floor, Location, RetryPolicy, TokenResolver, WebexClient, Workspace,
};
