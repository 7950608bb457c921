//! Webex API client module
//!
//! This module provides the resilient fetcher and the typed Webex resources
//! the inventory pipeline reads.

mod client;
mod credentials;
pub mod devices;
pub mod locations;
pub mod retry;
pub mod traits;
pub mod workspaces;

pub use client::{ClientConfig, WebexClient};
pub use credentials::TokenResolver;
pub use devices::Device;
pub use locations::{Address, Floor, Location};
pub use retry::RetryPolicy;
pub use traits::{ApiListResponse, WebexResource};
pub use workspaces::Workspace;
