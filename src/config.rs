/// Configuration constants for the Webex API
pub mod api {
    /// Base URL for the Webex REST API
    pub const BASE_URL: &str = "https://webexapis.com/v1";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Devices endpoint
    pub const DEVICES: &str = "devices";

    /// Locations endpoint
    pub const LOCATIONS: &str = "locations";

    /// Floors sub-collection under a location
    pub const FLOORS: &str = "floors";

    /// Page size for offset-paginated collections (`max` query parameter)
    pub const PAGE_SIZE: usize = 200;
}

/// Retry and rate-limit defaults for the resilient fetcher
pub mod retry {
    /// Seconds to wait after a 429 before re-issuing the request
    pub const RATE_LIMIT_WAIT_SECS: u64 = 10;

    /// Base of the exponential backoff (delay = factor ^ attempt)
    pub const BACKOFF_FACTOR: u32 = 2;

    /// Retryable failures tolerated before giving up
    pub const MAX_RETRIES: u32 = 5;

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["WEBEX_TOKEN", "WEBEX_ACCESS_TOKEN"];

    /// Token file path relative to HOME
    pub const TOKEN_FILE_PATH: &str = ".webex/token";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default directory for export files
    pub const OUTPUT_DIR: &str = ".";

    /// Prefix of generated export file names
    pub const FILE_PREFIX: &str = "webex_devices_and_workspaces";
}
