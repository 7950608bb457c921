use std::fmt;

/// Error type for Webex inventory operations
#[derive(Debug)]
pub enum WxError {
    /// HTTP request failed outside the retry loop
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// A request kept failing until the retry budget ran out
    RetriesExhausted {
        url: String,
        attempts: u32,
        last_error: String,
    },
    /// Pagination hit the configured page cap while pages were still full
    PageLimit { pages: u32 },
    /// Token not found in any source
    TokenNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Filesystem error
    Io(String),
    /// Export sink failed to persist records
    Export(String),
}

impl fmt::Display for WxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WxError::Http(e) => write!(f, "HTTP request failed: {}", e),
            WxError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            WxError::RetriesExhausted {
                url,
                attempts,
                last_error,
            } => write!(
                f,
                "Giving up on {} after {} failed attempts: {}",
                url, attempts, last_error
            ),
            WxError::PageLimit { pages } => write!(
                f,
                "Pagination stopped after {} pages while the API still returned full pages",
                pages
            ),
            WxError::TokenNotFound(msg) => write!(f, "{}", msg),
            WxError::Json(msg) => write!(f, "JSON error: {}", msg),
            WxError::Io(msg) => write!(f, "IO error: {}", msg),
            WxError::Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for WxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WxError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WxError {
    fn from(err: reqwest::Error) -> Self {
        WxError::Http(err)
    }
}

impl From<serde_json::Error> for WxError {
    fn from(err: serde_json::Error) -> Self {
        WxError::Json(err.to_string())
    }
}

impl From<std::io::Error> for WxError {
    fn from(err: std::io::Error) -> Self {
        WxError::Io(err.to_string())
    }
}

impl From<csv::Error> for WxError {
    fn from(err: csv::Error) -> Self {
        WxError::Export(err.to_string())
    }
}

/// Result type alias for Webex inventory operations
pub type Result<T> = std::result::Result<T, WxError>;
