//! Webex access token resolution from multiple sources

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, WxError};

/// Token resolution with fallback logic
#[derive(Debug, Default)]
pub struct TokenResolver {
    /// Token file override (defaults to ~/.webex/token)
    token_file: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a resolver that reads the default token file as last resort
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific token file instead of ~/.webex/token
    pub fn with_token_file(path: impl Into<PathBuf>) -> Self {
        Self {
            token_file: Some(path.into()),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (WEBEX_TOKEN, WEBEX_ACCESS_TOKEN - in order)
    /// 3. Token file (~/.webex/token)
    ///
    /// Blank values are skipped.
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.map(str::trim).filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                let token = token.trim();
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token.to_string());
                }
            }
        }

        let path = self.token_file_path();
        match path.as_deref().and_then(read_token_file) {
            Some(token) => {
                debug!("Using token from file");
                Ok(token)
            }
            None => Err(WxError::TokenNotFound(
                self.token_not_found_message(path.as_deref()),
            )),
        }
    }

    fn token_file_path(&self) -> Option<PathBuf> {
        self.token_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(credentials::TOKEN_FILE_PATH)))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, token_file: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let file_info = token_file
            .map(|p| format!(" or in token file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No Webex access token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      wxinventory --token <TOKEN>\n\
             2. Environment var:   export WEBEX_TOKEN=<TOKEN>  (also: WEBEX_ACCESS_TOKEN)\n\
             3. Token file:        ~/{}\n\
             \n\
             Checked: env vars [{}]{}",
            credentials::TOKEN_FILE_PATH,
            env_vars,
            file_info
        )
    }
}

/// Read a token file, returning the first non-blank line
fn read_token_file(path: &Path) -> Option<String> {
    debug!("Looking for token file at: {}", path.display());
    let content = fs::read_to_string(path).ok()?;
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
