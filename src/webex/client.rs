//! Webex HTTP client with rate-limit and retry handling

use log::{debug, error, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::api;
use crate::error::{Result, WxError};
use crate::webex::retry::RetryPolicy;
use crate::webex::traits::ApiListResponse;

/// Immutable settings for a [`WebexClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    token: String,
    base_url: String,
    retry: RetryPolicy,
    /// Optional ceiling on pages fetched by [`WebexClient::fetch_all_pages`]
    max_pages: Option<u32>,
}

impl ClientConfig {
    /// Config for the public Webex API with the default retry policy
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: api::BASE_URL.to_string(),
            retry: RetryPolicy::default(),
            max_pages: None,
        }
    }

    /// Point the client at another API root (mock servers, proxies)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}

/// Webex API client
///
/// Requests are issued one at a time; every helper awaits its response
/// before returning.
pub struct WebexClient {
    client: Client,
    config: ClientConfig,
}

impl WebexClient {
    /// Create a new client from an immutable config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(config.retry.request_timeout)
            .timeout(config.retry.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Base URL for API requests (no trailing slash)
    pub(crate) fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.config.token))
            .header("Content-Type", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// GET `url` and return the parsed JSON body
    ///
    /// 429 responses sleep `rate_limit_wait` and re-issue the request with no
    /// upper bound. Transport errors, undecodable bodies and any other non-2xx
    /// status sleep an exponential backoff and count as one attempt; once
    /// `max_retries` attempts have failed the call returns
    /// [`WxError::RetriesExhausted`].
    pub async fn fetch(&self, url: &str) -> Result<serde_json::Value> {
        let policy = &self.config.retry;
        let mut attempt: u32 = 0;

        loop {
            debug!("GET {} (attempt {})", url, attempt + 1);

            let failure = match self.get(url).send().await {
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    warn!(
                        "Rate limit exceeded for {}. Sleeping for {:?}...",
                        url, policy.rate_limit_wait
                    );
                    sleep(policy.rate_limit_wait).await;
                    continue;
                }
                Ok(response) if response.status().is_success() => {
                    match response.json::<serde_json::Value>().await {
                        Ok(body) => return Ok(body),
                        Err(e) => format!("Failed to decode response body: {}", e),
                    }
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    let message = if body.is_empty() {
                        status.canonical_reason().unwrap_or("unexpected status").to_string()
                    } else {
                        body
                    };
                    WxError::Api {
                        status: status.as_u16(),
                        message,
                    }
                    .to_string()
                }
                Err(e) => WxError::Http(e).to_string(),
            };

            let delay = policy.backoff_delay(attempt);
            error!(
                "Request to {} failed: {}. Retrying in {:?}...",
                url, failure, delay
            );
            sleep(delay).await;
            attempt += 1;

            if attempt >= policy.max_retries {
                error!("Giving up on {} after {} attempts", url, attempt);
                return Err(WxError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: attempt,
                    last_error: failure,
                });
            }
        }
    }

    /// Fetch `url` and deserialize the body into `T`
    ///
    /// A body that does not match `T` is a terminal [`WxError::Json`]; it is
    /// not retried.
    pub async fn fetch_as<T>(&self, url: &str, resource_label: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let raw = self.fetch(url).await?;
        serde_json::from_value(raw)
            .map_err(|e| WxError::Json(format!("Failed to parse {}: {}", resource_label, e)))
    }

    /// Fetch a single resource by API path (e.g. "/locations/abc")
    pub async fn fetch_resource_by_path<T>(&self, path: &str, resource_label: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);
        self.fetch_as(&url, resource_label).await
    }

    /// Drain an offset-paginated collection (`max`/`start` query parameters)
    ///
    /// Pages are requested sequentially. The offset advances by the number of
    /// items a page actually returned, and the loop ends on the first page
    /// holding fewer than [`api::PAGE_SIZE`] items. With no page cap
    /// configured the loop is unbounded.
    ///
    /// # Arguments
    /// * `path` - API path, optionally with a query (e.g. "/workspaces?orgId=x")
    /// * `error_context` - Context for error messages (e.g. "workspaces")
    pub async fn fetch_all_pages<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let mut all_items = Vec::new();
        let mut offset: usize = 0;
        let mut pages: u32 = 0;

        loop {
            if let Some(cap) = self.config.max_pages {
                if pages >= cap {
                    error!(
                        "Stopped paging {} after {} full pages ({} items so far)",
                        error_context,
                        pages,
                        all_items.len()
                    );
                    return Err(WxError::PageLimit { pages });
                }
            }

            let url = format!(
                "{}{}{}max={}&start={}",
                self.base_url(),
                path,
                separator,
                api::PAGE_SIZE,
                offset
            );
            let page_context = format!("{} (offset {})", error_context, offset);
            let page: ApiListResponse<T> = self.fetch_as(&url, &page_context).await?;
            let items = page.into_items();
            let count = items.len();
            pages += 1;

            debug!("Page {} of {} returned {} items", pages, error_context, count);
            all_items.extend(items);

            if count < api::PAGE_SIZE {
                break;
            }
            offset += count;
        }

        debug!(
            "Fetched {} total items for {} in {} pages",
            all_items.len(),
            error_context,
            pages
        );
        Ok(all_items)
    }
}

#[cfg(test)]
impl WebexClient {
    /// Client against a mock server with millisecond-scale waits
    pub fn test_client(base_url: &str) -> Self {
        Self::test_client_with(base_url, |policy| policy)
    }

    /// Like [`WebexClient::test_client`] with a tweak applied to the policy
    pub fn test_client_with(base_url: &str, tweak: impl FnOnce(RetryPolicy) -> RetryPolicy) -> Self {
        let policy = RetryPolicy {
            backoff_unit: Duration::from_millis(1),
            rate_limit_wait: Duration::from_millis(5),
            request_timeout: Duration::from_secs(2),
            ..Default::default()
        };
        let config = ClientConfig::new("test-token")
            .with_base_url(base_url)
            .with_retry_policy(tweak(policy));
        Self::new(config).expect("test client should build")
    }
}
