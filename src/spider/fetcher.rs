//! HTTP fetcher implementation
//!
//! This module handles the spider's page requests:
//! - Building an HTTP client with a proper user agent string
//! - GET requests for page content
//! - Content-Type checking (only HTML is usable downstream)
//! - Error classification
//!
//! Retries are deliberately absent: a failed fetch ends its pagination
//! chain, and any retry policy belongs to the transport layer.

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched an HTML page
    Success {
        /// Final URL after redirects, the base for resolving pagination hrefs
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Fetch succeeded but the response is not HTML
    ContentMismatch {
        /// The actual Content-Type received
        content_type: String,
    },

    /// Non-success HTTP status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use quotewalk::config::UserAgentConfig;
/// use quotewalk::spider::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "Quotewalk".to_string(),
///     crawler_version: "0.1".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page
///
/// Sends one GET request and classifies the result:
/// - success with an HTML body → `Success`
/// - success with a non-HTML Content-Type → `ContentMismatch`
/// - non-success status → `HttpError`
/// - transport failure → `NetworkError`
///
/// Redirects are followed by the client; `Success::final_url` reports where
/// the response actually came from so pagination hrefs resolve against it.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchOutcome::HttpError {
                    status_code: status.as_u16(),
                };
            }

            // Check Content-Type
            let content_type = response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();

            if !content_type.contains("text/html") {
                return FetchOutcome::ContentMismatch { content_type };
            }

            // Get body
            match response.text().await {
                Ok(body) => FetchOutcome::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchOutcome::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            // Classify error
            if e.is_timeout() {
                FetchOutcome::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchOutcome::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchOutcome::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
