//! HTTP fetcher implementation
//!
//! One GET per page, body returned as text whatever the status code.
//! Network faults are returned to the caller untouched; there is no retry.

use crate::config::HttpConfig;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with the configured user agent
///
/// # Example
///
/// ```no_run
/// use quote_harvest::config::HttpConfig;
/// use quote_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a page and returns its body text
///
/// Non-success responses are not treated as failures: their body is
/// returned like any other and handed to the parser.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(HarvestError::Http)` - Connection, DNS, timeout or body read failure
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, HarvestError> {
    tracing::debug!("Visit {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status.is_success() {
        tracing::debug!("{} answered {}", url, status);
    } else {
        tracing::warn!("{} answered {}, parsing body anyway", url, status);
    }

    response.text().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })
}
