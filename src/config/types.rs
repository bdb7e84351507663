use crate::{DEFAULT_OUTPUT, HOME_PAGE};
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Quote-Harvest
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// First page to fetch, and the base every "next" link is resolved against
    #[serde(rename = "home-url")]
    pub home_url: String,

    /// Destination CSV file
    #[serde(rename = "output-path")]
    pub output_path: PathBuf,

    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds; `None` leaves the client default
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            home_url: HOME_PAGE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

impl CrawlConfig {
    /// Creates a default configuration that writes to `output_path`
    pub fn with_output(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}
