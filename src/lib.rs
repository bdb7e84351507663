//! Quote-Harvest: a paginated quote listing crawler
//!
//! This crate walks a paginated quote listing site page by page, extracts
//! every quote record it finds and writes the collection to a CSV file.

pub mod config;
pub mod crawler;
pub mod output;
pub mod quote;

use thiserror::Error;

/// Default starting page, also the base for resolving every "next" link
pub const HOME_PAGE: &str = "https://quotes.toscrape.com/";

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "quotes.csv";

/// CSV header columns, in output order
pub const QUOTE_FIELDS: [&str; 3] = ["text", "author", "tags"];

/// Main error type for Quote-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Expected element missing from page: {selector}")]
    MissingElement { selector: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Quote-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, CrawlStats};
pub use quote::{Quote, TagList};

/// Crawls every page reachable from the configured home URL and writes the
/// collected quotes to `config.output_path`.
///
/// The file is written once, after the crawl has finished. A failure at any
/// stage aborts the run; nothing is written if the crawl itself fails.
pub async fn run(config: &CrawlConfig) -> Result<CrawlStats> {
    let mut coordinator = crawler::Coordinator::new(config)?;
    let quotes = coordinator.run().await?;

    tracing::info!(
        "Writing {} quotes to {}",
        quotes.len(),
        config.output_path.display()
    );
    output::write_quotes_csv(&quotes, &config.output_path)?;

    Ok(coordinator.stats())
}
