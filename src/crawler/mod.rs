//! Crawler module for page fetching and quote extraction
//!
//! This module contains the core crawling logic:
//! - HTTP fetching, one GET per page
//! - HTML parsing of quote containers and the pagination link
//! - The page-walking loop that ties them together

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{resolve_next, Coordinator, CrawlStats};
pub use fetcher::{build_http_client, fetch_page};
pub use parser::{parse_page, ParsedPage};

use crate::config::CrawlConfig;
use crate::quote::Quote;
use crate::HarvestError;

/// Runs a complete crawl and returns every quote found
///
/// Pages are visited one at a time starting at `config.home_url`, following
/// one "next" link per page until a page has none.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - All quotes, in page order then document order
/// * `Err(HarvestError)` - The crawl failed
pub async fn crawl(config: &CrawlConfig) -> Result<Vec<Quote>, HarvestError> {
    Coordinator::new(config)?.run().await
}
