//! Crawler coordinator - the page-walking loop
//!
//! Starting from the home URL, the coordinator fetches a page, parses it,
//! appends its quotes to the accumulator and follows the "next" link until a
//! page has none. Requests are strictly sequential.

use crate::config::CrawlConfig;
use crate::crawler::parser::parse_page;
use crate::crawler::{build_http_client, fetch_page};
use crate::quote::Quote;
use crate::HarvestError;
use reqwest::Client;
use url::Url;

/// Counters for a single crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Pages fetched and parsed
    pub pages_visited: usize,

    /// Quotes collected across all pages
    pub quotes_collected: usize,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    home_url: Url,
    client: Client,
    stats: CrawlStats,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HarvestError)` - The home URL is invalid or the client failed to build
    pub fn new(config: &CrawlConfig) -> Result<Self, HarvestError> {
        let home_url = Url::parse(&config.home_url)?;
        let client = build_http_client(&config.http)?;

        Ok(Self {
            home_url,
            client,
            stats: CrawlStats::default(),
        })
    }

    /// The URL the crawl starts from
    pub fn home_url(&self) -> &Url {
        &self.home_url
    }

    /// Statistics for the most recent [`Coordinator::run`]
    pub fn stats(&self) -> CrawlStats {
        self.stats
    }

    /// Runs the crawl to completion
    ///
    /// There is no page limit: pagination that never ends, or that links back
    /// to an earlier page, keeps the crawl going indefinitely.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Quote>)` - All quotes, page by page in visiting order
    /// * `Err(HarvestError)` - The first fetch or parse failure; no partial results
    pub async fn run(&mut self) -> Result<Vec<Quote>, HarvestError> {
        self.stats = CrawlStats::default();
        tracing::info!("Starting crawl at {}", self.home_url);

        let mut quotes = Vec::new();
        let mut next_url = Some(self.home_url.clone());

        while let Some(url) = next_url.take() {
            let html = fetch_page(&self.client, &url).await?;
            let page = parse_page(&html)?;

            self.stats.pages_visited += 1;
            self.stats.quotes_collected += page.quotes.len();
            tracing::info!(
                "[page {}] {} quotes from {}",
                self.stats.pages_visited,
                page.quotes.len(),
                url
            );

            quotes.extend(page.quotes);

            if let Some(href) = page.next_href {
                let resolved = resolve_next(&self.home_url, &href)?;
                tracing::debug!("Next page {} -> {}", href, resolved);
                next_url = Some(resolved);
            }
        }

        tracing::info!(
            "Crawl finished: {} pages, {} quotes",
            self.stats.pages_visited,
            self.stats.quotes_collected
        );

        Ok(quotes)
    }
}

/// Resolves a raw "next" href against the home URL
///
/// The base is always the home URL, never the page the link was found on.
///
/// # Example
///
/// ```
/// use quote_harvest::crawler::resolve_next;
/// use url::Url;
///
/// let home = Url::parse("https://example.com/").unwrap();
/// let next = resolve_next(&home, "/page/3/").unwrap();
/// assert_eq!(next.as_str(), "https://example.com/page/3/");
/// ```
pub fn resolve_next(home_url: &Url, href: &str) -> Result<Url, HarvestError> {
    Ok(home_url.join(href)?)
}
