//! HTML parser for quote listing pages
//!
//! This module extracts from a listing page:
//! - Every quote container with its text, author and tags
//! - The raw href of the pagination "next" link, if any
//!
//! Text is taken verbatim from the markup. Nothing is trimmed or normalized.

use crate::quote::{Quote, TagList};
use crate::HarvestError;
use scraper::{ElementRef, Html, Selector};

const QUOTE_SELECTOR: &str = ".quote";
const TEXT_SELECTOR: &str = ".text";
const AUTHOR_SELECTOR: &str = ".author";
const TAG_SELECTOR: &str = ".tag";
const NEXT_SELECTOR: &str = ".pager .next a";

/// Extracted information from a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Quotes in document order
    pub quotes: Vec<Quote>,

    /// The "next" link exactly as written in the href attribute; an empty
    /// href is reported as `None`
    pub next_href: Option<String>,
}

/// Parses a listing page into its quotes and "next" link
///
/// # Errors
///
/// A quote container without a `.text` or `.author` element, or a "next"
/// anchor without an `href`, is reported as [`HarvestError::MissingElement`].
///
/// # Example
///
/// ```
/// use quote_harvest::crawler::parse_page;
///
/// let html = r#"<div class="quote"><span class="text">Hi</span>
///     <small class="author">Me</small><a class="tag">greeting</a></div>"#;
/// let page = parse_page(html).unwrap();
/// assert_eq!(page.quotes.len(), 1);
/// assert_eq!(page.next_href, None);
/// ```
pub fn parse_page(html: &str) -> Result<ParsedPage, HarvestError> {
    let document = Html::parse_document(html);
    let selectors = QuoteSelectors::new()?;

    let quote_selector = selector(QUOTE_SELECTOR)?;
    let quotes = document
        .select(&quote_selector)
        .map(|container| parse_quote(container, &selectors))
        .collect::<Result<Vec<_>, _>>()?;

    let next_href = extract_next_href(&document)?;

    Ok(ParsedPage { quotes, next_href })
}

/// Selectors applied inside each quote container
struct QuoteSelectors {
    text: Selector,
    author: Selector,
    tag: Selector,
}

impl QuoteSelectors {
    fn new() -> Result<Self, HarvestError> {
        Ok(Self {
            text: selector(TEXT_SELECTOR)?,
            author: selector(AUTHOR_SELECTOR)?,
            tag: selector(TAG_SELECTOR)?,
        })
    }
}

/// Builds a single quote from its container element
fn parse_quote(
    container: ElementRef<'_>,
    selectors: &QuoteSelectors,
) -> Result<Quote, HarvestError> {
    let text = required_text(container, &selectors.text, TEXT_SELECTOR)?;
    let author = required_text(container, &selectors.author, AUTHOR_SELECTOR)?;

    let tags = container
        .select(&selectors.tag)
        .map(|tag| tag.text().collect::<String>())
        .collect::<Vec<_>>();

    Ok(Quote::new(text, author, TagList::from(tags)))
}

/// Text content of the first element under `container` matching `sel`
fn required_text(
    container: ElementRef<'_>,
    sel: &Selector,
    css: &str,
) -> Result<String, HarvestError> {
    let text = container
        .select(sel)
        .next()
        .map(|element| element.text().collect::<String>());

    text.ok_or_else(|| HarvestError::MissingElement {
        selector: css.to_string(),
    })
}

/// Raw href of the pagination "next" link
///
/// An empty href counts as no link, so pagination ends there.
fn extract_next_href(document: &Html) -> Result<Option<String>, HarvestError> {
    let next_selector = selector(NEXT_SELECTOR)?;
    let anchor = document.select(&next_selector).next();

    match anchor {
        Some(anchor) => anchor
            .value()
            .attr("href")
            .map(|href| Some(href.to_string()).filter(|h| !h.is_empty()))
            .ok_or_else(|| HarvestError::MissingElement {
                selector: format!("{} [href]", NEXT_SELECTOR),
            }),
        None => Ok(None),
    }
}

fn selector(css: &str) -> Result<Selector, HarvestError> {
    Selector::parse(css).map_err(|e| HarvestError::Selector(format!("{}: {:?}", css, e)))
}
