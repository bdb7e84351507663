//! Integration tests for the crawler
//!
//! These tests use wiremock to serve paginated listing pages and run the
//! full crawl-then-write cycle end-to-end.

use quote_harvest::config::CrawlConfig;
use quote_harvest::crawler::Coordinator;
use quote_harvest::{HarvestError, TagList};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Renders a listing page with the given quotes and optional next href
///
/// Each quote is `(text, author, tags)` with tags separated by spaces.
fn listing_page(quotes: &[(&str, &str, &str)], next_href: Option<&str>) -> String {
    let mut body = String::new();
    for (text, author, tags) in quotes {
        let tags: String = tags
            .split_whitespace()
            .map(|t| format!(r#"<a class="tag" href="/tag/{0}/page/1/">{0}</a>"#, t))
            .collect();
        body.push_str(&format!(
            r#"<div class="quote" itemscope>
                <span class="text" itemprop="text">{}</span>
                <span>by <small class="author" itemprop="author">{}</small>
                <a href="/author/x">(about)</a></span>
                <div class="tags">Tags: <meta class="keywords" content="">{}</div>
            </div>"#,
            text, author, tags
        ));
    }

    let pager = match next_href {
        Some(href) => format!(
            r#"<nav><ul class="pager"><li class="next"><a href="{}">Next <span aria-hidden="true">&rarr;</span></a></li></ul></nav>"#,
            href
        ),
        None => r#"<nav><ul class="pager"><li class="previous"><a href="/">Previous</a></li></ul></nav>"#
            .to_string(),
    };

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"><title>Quotes to Scrape</title></head>
        <body><div class="container"><div class="row"><div class="col-md-8">{}{}</div></div></div></body></html>"#,
        body, pager
    )
}

async fn mount_page(server: &MockServer, page_path: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn test_config(home_url: String, output: &std::path::Path) -> CrawlConfig {
    CrawlConfig {
        home_url,
        ..CrawlConfig::with_output(output)
    }
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open CSV");
    reader
        .records()
        .map(|r| r.expect("Bad CSV row").iter().map(String::from).collect())
        .collect()
}

#[tokio::test]
async fn test_single_page_crawl() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(
            &[
                ("“First.”", "Ada", "love life"),
                ("“Second.”", "Grace", ""),
                ("“Third, with a comma.”", "Alan", "inspirational"),
            ],
            None,
        ),
    )
    .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("quotes.csv");
    let config = test_config(format!("{}/", mock_server.uri()), &output);

    let stats = quote_harvest::run(&config).await.expect("Harvest failed");
    assert_eq!(stats.pages_visited, 1);
    assert_eq!(stats.quotes_collected, 3);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 4, "header + 3 quotes");
    assert_eq!(rows[0], vec!["text", "author", "tags"]);
    assert_eq!(rows[1], vec!["“First.”", "Ada", "['love', 'life']"]);
    assert_eq!(rows[2], vec!["“Second.”", "Grace", "[]"]);
    assert_eq!(rows[3], vec!["“Third, with a comma.”", "Alan", "['inspirational']"]);

    let tags = TagList::parse(&rows[1][2]).unwrap();
    assert_eq!(tags.as_slice(), &["love".to_string(), "life".to_string()]);
}

#[tokio::test]
async fn test_two_page_crawl_concatenates_in_order() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("p1-a", "A", ""), ("p1-b", "B", "")], Some("/page/2/")),
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(&[("p2-a", "C", "x")], None),
    )
    .await;

    let config = CrawlConfig {
        home_url: format!("{}/", mock_server.uri()),
        ..CrawlConfig::default()
    };
    let mut coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let quotes = coordinator.run().await.expect("Crawl failed");

    let texts: Vec<&str> = quotes.iter().map(|q| q.text()).collect();
    assert_eq!(texts, vec!["p1-a", "p1-b", "p2-a"]);
    assert_eq!(coordinator.stats().pages_visited, 2);
    assert_eq!(coordinator.stats().quotes_collected, 3);
}

#[tokio::test]
async fn test_next_links_resolve_against_home_url() {
    let mock_server = MockServer::start().await;

    // Path-relative hrefs: resolving against the current page would request
    // /catalogue/page/2/page/3/ instead of /catalogue/page/3/
    mount_page(
        &mock_server,
        "/catalogue/",
        listing_page(&[("one", "A", "")], Some("page/2/")),
    )
    .await;
    mount_page(
        &mock_server,
        "/catalogue/page/2/",
        listing_page(&[("two", "B", "")], Some("page/3/")),
    )
    .await;
    mount_page(
        &mock_server,
        "/catalogue/page/3/",
        listing_page(&[("three", "C", "")], None),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/catalogue/page/2/page/3/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = CrawlConfig {
        home_url: format!("{}/catalogue/", mock_server.uri()),
        ..CrawlConfig::default()
    };
    let quotes = quote_harvest::crawl(&config).await.expect("Crawl failed");

    let texts: Vec<&str> = quotes.iter().map(|q| q.text()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);

    // Wiremock verifies the expect() counts when mock_server drops
}

#[tokio::test]
async fn test_page_without_quotes_still_follows_next() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", listing_page(&[], Some("/page/2/"))).await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(&[("late", "Z", "")], None),
    )
    .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("quotes.csv");
    let config = test_config(format!("{}/", mock_server.uri()), &output);

    let stats = quote_harvest::run(&config).await.expect("Harvest failed");
    assert_eq!(stats.pages_visited, 2);
    assert_eq!(stats.quotes_collected, 1);
    assert_eq!(read_rows(&output).len(), 2);
}

#[tokio::test]
async fn test_empty_next_href_stops_after_one_page() {
    let mock_server = MockServer::start().await;

    // An empty href joined onto the home URL is the home URL again
    mount_page(&mock_server, "/", listing_page(&[("only", "A", "")], Some(""))).await;

    let config = CrawlConfig {
        home_url: format!("{}/", mock_server.uri()),
        ..CrawlConfig::default()
    };
    let mut coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let quotes = tokio::time::timeout(std::time::Duration::from_secs(5), coordinator.run())
        .await
        .expect("Crawl did not terminate")
        .expect("Crawl failed");

    assert_eq!(quotes.len(), 1);
    assert_eq!(coordinator.stats().pages_visited, 1);
}

#[tokio::test]
async fn test_error_status_body_is_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(listing_page(&[("still here", "Who", "")], None)),
        )
        .mount(&mock_server)
        .await;

    let config = CrawlConfig {
        home_url: format!("{}/", mock_server.uri()),
        ..CrawlConfig::default()
    };
    let quotes = quote_harvest::crawl(&config).await.expect("Crawl failed");
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].text(), "still here");
}

#[tokio::test]
async fn test_malformed_quote_aborts_without_output() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("fine", "A", "")], Some("/page/2/")),
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        r#"<html><body><div class="quote"><span class="text">no author</span></div></body></html>"#
            .to_string(),
    )
    .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("quotes.csv");
    let config = test_config(format!("{}/", mock_server.uri()), &output);

    let result = quote_harvest::run(&config).await;
    assert!(matches!(
        result,
        Err(HarvestError::MissingElement { ref selector }) if selector == ".author"
    ));
    assert!(!output.exists(), "no CSV should be written on a failed crawl");
}

#[tokio::test]
async fn test_network_failure_aborts_crawl() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let dir = tempdir().unwrap();
    let output = dir.path().join("quotes.csv");
    let config = test_config(format!("http://127.0.0.1:{}/", port), &output);

    let result = quote_harvest::run(&config).await;
    match result {
        Err(HarvestError::Http { url, .. }) => {
            assert_eq!(url, format!("http://127.0.0.1:{}/", port))
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
    assert!(!output.exists());
}
