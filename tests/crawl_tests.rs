//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full fetch → extract → paginate → write cycle end-to-end.

use quotescrape::crawler::crawl;
use quotescrape::output::write_quotes_csv;
use quotescrape::ScrapeError;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds the HTML for one quote block
fn quote_block(text: &str, author: &str, tags: &[&str]) -> String {
    let tags_html: String = tags
        .iter()
        .map(|t| format!(r#"<a class="tag" href="/tag/{t}/">{t}</a>"#))
        .collect();
    format!(
        r#"<div class="quote">
            <span class="text">{text}</span>
            <small class="author">{author}</small>
            <div class="tags">{tags_html}</div>
        </div>"#
    )
}

/// Builds the HTML for one page, with an optional relative next link
fn page_html(blocks: &[String], next_href: Option<&str>) -> String {
    let body: String = blocks.concat();
    let pager = match next_href {
        Some(href) => format!(
            r#"<nav><ul class="pager"><li class="next"><a href="{href}">Next</a></li></ul></nav>"#
        ),
        None => String::new(),
    };
    format!("<html><body>{body}{pager}</body></html>")
}

/// Mounts a page at `route`, expecting exactly one fetch
async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_crawl() {
    // Scenario: one page, two quote blocks, no next link
    let server = MockServer::start().await;
    let blocks = vec![
        quote_block("Life is what happens.", "John Lennon", &["life", "love"]),
        quote_block("So it goes.", "Kurt Vonnegut", &[]),
    ];
    mount_page(&server, "/", page_html(&blocks, None)).await;

    let quotes = crawl(&format!("{}/", server.uri())).await.unwrap();

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].text, "Life is what happens.");
    assert_eq!(quotes[0].author, "John Lennon");
    assert_eq!(quotes[0].tags, vec!["life", "love"]);
    assert_eq!(quotes[1].author, "Kurt Vonnegut");
    assert!(quotes[1].tags.is_empty());

    // CSV output: header plus one row per quote
    let file = NamedTempFile::new().unwrap();
    write_quotes_csv(&quotes, file.path()).unwrap();
    let csv = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert_eq!(csv.lines().next(), Some("Quote,Author,Tags"));
}

#[tokio::test]
async fn test_three_page_chain() {
    // Scenario: pages with 10, 10, and 4 quotes; each fetched exactly once
    let server = MockServer::start().await;

    let page1: Vec<String> = (0..10)
        .map(|i| quote_block(&format!("Quote {i}."), "A", &[]))
        .collect();
    let page2: Vec<String> = (10..20)
        .map(|i| quote_block(&format!("Quote {i}."), "B", &[]))
        .collect();
    let page3: Vec<String> = (20..24)
        .map(|i| quote_block(&format!("Quote {i}."), "C", &[]))
        .collect();

    mount_page(&server, "/", page_html(&page1, Some("/page/2/"))).await;
    mount_page(&server, "/page/2/", page_html(&page2, Some("/page/3/"))).await;
    mount_page(&server, "/page/3/", page_html(&page3, None)).await;

    let quotes = crawl(&format!("{}/", server.uri())).await.unwrap();

    assert_eq!(quotes.len(), 24);
    // Page order, then within-page order
    assert_eq!(quotes[0].text, "Quote 0.");
    assert_eq!(quotes[10].text, "Quote 10.");
    assert_eq!(quotes[23].text, "Quote 23.");

    // Mock expectations verify the fetch count (exactly 3) on drop
    server.verify().await;
}

#[tokio::test]
async fn test_malformed_page_aborts_crawl() {
    // Scenario: a quote block missing its author element
    let server = MockServer::start().await;
    let html = page_html(
        &[r#"<div class="quote"><span class="text">Unattributed.</span></div>"#.to_string()],
        None,
    );
    mount_page(&server, "/", html).await;

    let err = crawl(&format!("{}/", server.uri())).await.unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::MalformedPage { field: "author", .. }
    ));
}

#[tokio::test]
async fn test_malformed_later_page_discards_everything() {
    // A failure on page 2 aborts the whole crawl; page 1's quotes are lost
    let server = MockServer::start().await;
    let page1 = vec![quote_block("Fine.", "A", &[])];
    let bad = r#"<div class="quote"><small class="author">Nobody</small></div>"#.to_string();

    mount_page(&server, "/", page_html(&page1, Some("/page/2/"))).await;
    mount_page(&server, "/page/2/", page_html(&[bad], None)).await;

    let result = crawl(&format!("{}/", server.uri())).await;

    assert!(matches!(
        result,
        Err(ScrapeError::MalformedPage { field: "text", .. })
    ));
}

#[tokio::test]
async fn test_fetch_failure_aborts_crawl() {
    // Scenario: the start address answers with a server error
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = crawl(&format!("{}/", server.uri())).await.unwrap_err();

    assert!(matches!(err, ScrapeError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_404_on_later_page_aborts_crawl() {
    let server = MockServer::start().await;
    let page1 = vec![quote_block("Only one.", "A", &[])];
    mount_page(&server, "/", page_html(&page1, Some("/page/2/"))).await;
    // /page/2/ is not mounted; wiremock answers 404

    let err = crawl(&format!("{}/", server.uri())).await.unwrap_err();

    assert!(matches!(err, ScrapeError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_invalid_start_address() {
    let err = crawl("not a url").await.unwrap_err();
    assert!(matches!(err, ScrapeError::UrlParse(_)));
}
