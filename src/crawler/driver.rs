//! Crawl driver - the pagination loop
//!
//! This module walks the chain of pages one fetch at a time, accumulating
//! quotes until a page without a next link is reached. There is no retry, no
//! concurrency across pages, and no partial-result recovery: the first fetch
//! or extraction failure aborts the whole crawl.

use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::fetch_page;
use crate::quote::Quote;
use crate::Result;
use reqwest::Client;
use url::Url;

/// Crawls the pagination chain starting at `start_url`
///
/// Each page is fetched and extracted before the next fetch begins; the
/// accumulator preserves page order, then within-page order. The loop ends
/// when a page produces no next address. The chain is trusted to be finite;
/// there is no cycle guard or iteration bound.
///
/// # Arguments
///
/// * `client` - The HTTP client shared across all fetches
/// * `start_url` - The address of the first page
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - Every quote from the full chain
/// * `Err(ScrapeError)` - The first fetch or extraction failure
pub async fn crawl_quotes(client: &Client, start_url: Url) -> Result<Vec<Quote>> {
    let mut all_quotes = Vec::new();
    let mut cursor = Some(start_url);
    let mut pages = 0usize;

    while let Some(url) = cursor {
        tracing::debug!("Fetching {}", url);
        let html = fetch_page(client, &url).await?;

        let page = extract_page(&html, &url)?;
        tracing::debug!("Extracted {} quotes from {}", page.quotes.len(), url);

        all_quotes.extend(page.quotes);
        pages += 1;
        cursor = page.next_url;
    }

    tracing::info!("Crawled {} pages, {} quotes total", pages, all_quotes.len());
    Ok(all_quotes)
}
