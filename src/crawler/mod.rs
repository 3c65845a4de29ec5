//! Crawler module for page fetching and quote extraction
//!
//! This module contains the core crawling logic:
//! - HTTP client construction and per-page fetching
//! - Quote block extraction and next-page detection
//! - The pagination loop that accumulates quotes across pages

mod driver;
mod extractor;
mod fetcher;

pub use driver::crawl_quotes;
pub use extractor::{extract_page, PageResult};
pub use fetcher::{build_http_client, fetch_page};

use crate::quote::Quote;
use crate::{Result, ScrapeError};
use url::Url;

/// Runs a complete crawl starting from the given address
///
/// Builds the HTTP client, walks the pagination chain, and returns every
/// quote found, in page order then within-page order.
///
/// # Arguments
///
/// * `start_url` - The address of the first page to fetch
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - All quotes from the full chain of pages
/// * `Err(ScrapeError)` - The first fetch or extraction failure
pub async fn crawl(start_url: &str) -> Result<Vec<Quote>> {
    let start = Url::parse(start_url)?;
    let client = build_http_client().map_err(|source| ScrapeError::Fetch {
        url: start_url.to_string(),
        source,
    })?;
    crawl_quotes(&client, start).await
}
