//! HTTP fetcher implementation
//!
//! This module handles the crawler's HTTP requests:
//! - Building the HTTP client with a proper user agent string
//! - GET requests to fetch page content
//! - Mapping non-success statuses and transport failures to errors

use crate::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// User agent sent with every request
const USER_AGENT: &str = concat!("quotescrape/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared across the whole crawl
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and returns its body
///
/// Any non-success status code is a fatal error; there is no retry. The
/// crawl as a whole aborts on the first failed fetch.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page address
///
/// # Returns
///
/// * `Ok(String)` - The raw page markup
/// * `Err(ScrapeError)` - Transport failure or non-success status
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    })
}
