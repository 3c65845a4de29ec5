//! Quotescrape: a quotations site scraper
//!
//! This crate crawls a paginated quotations website, extracts one record per
//! quote block (text, author, tags), follows the "next page" link until the
//! chain ends, and writes the aggregate result to a CSV file.

pub mod crawler;
pub mod output;
pub mod quote;

use thiserror::Error;

/// Main error type for quotescrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Malformed quote block on {url}: missing {field} element")]
    MalformedPage { url: String, field: &'static str },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to write output: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result type alias for quotescrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use crawler::{build_http_client, crawl, extract_page, PageResult};
pub use output::write_quotes_csv;
pub use quote::Quote;
