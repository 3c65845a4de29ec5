//! Quote extraction from page markup
//!
//! This module parses one page of HTML and extracts:
//! - Every quote block on the page, in document order
//! - The next-page link, resolved against the base address

use crate::quote::Quote;
use crate::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Result of extracting one page
///
/// `next_url` is `None` on the terminal page of the pagination chain.
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Quotes found on this page, in document order
    pub quotes: Vec<Quote>,

    /// Absolute address of the next page, if any
    pub next_url: Option<Url>,
}

/// Parses a fixed selector string
///
/// The selector strings in this module are literals, so a parse failure is an
/// internal invariant violation rather than bad input; it is still propagated
/// as an error instead of panicking.
fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

/// Extracts all quotes and the next-page link from one page of markup
///
/// Each `.quote` block must contain a `.text` and an `.author` sub-element;
/// a block missing either is a malformed page and aborts extraction. Tag
/// labels (`.tag` sub-elements) are collected in document order and may be
/// empty. The `.next > a` control's href, when present, is joined against
/// `base_url` to form the absolute next address.
///
/// Pure transformation over the given markup; no side effects.
///
/// # Arguments
///
/// * `html` - The raw markup of one page
/// * `base_url` - The page's own address, used to resolve relative links
///
/// # Returns
///
/// * `Ok(PageResult)` - Quotes in document order plus the optional next address
/// * `Err(ScrapeError)` - A malformed quote block or an unresolvable next link
pub fn extract_page(html: &str, base_url: &Url) -> Result<PageResult> {
    let document = Html::parse_document(html);

    let quote_selector = selector(".quote")?;
    let text_selector = selector(".text")?;
    let author_selector = selector(".author")?;
    let tag_selector = selector(".tag")?;

    let mut quotes = Vec::new();
    for block in document.select(&quote_selector) {
        quotes.push(extract_quote(
            block,
            &text_selector,
            &author_selector,
            &tag_selector,
            base_url,
        )?);
    }

    let next_url = extract_next_url(&document, base_url)?;

    Ok(PageResult { quotes, next_url })
}

/// Extracts one quote from a single quote block
fn extract_quote(
    block: ElementRef,
    text_selector: &Selector,
    author_selector: &Selector,
    tag_selector: &Selector,
    base_url: &Url,
) -> Result<Quote> {
    let text = block
        .select(text_selector)
        .next()
        .map(element_text)
        .ok_or_else(|| ScrapeError::MalformedPage {
            url: base_url.to_string(),
            field: "text",
        })?;

    let author = block
        .select(author_selector)
        .next()
        .map(element_text)
        .ok_or_else(|| ScrapeError::MalformedPage {
            url: base_url.to_string(),
            field: "author",
        })?;

    let tags = block.select(tag_selector).map(element_text).collect();

    Ok(Quote { text, author, tags })
}

/// Locates the next-page control and resolves its target
///
/// Returns `Ok(None)` when the page has no next link, which signals the
/// terminal page of the chain.
fn extract_next_url(document: &Html, base_url: &Url) -> Result<Option<Url>> {
    let next_selector = selector(".next > a")?;

    match document
        .select(&next_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
    {
        Some(href) => Ok(Some(base_url.join(href)?)),
        None => Ok(None),
    }
}

/// Collects an element's text content, trimmed
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
