//! Quotescrape main entry point
//!
//! This is the command-line interface for the quotescrape crawler.

use clap::Parser;
use quotescrape::crawler::crawl;
use quotescrape::output::write_quotes_csv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default start address of the pagination chain
const DEFAULT_START_URL: &str = "https://quotes.toscrape.com/";

/// Quotescrape: a quotations site scraper
///
/// Crawls a paginated quotations site, following the "next page" link until
/// the last page, and saves every quote (text, author, tags) to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "quotescrape")]
#[command(version)]
#[command(about = "Scrape a paginated quotations site to CSV", long_about = None)]
struct Cli {
    /// Destination CSV file
    #[arg(value_name = "OUTPUT", default_value = "quotes.csv")]
    output: PathBuf,

    /// Start address of the pagination chain
    #[arg(long, default_value = DEFAULT_START_URL)]
    url: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Starting crawl at {}", cli.url);
    let quotes = crawl(&cli.url).await?;

    write_quotes_csv(&quotes, &cli.output)?;
    println!("Saved {} quotes to {}", quotes.len(), cli.output.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotescrape=info,warn"),
            1 => EnvFilter::new("quotescrape=debug,info"),
            2 => EnvFilter::new("quotescrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
