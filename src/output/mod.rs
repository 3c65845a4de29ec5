//! Output module for serializing crawl results
//!
//! This module handles writing the accumulated quotes to the destination
//! file in CSV format.

mod csv;

pub use csv::write_quotes_csv;
