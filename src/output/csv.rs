//! CSV serialization of extracted quotes
//!
//! One header row (`Quote,Author,Tags`), then one row per quote in input
//! order. Tag sequences are joined into a single cell with `", "`; this is a
//! lossy encoding for tags that themselves contain that separator.

use crate::quote::Quote;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column labels of the header row
const HEADER: [&str; 3] = ["Quote", "Author", "Tags"];

/// Separator used to join a quote's tags into one cell
const TAG_SEPARATOR: &str = ", ";

/// Writes the quotes to `path` as a CSV file
///
/// Creates or truncates the destination. The buffered writer is flushed
/// before returning; the file handle is released on every exit path.
///
/// # Arguments
///
/// * `quotes` - The quotes to serialize, in output order
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote all rows
/// * `Err(ScrapeError)` - Destination could not be opened or written
pub fn write_quotes_csv(quotes: &[Quote], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_row(&mut writer, &HEADER)?;
    for quote in quotes {
        let tags = quote.tags.join(TAG_SEPARATOR);
        write_row(&mut writer, &[&quote.text, &quote.author, &tags])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes one CSV row, quoting fields that need it
fn write_row<W: Write>(writer: &mut W, row: &[&str]) -> std::io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(writer, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(writer, "\"{}\"", escaped)?;
        } else {
            write!(writer, "{}", cell)?;
        }
    }
    writeln!(writer)
}

/// A field must be quoted if it contains the delimiter, a quote, or a newline
fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}
