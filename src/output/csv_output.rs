//! CSV writer for quote records

use crate::quote::Quote;
use crate::{HarvestError, QUOTE_FIELDS};
use std::fs::File;
use std::io;
use std::path::Path;

/// Writes quotes to a CSV file, creating or truncating it
///
/// The file is not written atomically: if a row fails, whatever was written
/// before the failure stays on disk.
///
/// # Arguments
///
/// * `quotes` - The quotes, in output order
/// * `path` - Destination file
pub fn write_quotes_csv(quotes: &[Quote], path: &Path) -> Result<(), HarvestError> {
    let file = File::create(path)?;
    write_quotes(quotes, file)?;

    tracing::debug!("Wrote {} rows to {}", quotes.len(), path.display());
    Ok(())
}

/// Writes the header and one row per quote to `writer`
///
/// Rows end in `\r\n`. Fields containing a comma, a double quote or a line
/// break are quoted.
pub fn write_quotes<W: io::Write>(quotes: &[Quote], writer: W) -> Result<(), HarvestError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(QUOTE_FIELDS)?;

    for quote in quotes {
        let tags = quote.tags().to_string();
        csv_writer.write_record([quote.text(), quote.author(), tags.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
