use crate::core::{Book, Catalog};
use crate::utils::error::{Result, RowError, ShelfError};
use std::fs::File;
use std::path::Path;

/// Outcome of a bulk import. Partial success is the normal case: valid rows
/// are appended, bad rows are reported here and skipped.
#[derive(Debug)]
pub struct ImportSummary {
    pub added: usize,
    pub errors: Vec<RowError>,
}

const EXPECTED_FIELDS: usize = 4;

/// Loads books from a comma-separated UTF-8 file of
/// `title,author,genre,rating` rows. The first row is a header and is always
/// discarded unread. Each remaining row must have exactly four fields and a
/// rating that parses as a decimal in [0, 5]; rows that don't are skipped
/// and reported in the summary while the rest of the file is processed.
///
/// Fails with `SourceNotFound` when the file cannot be opened, in which case
/// the catalog is untouched.
pub fn load_csv(path: impl AsRef<Path>, catalog: &mut Catalog) -> Result<ImportSummary> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|_| ShelfError::SourceNotFound {
        path: path.display().to_string(),
    })?;

    tracing::info!("Importing books from {}", path.display());

    // flexible: short and long rows come through as records we can count
    // and reject per-row instead of aborting the stream.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut added = 0usize;
    let mut errors = Vec::new();

    for (index, row) in reader.records().enumerate() {
        if index == 0 {
            // header row, never validated or used
            continue;
        }

        match parse_row(row) {
            Ok(book) => {
                catalog.append(book);
                added += 1;
            }
            Err(err) => {
                tracing::warn!("Skipping row: {}", err);
                errors.push(err);
            }
        }
    }

    tracing::info!(
        "Import finished: {} added, {} rows skipped",
        added,
        errors.len()
    );

    Ok(ImportSummary { added, errors })
}

fn parse_row(row: csv::Result<csv::StringRecord>) -> std::result::Result<Book, RowError> {
    let record = row.map_err(|err| {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        RowError::Malformed { line, source: err }
    })?;

    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() != EXPECTED_FIELDS {
        return Err(RowError::FieldCount {
            line,
            count: record.len(),
        });
    }

    let raw_rating = &record[3];
    let rating = raw_rating
        .trim()
        .parse::<f64>()
        .map_err(|err| RowError::Rating {
            line,
            value: raw_rating.to_string(),
            reason: err.to_string(),
        })?;

    Book::new(&record[0], &record[1], &record[2], rating).map_err(|err| RowError::Rating {
        line,
        value: raw_rating.to_string(),
        reason: err.to_string(),
    })
}
