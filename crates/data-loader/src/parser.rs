//! Parser for scraped listing CSV files.
//!
//! The first row is the header and defines the schema; every following
//! row becomes a `Record`. Empty cells are stored as nulls.
//!
//! Rust concepts you'll see here:
//! - Generic readers (`impl Read`) so tests can parse from memory
//! - Error handling with `?` and `map_err` for positional context
//! - Sharing the schema between rows with `Arc`

use crate::error::{DataLoadError, Result};
use crate::types::{Record, RecordCollection, Schema};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

/// Load a listing file from disk.
///
/// Fails if the file can't be opened, has no header row, or contains a
/// malformed row. Nothing is returned on partial success.
pub fn read_listings(path: &Path) -> Result<RecordCollection> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let collection = read_listings_from_reader(file, &path.display().to_string())?;
    tracing::info!(
        "Loaded {} rows ({} columns) from {}",
        collection.len(),
        collection.schema().len(),
        path.display()
    );
    Ok(collection)
}

/// Parse listings from any reader.
///
/// `source` names the input in error messages.
pub fn read_listings_from_reader<R: Read>(reader: R, source: &str) -> Result<RecordCollection> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers().map_err(|e| to_parse_error(e, source))?.clone();
    if headers.is_empty() {
        return Err(DataLoadError::MissingHeader {
            path: source.to_string(),
        });
    }

    let schema = Arc::new(Schema::new(headers.iter()));
    let mut collection = RecordCollection::new(schema.clone());

    for row in rdr.records() {
        let row = row.map_err(|e| to_parse_error(e, source))?;
        collection.push(Record::new(schema.clone(), row_values(&row)));
    }

    Ok(collection)
}

fn row_values(row: &StringRecord) -> Vec<Option<String>> {
    row.iter()
        .map(|cell| {
            if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            }
        })
        .collect()
}

/// Attach the file name and line to a csv error when the reader knows it
fn to_parse_error(e: csv::Error, source: &str) -> DataLoadError {
    match e.position() {
        Some(position) => DataLoadError::ParseError {
            file: source.to_string(),
            line: position.line(),
            reason: e.to_string(),
        },
        None => DataLoadError::CsvError(e),
    }
}
