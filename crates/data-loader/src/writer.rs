//! Writing cleaned listings back to CSV.
//!
//! The output keeps the input's header exactly, including columns no
//! filter looked at. Nulls are written as empty cells.

use crate::error::Result;
use crate::types::RecordCollection;
use csv::Writer;
use std::io::Write;
use std::path::{Path, PathBuf};

const INPUT_SUFFIX: &str = ".csv";
const OUTPUT_SUFFIX: &str = "_cleaned.csv";

/// Derive the output path for a cleaned file.
///
/// Every `.csv` in the path becomes `_cleaned.csv`. A path without `.csv`
/// gets `_cleaned.csv` appended so the input is never overwritten.
pub fn cleaned_output_path(input: &Path) -> PathBuf {
    let input = input.to_string_lossy();
    if input.contains(INPUT_SUFFIX) {
        PathBuf::from(input.replace(INPUT_SUFFIX, OUTPUT_SUFFIX))
    } else {
        PathBuf::from(format!("{input}{OUTPUT_SUFFIX}"))
    }
}

/// Write a collection to `path`, replacing any existing file.
pub fn write_listings(path: &Path, collection: &RecordCollection) -> Result<()> {
    let writer = Writer::from_path(path)?;
    write_with(writer, collection)?;
    tracing::info!("Wrote {} rows to {}", collection.len(), path.display());
    Ok(())
}

/// Write a collection to any writer (header first, then rows in order).
pub fn write_listings_to_writer<W: Write>(out: W, collection: &RecordCollection) -> Result<()> {
    write_with(Writer::from_writer(out), collection)
}

fn write_with<W: Write>(mut writer: Writer<W>, collection: &RecordCollection) -> Result<()> {
    writer.write_record(collection.schema().columns())?;
    for record in collection {
        writer.write_record(record.values().iter().map(|v| v.as_deref().unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            cleaned_output_path(Path::new("data/nj_scrape.csv")),
            PathBuf::from("data/nj_scrape_cleaned.csv")
        );
    }

    #[test]
    fn test_output_path_without_extension_appends() {
        assert_eq!(
            cleaned_output_path(Path::new("data/nj_scrape")),
            PathBuf::from("data/nj_scrape_cleaned.csv")
        );
    }

    #[test]
    fn test_empty_collection_still_writes_header() {
        let collection = RecordCollection::from_rows(&["placeId", "name"], vec![]);
        let mut buf = Vec::new();
        write_listings_to_writer(&mut buf, &collection).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "placeId,name\n");
    }

    #[test]
    fn test_nulls_written_as_empty_cells() {
        let collection = RecordCollection::from_rows(
            &["name", "address", "phone"],
            vec![vec![Some("Oak Gardens"), None, Some("555-1234")]],
        );
        let mut buf = Vec::new();
        write_listings_to_writer(&mut buf, &collection).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "name,address,phone\nOak Gardens,,555-1234\n"
        );
    }
}
