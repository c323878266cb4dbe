//! # Data Loader Crate
//!
//! This crate handles loading and saving scraped business-listing CSV files.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Schema, Record, RecordCollection)
//! - **parser**: Parse a CSV file into a RecordCollection
//! - **writer**: Write a RecordCollection back out, header preserved
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{read_listings, write_listings, cleaned_output_path};
//! use std::path::Path;
//!
//! let input = Path::new("data/nj_assisted_living.csv");
//! let listings = read_listings(input)?;
//!
//! for record in &listings {
//!     println!("{}", record.field_or_default("name"));
//! }
//!
//! write_listings(&cleaned_output_path(input), &listings)?;
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod writer;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{read_listings, read_listings_from_reader};
pub use types::{fields, Record, RecordCollection, Schema};
pub use writer::{cleaned_output_path, write_listings, write_listings_to_writer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_creation() {
        let collection = RecordCollection::from_rows(&[fields::NAME], vec![]);

        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
        assert!(collection.schema().has_column(fields::NAME));
        assert!(!collection.schema().has_column(fields::PLACE_ID));
    }
}
