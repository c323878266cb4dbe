//! Core domain types for scraped business listings.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - `Arc` for sharing one schema between thousands of rows
//! - `Option<T>` for nullable cells
//! - Consuming methods (`self`) that hand ownership to the next stage
//! - HashMap for column-name lookups

use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Field Names
// =============================================================================
// Column names produced by the Google Maps scraper that the cleaner cares about

/// Well-known listing columns.
pub mod fields {
    pub const PLACE_ID: &str = "placeId";
    pub const NAME: &str = "name";
    pub const CATEGORIES: &str = "categories";
    pub const CATEGORY_NAME: &str = "categoryName";
    pub const ADDRESS: &str = "address";
    pub const STATE: &str = "state";
    pub const PHONE: &str = "phone";
    pub const PERMANENTLY_CLOSED: &str = "permanentlyClosed";
    pub const TEMPORARILY_CLOSED: &str = "temporarilyClosed";
}

// =============================================================================
// Schema
// =============================================================================

/// Ordered column names of a listing file, taken from its header row.
///
/// If a header repeats a column name, lookups resolve to the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema from header names, in file order.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            index.entry(column.clone()).or_insert(position);
        }
        Self { columns, index }
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column, or `None` if the file never had it
    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// =============================================================================
// Record
// =============================================================================

/// One business-listing row.
///
/// Values line up with the schema's columns. An empty CSV cell is stored
/// as `None` (null).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<Option<String>>,
}

impl Record {
    /// Create a record; short rows are padded with nulls so every
    /// schema column has a slot.
    pub fn new(schema: Arc<Schema>, mut values: Vec<Option<String>>) -> Self {
        if values.len() < schema.len() {
            values.resize(schema.len(), None);
        }
        Self { schema, values }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Raw cell values in column order
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Look up a field by name.
    ///
    /// Returns `None` both when the column doesn't exist and when the
    /// cell is null.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.schema
            .position(field)
            .and_then(|position| self.values.get(position))
            .and_then(|value| value.as_deref())
    }

    /// Look up a field, falling back to the empty string.
    ///
    /// Every filtering stage reads fields through this helper, so a missing
    /// column or null cell behaves like text that matches nothing.
    pub fn field_or_default(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// True when the field exists and holds a non-null value
    pub fn is_present(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Interpret a field as a boolean flag.
    ///
    /// Only `true` (any letter case, surrounding whitespace ignored) counts;
    /// missing, null and anything else read as `false`.
    pub fn flag(&self, field: &str) -> bool {
        self.field_or_default(field).trim().eq_ignore_ascii_case("true")
    }
}

// =============================================================================
// Record Collection
// =============================================================================

/// An ordered collection of listings sharing one schema.
///
/// Order is the order rows appeared in the source file. Stages consume a
/// collection and return a new one; they never reorder or edit rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCollection {
    schema: Arc<Schema>,
    records: Vec<Record>,
}

impl RecordCollection {
    /// Creates a new, empty collection for the given schema
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    /// Convenience constructor from plain string cells.
    ///
    /// `None` cells become nulls. Mostly useful for tests and benchmarks.
    pub fn from_rows<S: AsRef<str>>(columns: &[S], rows: Vec<Vec<Option<&str>>>) -> Self {
        let schema = Arc::new(Schema::new(columns.iter().map(|c| c.as_ref().to_string())));
        let mut collection = Self::new(schema.clone());
        for row in rows {
            let values = row.into_iter().map(|cell| cell.map(str::to_string)).collect();
            collection.push(Record::new(schema.clone(), values));
        }
        collection
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Append a record at the end of the collection
    pub fn push(&mut self, record: Record) {
        debug_assert_eq!(
            record.schema.as_ref(),
            self.schema.as_ref(),
            "record schema must match collection schema"
        );
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Consume the collection and return the records matching `keep`,
    /// in their original relative order.
    pub fn keep_where<F>(self, mut keep: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let records = self.records.into_iter().filter(|record| keep(record)).collect();
        Self {
            schema: self.schema,
            records,
        }
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_and_null_read_as_empty() {
        let collection = RecordCollection::from_rows(
            &["name", "phone"],
            vec![vec![Some("Sunrise Manor"), None]],
        );
        let record = &collection.records()[0];

        assert_eq!(record.get("name"), Some("Sunrise Manor"));
        assert_eq!(record.get("phone"), None);
        assert_eq!(record.field_or_default("phone"), "");
        assert_eq!(record.field_or_default("state"), "");
        assert!(!record.is_present("state"));
    }

    #[test]
    fn test_flag_parsing() {
        let collection = RecordCollection::from_rows(
            &["a", "b", "c", "d"],
            vec![vec![Some("True"), Some(" TRUE "), Some("False"), Some("yes")]],
        );
        let record = &collection.records()[0];

        assert!(record.flag("a"));
        assert!(record.flag("b"));
        assert!(!record.flag("c"));
        assert!(!record.flag("d"));
        assert!(!record.flag("missing"));
    }

    #[test]
    fn test_keep_where_preserves_order() {
        let collection = RecordCollection::from_rows(
            &["placeId"],
            vec![vec![Some("a")], vec![Some("b")], vec![Some("c")], vec![Some("d")]],
        );

        let kept = collection.keep_where(|r| r.field_or_default("placeId") != "b");
        let ids: Vec<&str> = kept.iter().map(|r| r.field_or_default("placeId")).collect();

        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_duplicate_header_resolves_to_first() {
        let schema = Schema::new(["name", "name", "phone"]);
        assert_eq!(schema.position("name"), Some(0));
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_short_row_is_padded() {
        let schema = Arc::new(Schema::new(["name", "phone"]));
        let record = Record::new(schema, vec![Some("X".to_string())]);
        assert_eq!(record.values().len(), 2);
        assert_eq!(record.get("phone"), None);
    }
}
