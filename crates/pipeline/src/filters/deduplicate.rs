//! Filter to remove duplicate listings.
//!
//! Overlapping search areas return the same place several times; the
//! scraper's `placeId` identifies it.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{fields, RecordCollection};
use std::collections::HashSet;

/// Keeps the first listing seen for each `placeId`.
///
/// ## Algorithm
/// Uses a HashSet of ids already seen for O(1) lookups.
/// A null `placeId` never matches anything, including other nulls, so
/// every listing without an id survives this stage. Without a `placeId`
/// column the stage does nothing.
pub struct DeduplicateFilter;

impl Filter for DeduplicateFilter {
    fn name(&self) -> &str {
        "DeduplicateFilter"
    }

    fn removal_label(&self) -> &str {
        "duplicate entries"
    }

    fn apply(&self, records: RecordCollection) -> Result<RecordCollection> {
        if !records.schema().has_column(fields::PLACE_ID) {
            tracing::debug!("No placeId column, skipping deduplication");
            return Ok(records);
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
        Ok(records.keep_where(|record| match record.get(fields::PLACE_ID) {
            Some(place_id) => seen.insert(place_id.to_string()),
            None => true,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &RecordCollection) -> Vec<Option<&str>> {
        records.iter().map(|r| r.get("placeId")).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let records = RecordCollection::from_rows(
            &["placeId", "name"],
            vec![
                vec![Some("A"), Some("first")],
                vec![Some("B"), Some("other")],
                vec![Some("A"), Some("second")],
            ],
        );

        let filtered = DeduplicateFilter.apply(records).unwrap();

        assert_eq!(ids(&filtered), vec![Some("A"), Some("B")]);
        assert_eq!(filtered.records()[0].get("name"), Some("first"));
    }

    #[test]
    fn test_null_ids_are_kept_independently() {
        let records = RecordCollection::from_rows(
            &["placeId"],
            vec![vec![None], vec![Some("A")], vec![None], vec![Some("A")]],
        );

        let filtered = DeduplicateFilter.apply(records).unwrap();
        assert_eq!(ids(&filtered), vec![None, Some("A"), None]);
    }

    #[test]
    fn test_deduplication_is_idempotent() {
        let records = RecordCollection::from_rows(
            &["placeId"],
            vec![vec![Some("A")], vec![Some("B")], vec![Some("A")], vec![None], vec![Some("B")]],
        );

        let once = DeduplicateFilter.apply(records).unwrap();
        let twice = DeduplicateFilter.apply(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_place_id_column_is_noop() {
        let records = RecordCollection::from_rows(
            &["name"],
            vec![vec![Some("X")], vec![Some("X")]],
        );

        let filtered = DeduplicateFilter.apply(records).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
