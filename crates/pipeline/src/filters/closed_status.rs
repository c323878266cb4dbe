//! Filter to remove closed businesses.
//!
//! Usually the first stage: a closed facility is never worth keeping,
//! no matter what else the listing says.

use crate::predicates::is_closed;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::RecordCollection;

/// Removes listings flagged permanently or temporarily closed.
///
/// A listing without the closed-status columns is kept, since a missing
/// flag says nothing about closure.
pub struct ClosedStatusFilter;

impl Filter for ClosedStatusFilter {
    fn name(&self) -> &str {
        "ClosedStatusFilter"
    }

    fn removal_label(&self) -> &str {
        "closed businesses"
    }

    fn apply(&self, records: RecordCollection) -> Result<RecordCollection> {
        Ok(records.keep_where(|record| !is_closed(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_status_filter() {
        let records = RecordCollection::from_rows(
            &["placeId", "permanentlyClosed", "temporarilyClosed"],
            vec![
                vec![Some("A"), Some("False"), Some("False")],
                vec![Some("B"), Some("True"), Some("False")],
                vec![Some("C"), None, Some("TRUE")],
                vec![Some("D"), None, None],
            ],
        );

        let filtered = ClosedStatusFilter.apply(records).unwrap();
        let ids: Vec<&str> = filtered.iter().map(|r| r.field_or_default("placeId")).collect();

        assert_eq!(ids, vec!["A", "D"]);
    }

    #[test]
    fn test_missing_columns_remove_nothing() {
        let records = RecordCollection::from_rows(
            &["placeId", "name"],
            vec![vec![Some("A"), Some("X")], vec![Some("B"), Some("Y")]],
        );

        let filtered = ClosedStatusFilter.apply(records.clone()).unwrap();
        assert_eq!(filtered, records);
    }
}
