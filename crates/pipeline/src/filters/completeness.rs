//! Filter to remove listings missing essential fields.
//!
//! Typically the last stage, so the output only contains listings
//! someone could actually act on.

use crate::predicates::{has_contact, has_name};
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{fields, RecordCollection};

/// Removes listings without a name, or without any way to reach them.
///
/// ## Algorithm
/// 1. If the schema has `name`, drop listings whose name is null or empty
/// 2. If the schema has both `address` and `phone`, drop listings where
///    both are null
///
/// Each rule is skipped when its columns are missing from the schema.
pub struct CompletenessFilter;

impl Filter for CompletenessFilter {
    fn name(&self) -> &str {
        "CompletenessFilter"
    }

    fn removal_label(&self) -> &str {
        "rows missing essential fields"
    }

    fn apply(&self, records: RecordCollection) -> Result<RecordCollection> {
        let schema = records.schema();
        let check_name = schema.has_column(fields::NAME);
        let check_contact =
            schema.has_column(fields::ADDRESS) && schema.has_column(fields::PHONE);

        if !check_name && !check_contact {
            return Ok(records);
        }

        Ok(records.keep_where(|record| {
            (!check_name || has_name(record)) && (!check_contact || has_contact(record))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completeness_filter() {
        let records = RecordCollection::from_rows(
            &["placeId", "name", "address", "phone"],
            vec![
                vec![Some("A"), Some(""), Some("1 Main St, NJ"), Some("555-0000")],
                vec![Some("B"), Some("X"), None, Some("555-1234")],
                vec![Some("C"), Some("Y"), None, None],
                vec![Some("D"), None, Some("2 Main St, NJ"), None],
                vec![Some("E"), Some("Z"), Some("3 Main St, NJ"), None],
            ],
        );

        let filtered = CompletenessFilter.apply(records).unwrap();
        let ids: Vec<&str> = filtered.iter().map(|r| r.field_or_default("placeId")).collect();

        assert_eq!(ids, vec!["B", "E"]);
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let records = RecordCollection::from_rows(
            &["name", "address", "phone"],
            vec![vec![Some("   "), Some("1 Main St, NJ"), Some("555")]],
        );

        let filtered = CompletenessFilter.apply(records).unwrap();
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_contact_rule_needs_both_columns() {
        let records = RecordCollection::from_rows(
            &["name", "address"],
            vec![vec![Some("X"), None], vec![Some(""), Some("1 Main St")]],
        );

        let filtered = CompletenessFilter.apply(records).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].get("name"), Some("X"));
    }

    #[test]
    fn test_no_relevant_columns_is_noop() {
        let records = RecordCollection::from_rows(&["placeId"], vec![vec![None], vec![Some("A")]]);

        let filtered = CompletenessFilter.apply(records.clone()).unwrap();
        assert_eq!(filtered, records);
    }
}
