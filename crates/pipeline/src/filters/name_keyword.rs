//! Filter to remove listings whose names give them away as something else.

use crate::config::normalize_phrases;
use crate::predicates::has_excluded_name_keyword;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::RecordCollection;

/// Removes listings whose `name` contains an excluded keyword
/// (case-insensitive substring). A listing without a name is not
/// excluded here; the completeness stage deals with it.
pub struct NameKeywordFilter {
    keywords: Vec<String>,
}

impl NameKeywordFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: normalize_phrases(keywords),
        }
    }
}

impl Filter for NameKeywordFilter {
    fn name(&self) -> &str {
        "NameKeywordFilter"
    }

    fn removal_label(&self) -> &str {
        "rows with excluded keywords in name"
    }

    fn apply(&self, records: RecordCollection) -> Result<RecordCollection> {
        Ok(records.keep_where(|record| !has_excluded_name_keyword(record, &self.keywords)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXCLUDED_NAME_KEYWORDS;

    #[test]
    fn test_name_keyword_filter() {
        let records = RecordCollection::from_rows(
            &["placeId", "name"],
            vec![
                vec![Some("A"), Some("Sunrise of Westfield")],
                vec![Some("B"), Some("Morris County Office on Aging")],
                vec![Some("C"), Some("CVS Pharmacy")],
                vec![Some("D"), None],
                vec![Some("E"), Some("Brandywine Living at Princeton")],
            ],
        );

        let filter = NameKeywordFilter::new(DEFAULT_EXCLUDED_NAME_KEYWORDS.iter());
        let filtered = filter.apply(records).unwrap();
        let ids: Vec<&str> = filtered.iter().map(|r| r.field_or_default("placeId")).collect();

        assert_eq!(ids, vec!["A", "D", "E"]);
    }
}
