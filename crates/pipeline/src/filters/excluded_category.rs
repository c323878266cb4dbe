//! Filter to remove listings in excluded categories.
//!
//! Google Maps searches for "assisted living" also return restaurants,
//! hospitals, apartment buildings and the like. Their category labels
//! give them away.

use crate::config::normalize_phrases;
use crate::predicates::has_excluded_category;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::RecordCollection;

/// Removes listings whose `categories` or `categoryName` mentions an
/// excluded phrase.
///
/// ## Algorithm
/// For each listing:
/// 1. Lowercase `categories` and `categoryName` (null reads as "")
/// 2. Drop it if any excluded phrase is a substring of either
///
/// Matching is by substring, so "nursing home" also catches
/// "Nursing Home Rehabilitation Center".
pub struct ExcludedCategoryFilter {
    excluded: Vec<String>,
}

impl ExcludedCategoryFilter {
    /// Create a new ExcludedCategoryFilter.
    ///
    /// # Arguments
    /// * `excluded` - Category phrases to exclude (lowercased here)
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: normalize_phrases(excluded),
        }
    }
}

impl Filter for ExcludedCategoryFilter {
    fn name(&self) -> &str {
        "ExcludedCategoryFilter"
    }

    fn removal_label(&self) -> &str {
        "rows with excluded categories"
    }

    fn apply(&self, records: RecordCollection) -> Result<RecordCollection> {
        Ok(records.keep_where(|record| !has_excluded_category(record, &self.excluded)))
    }
}
