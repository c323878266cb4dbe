//! Filter to keep only listings in the target region.

use crate::config::TargetRegion;
use crate::predicates::in_target_region;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{fields, RecordCollection};

/// Keeps listings whose state or address places them in the target region.
///
/// ## Algorithm
/// 1. If the schema has no `state` column, keep everything
/// 2. Otherwise keep a record when `state` contains the region name OR
///    `address` contains the abbreviation token (case-insensitive); a
///    missing `address` column reads as empty text
///
/// Scraped state values are often blank, so the address check lets
/// border listings with ", NJ" in the address through.
pub struct GeographyFilter {
    region: TargetRegion,
    removal_label: String,
}

impl GeographyFilter {
    /// Create a new GeographyFilter.
    ///
    /// # Arguments
    /// * `region` - Full region name and address abbreviation token
    pub fn new(region: TargetRegion) -> Self {
        let removal_label = format!("results outside {}", region.full_name);
        Self {
            region,
            removal_label,
        }
    }
}

impl Filter for GeographyFilter {
    fn name(&self) -> &str {
        "GeographyFilter"
    }

    fn removal_label(&self) -> &str {
        &self.removal_label
    }

    fn apply(&self, records: RecordCollection) -> Result<RecordCollection> {
        if !records.schema().has_column(fields::STATE) {
            tracing::debug!("No state column, skipping geography check");
            return Ok(records);
        }

        Ok(records.keep_where(|record| in_target_region(record, &self.region)))
    }
}
