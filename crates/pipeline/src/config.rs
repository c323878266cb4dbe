//! Cleaning configuration.
//!
//! The exclusion lists and target region are plain data handed to the
//! filters, so they can be swapped out or loaded from JSON without
//! touching any stage logic.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Category phrases that mark a listing as something other than an
/// assisted-living facility.
pub const DEFAULT_EXCLUDED_CATEGORIES: &[&str] = &[
    "restaurant",
    "bar",
    "cafe",
    "food",
    "coffee",
    "home health care service",
    "home help",
    "home care",
    "senior citizen center",
    "community center",
    "nursing home",
    "hospital",
    "medical center",
    "clinic",
    "doctor",
    "health consultant",
    "social services organization",
    "non-profit organization",
    "government office",
    "apartment building",
    "apartment complex",
    "apartment rental agency",
    "low income housing",
    "housing program",
    "funeral home",
    "rehabilitation center",
    "physical therapy",
    "wellness program",
    "hotel",
    "real estate",
    "insurance",
];

/// Business-name tokens that usually indicate a false positive.
pub const DEFAULT_EXCLUDED_NAME_KEYWORDS: &[&str] = &[
    "restaurant",
    "cafe",
    "coffee",
    "bar",
    "pub",
    "hospital",
    "medical",
    "clinic",
    "doctor",
    "pharmacy",
    "drug store",
    "government",
    "county",
    "state office",
    "apartment",
    "rentals",
    "housing",
];

/// Number of categories shown in the run summary
pub const DEFAULT_TOP_CATEGORIES: usize = 10;

/// Acceptance criteria for the geography filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRegion {
    /// Matched against the `state` column, e.g. "New Jersey"
    pub full_name: String,
    /// Matched against the `address` column, e.g. ", NJ"
    pub abbreviation_token: String,
}

impl Default for TargetRegion {
    fn default() -> Self {
        Self {
            full_name: "New Jersey".to_string(),
            abbreviation_token: ", NJ".to_string(),
        }
    }
}

/// Everything the standard pipeline needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    pub target_region: TargetRegion,
    pub excluded_categories: Vec<String>,
    pub excluded_name_keywords: Vec<String>,
    pub top_categories: usize,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            target_region: TargetRegion::default(),
            excluded_categories: to_owned_list(DEFAULT_EXCLUDED_CATEGORIES),
            excluded_name_keywords: to_owned_list(DEFAULT_EXCLUDED_NAME_KEYWORDS),
            top_categories: DEFAULT_TOP_CATEGORIES,
        }
    }
}

impl CleaningConfig {
    /// Parse a config from JSON. Keys left out keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse cleaning config JSON")?;
        Ok(config.normalized())
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Lowercase every exclusion phrase and drop blank ones.
    ///
    /// A blank phrase would be a substring of every value and
    /// exclude the whole dataset.
    pub fn normalized(mut self) -> Self {
        self.excluded_categories = normalize_phrases(self.excluded_categories);
        self.excluded_name_keywords = normalize_phrases(self.excluded_name_keywords);
        self
    }
}

fn to_owned_list(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

/// Lowercase phrases and skip blank ones.
pub(crate) fn normalize_phrases<I, S>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    phrases
        .into_iter()
        .map(|p| p.as_ref().to_lowercase())
        .filter(|p| !p.trim().is_empty())
        .collect()
}
