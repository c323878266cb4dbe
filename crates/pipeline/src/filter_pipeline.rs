//! The FilterPipeline orchestrates the cleaning stages.
//!
//! This module provides the main FilterPipeline struct that chains
//! stages together using the builder pattern and records what each
//! one removed.

use crate::config::{CleaningConfig, DEFAULT_TOP_CATEGORIES};
use crate::filters::{
    ClosedStatusFilter, CompletenessFilter, DeduplicateFilter, ExcludedCategoryFilter,
    GeographyFilter, NameKeywordFilter,
};
use crate::report::RunReport;
use crate::traits::Filter;
use anyhow::{Context, Result};
use data_loader::RecordCollection;

/// Result of a pipeline run: the surviving listings and the report.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub records: RecordCollection,
    pub report: RunReport,
}

/// Chains multiple stages together into a cleaning pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ClosedStatusFilter)
///     .add_filter(GeographyFilter::new(TargetRegion::default()))
///     .add_filter(DeduplicateFilter);
///
/// let outcome = pipeline.apply(listings)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
    top_categories: usize,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            top_categories: DEFAULT_TOP_CATEGORIES,
        }
    }

    /// The standard six-stage cleaning pipeline.
    ///
    /// Closed status, geography, excluded categories, name keywords,
    /// deduplication, completeness, in that order.
    pub fn standard(config: &CleaningConfig) -> Self {
        Self::new()
            .add_filter(ClosedStatusFilter)
            .add_filter(GeographyFilter::new(config.target_region.clone()))
            .add_filter(ExcludedCategoryFilter::new(&config.excluded_categories))
            .add_filter(NameKeywordFilter::new(&config.excluded_name_keywords))
            .add_filter(DeduplicateFilter)
            .add_filter(CompletenessFilter)
            .with_top_categories(config.top_categories)
    }

    /// Add a stage to the end of the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// How many categories the report's summary keeps
    pub fn with_top_categories(mut self, top_n: usize) -> Self {
        self.top_categories = top_n;
        self
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all stages in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with the loaded listings
    /// 2. For each stage in order:
    ///    a. Apply it to the previous stage's output
    ///    b. Record input and output counts in the report
    /// 3. Summarize categories of the survivors
    ///
    /// # Returns
    /// * `Ok(CleaningOutcome)` - Surviving listings plus the run report
    /// * `Err` - If any stage fails
    pub fn apply(&self, records: RecordCollection) -> Result<CleaningOutcome> {
        let mut report = RunReport::new(records.len());
        let mut current = records;

        for filter in &self.filters {
            let input_count = current.len();
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                input_count
            );
            current = filter
                .apply(current)
                .with_context(|| format!("Filter {} failed", filter.name()))?;
            report.record_stage(filter.name(), filter.removal_label(), input_count, current.len());
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }

        report.finish(&current, self.top_categories);
        Ok(CleaningOutcome {
            records: current,
            report,
        })
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
