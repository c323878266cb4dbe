//! Stage implementations for the cleaning pipeline.
//!
//! This module contains all the concrete stages that can be composed
//! into a FilterPipeline, listed here in standard pipeline order.

pub mod closed_status;
pub mod geography;
pub mod excluded_category;
pub mod name_keyword;
pub mod deduplicate;
pub mod completeness;

// Re-export for convenience
pub use closed_status::ClosedStatusFilter;
pub use completeness::CompletenessFilter;
pub use deduplicate::DeduplicateFilter;
pub use excluded_category::ExcludedCategoryFilter;
pub use geography::GeographyFilter;
pub use name_keyword::NameKeywordFilter;
