//! Pipeline for cleaning scraped assisted-living listings.
//!
//! This crate provides:
//! - Filter trait and the six cleaning stages
//! - Pure keep/drop predicates the stages are built from
//! - FilterPipeline for composing stages in order
//! - RunReport with per-stage removal counts and a category summary
//! - CleaningConfig holding the target region and exclusion lists
//!
//! ## Architecture
//! Listings flow through the stages strictly in sequence:
//! 1. Closed businesses are dropped
//! 2. Listings outside the target region are dropped
//! 3. Excluded categories and name keywords are dropped
//! 4. Duplicate `placeId`s are collapsed to their first occurrence
//! 5. Listings missing a name or any contact field are dropped
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CleaningConfig, FilterPipeline};
//!
//! let pipeline = FilterPipeline::standard(&CleaningConfig::default());
//! let outcome = pipeline.apply(listings)?;
//!
//! for stage in &outcome.report.stages {
//!     println!("Removed {} {}", stage.removed_count(), stage.removal_label);
//! }
//! ```

pub mod config;
pub mod predicates;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod report;

// Re-export main types
pub use config::{CleaningConfig, TargetRegion};
pub use filter_pipeline::{CleaningOutcome, FilterPipeline};
pub use report::{CategoryCount, RunReport, StageReport};
pub use traits::Filter;
