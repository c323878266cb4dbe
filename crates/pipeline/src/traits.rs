//! Core traits for the cleaning pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independently testable stages to be chained over a listing collection.

use anyhow::Result;
use data_loader::RecordCollection;

/// Core trait for a cleaning stage.
///
/// All stages must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Stages take ownership of the collection and return a narrowed one
/// - A stage only removes records; survivors keep their relative order
///   and their field values
/// - A stage whose columns are missing from the schema passes its input
///   through untouched
pub trait Filter: Send + Sync {
    /// Returns the name of this stage (for logging and the run report)
    fn name(&self) -> &str;

    /// What the removed records were, as printed after "Removed N ..."
    fn removal_label(&self) -> &str;

    /// Apply this stage to a collection.
    ///
    /// # Arguments
    /// * `records` - The collection to narrow (takes ownership)
    ///
    /// # Returns
    /// * `Ok(RecordCollection)` - The surviving records
    /// * `Err` - If the stage fails
    fn apply(&self, records: RecordCollection) -> Result<RecordCollection>;
}
