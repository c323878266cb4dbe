//! Run report for a cleaning pass.
//!
//! Collects what each stage removed and, once the pipeline is done,
//! which categories dominate the surviving listings.

use data_loader::{fields, RecordCollection};
use std::collections::HashMap;

/// Counts for a single stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage_name: String,
    pub removal_label: String,
    pub input_count: usize,
    pub output_count: usize,
}

impl StageReport {
    /// Records this stage dropped
    pub fn removed_count(&self) -> usize {
        self.input_count - self.output_count
    }
}

/// One row of the category summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Everything printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub original_count: usize,
    pub stages: Vec<StageReport>,
    pub final_count: usize,
    /// `None` when the data has no `categoryName` column
    pub top_categories: Option<Vec<CategoryCount>>,
}

impl RunReport {
    /// Start a report for a collection of `original_count` records
    pub fn new(original_count: usize) -> Self {
        Self {
            original_count,
            stages: Vec::new(),
            final_count: original_count,
            top_categories: None,
        }
    }

    /// Append a stage's counts. Stages are recorded in the order they ran.
    pub fn record_stage(
        &mut self,
        stage_name: &str,
        removal_label: &str,
        input_count: usize,
        output_count: usize,
    ) {
        debug_assert!(output_count <= input_count, "stages only remove records");
        self.stages.push(StageReport {
            stage_name: stage_name.to_string(),
            removal_label: removal_label.to_string(),
            input_count,
            output_count,
        });
        self.final_count = output_count;
    }

    /// Close the report over the final collection.
    pub fn finish(&mut self, survivors: &RecordCollection, top_n: usize) {
        self.final_count = survivors.len();
        self.top_categories = category_distribution(survivors, top_n);
    }

    pub fn total_removed(&self) -> usize {
        self.stages.iter().map(StageReport::removed_count).sum()
    }
}

/// Most frequent `categoryName` values among `records`.
///
/// Sorted by count, highest first; equal counts keep the order in which
/// the categories first appear. Null categories are not counted.
/// Returns `None` if the schema has no `categoryName` column.
pub fn category_distribution(records: &RecordCollection, top_n: usize) -> Option<Vec<CategoryCount>> {
    if !records.schema().has_column(fields::CATEGORY_NAME) {
        return None;
    }

    // category -> (count, first position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, record) in records.iter().enumerate() {
        if let Some(category) = record.get(fields::CATEGORY_NAME) {
            let entry = counts.entry(category).or_insert((0, position));
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.0.cmp(&a.1.0).then_with(|| a.1.1.cmp(&b.1.1)));

    Some(
        ranked
            .into_iter()
            .take(top_n)
            .map(|(category, (count, _))| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_count() {
        let mut report = RunReport::new(10);
        report.record_stage("A", "a", 10, 7);
        report.record_stage("B", "b", 7, 7);
        report.record_stage("C", "c", 7, 2);

        assert_eq!(report.stages[0].removed_count(), 3);
        assert_eq!(report.stages[1].removed_count(), 0);
        assert_eq!(report.total_removed(), 8);
        assert_eq!(report.final_count, 2);
    }

    #[test]
    fn test_category_distribution_order_and_limit() {
        let records = RecordCollection::from_rows(
            &["categoryName"],
            vec![
                vec![Some("Retirement home")],
                vec![Some("Assisted living facility")],
                vec![None],
                vec![Some("Assisted living facility")],
                vec![Some("Senior citizens care service")],
                vec![Some("Retirement home")],
                vec![Some("Assisted living facility")],
                vec![Some("Memory care")],
            ],
        );

        let top = category_distribution(&records, 3).unwrap();
        let summary: Vec<(&str, usize)> = top.iter().map(|c| (c.category.as_str(), c.count)).collect();

        assert_eq!(
            summary,
            vec![
                ("Assisted living facility", 3),
                ("Retirement home", 2),
                ("Senior citizens care service", 1),
            ]
        );
    }

    #[test]
    fn test_no_category_column() {
        let records = RecordCollection::from_rows(&["name"], vec![vec![Some("X")]]);
        assert_eq!(category_distribution(&records, 10), None);
    }
}
