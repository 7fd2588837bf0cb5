//! Report command implementation.
//!
//! Prints the annotation-count distribution of the pool: how many
//! sentences hold 0 through 3 votes, which records exceed the threshold,
//! and overall progress.

use crate::error::Result;
use sentipool_domain::traits::RecordStore;
use sentipool_domain::{PoolStats, RecordId, SentenceRecord, ANNOTATION_THRESHOLD};
use sentipool_store::JsonFileStore;

/// Distribution of records by total annotation count
#[derive(Debug, PartialEq)]
pub struct ReportSummary {
    /// Records with exactly 0, 1, 2, and 3 votes
    pub counts: [usize; 4],

    /// Ids of records with more than 3 votes
    pub over_threshold: Vec<RecordId>,

    /// Pool-wide progress
    pub stats: PoolStats,
}

impl ReportSummary {
    /// Tally the distribution over the full record set
    pub fn compute(records: &[SentenceRecord]) -> Self {
        let mut counts = [0usize; 4];
        let mut over_threshold = Vec::new();
        for record in records {
            let total = record.total_votes();
            if total <= ANNOTATION_THRESHOLD {
                counts[total as usize] += 1;
            } else {
                over_threshold.push(record.id);
            }
        }
        Self {
            counts,
            over_threshold,
            stats: PoolStats::compute(records),
        }
    }

    fn percentage(&self, count: usize) -> f64 {
        if self.stats.total_sentences > 0 {
            (count as f64 / self.stats.total_sentences as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Execute the report command.
pub fn execute_report(store: &JsonFileStore) -> Result<()> {
    let records = store.load_all()?;
    let summary = ReportSummary::compute(&records);

    println!("Total sentences: {}", summary.stats.total_sentences);
    for votes in 0..=3usize {
        println!(
            "With {} annotations: {} ({:.2}%)",
            votes,
            summary.counts[votes],
            summary.percentage(summary.counts[votes])
        );
    }

    if summary.over_threshold.is_empty() {
        println!("With more than 3 annotations: 0");
    } else {
        let ids: Vec<String> = summary
            .over_threshold
            .iter()
            .map(|id| id.to_string())
            .collect();
        println!(
            "With more than 3 annotations: {} (IDs: {})",
            summary.over_threshold.len(),
            ids.join(", ")
        );
    }

    println!(
        "Annotated: {} of {} ({}%)",
        summary.stats.annotated_count,
        summary.stats.total_sentences,
        summary.stats.progress_percentage
    );

    Ok(())
}
