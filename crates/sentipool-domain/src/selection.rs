//! Selection module - decides which sentences a visitor sees next
//!
//! Selection is a pure function of the full record set and the requesting
//! visitor's identity. Nothing is cached between calls; every page load
//! recomputes the batch from the current pool, so a vote recorded by one
//! visitor is visible to the next selection immediately.

use crate::record::{SentenceRecord, VisitorId};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Minimum total votes before ambiguity is evaluated
pub const ANNOTATION_THRESHOLD: u32 = 3;

/// Maximum sentences offered to one visitor per selection
pub const BATCH_SIZE: usize = 3;

/// Aggregate progress over the entire pool, independent of any visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Number of records in the pool
    pub total_sentences: usize,

    /// Records with at least one vote
    pub annotated_count: usize,

    /// `round(100 * annotated_count / total_sentences)`, 0 for an empty pool
    pub progress_percentage: u32,
}

impl PoolStats {
    /// Compute stats over the full, unfiltered record set
    pub fn compute(records: &[SentenceRecord]) -> Self {
        let total_sentences = records.len();
        let annotated_count = records.iter().filter(|r| r.total_votes() > 0).count();
        let progress_percentage = if total_sentences > 0 {
            ((annotated_count as f64 / total_sentences as f64) * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total_sentences,
            annotated_count,
            progress_percentage,
        }
    }
}

/// Result of one selection call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    /// Up to [`BATCH_SIZE`] sentence texts, in display order
    pub sentences: Vec<String>,

    /// Pool-wide progress, computed over all records
    pub stats: PoolStats,

    /// True when nothing suitable remains for this visitor
    pub no_more_sentences: bool,
}

/// Choose up to three sentences for the given visitor
///
/// A record is a candidate iff the visitor has not voted on it (an absent
/// identity is eligible for everything) and the record still needs
/// annotation: under three total votes, or at/above three with no unique
/// plurality winner. Resolved records never circulate again unless later
/// votes reopen the tie.
///
/// Candidates are grouped by exact total vote count and walked in
/// descending order, so near-resolution and ambiguous records are offered
/// before fresh ones. Order within a group carries no meaning, so each
/// group is shuffled with the injected RNG to spread annotator attention.
/// Batch assembly skips empty content and repeated sentence text.
pub fn select_batch<R: Rng + ?Sized>(
    records: &[SentenceRecord],
    visitor: Option<&VisitorId>,
    rng: &mut R,
) -> Selection {
    // Group eligible candidates by their exact total vote count.
    let mut groups: BTreeMap<u32, Vec<&SentenceRecord>> = BTreeMap::new();
    for record in records {
        if let Some(visitor) = visitor {
            if record.has_voter(visitor) {
                continue;
            }
        }
        if !record.needs_annotation(ANNOTATION_THRESHOLD) {
            continue;
        }
        groups.entry(record.total_votes()).or_default().push(record);
    }

    // Walk groups from most-voted to least, shuffling within each group,
    // and collect unique non-empty sentence texts.
    let mut sentences: Vec<String> = Vec::with_capacity(BATCH_SIZE);
    let mut seen: HashSet<&str> = HashSet::new();
    'walk: for group in groups.values_mut().rev() {
        group.shuffle(rng);
        for &record in group.iter() {
            if record.content.is_empty() || seen.contains(record.content.as_str()) {
                continue;
            }
            seen.insert(record.content.as_str());
            sentences.push(record.content.clone());
            if sentences.len() == BATCH_SIZE {
                break 'walk;
            }
        }
    }

    Selection {
        no_more_sentences: sentences.is_empty(),
        stats: PoolStats::compute(records),
        sentences,
    }
}
