//! Voting module - applies one vote to the matching record
//!
//! The recorder mutates the in-memory record set only; persisting the
//! whole set afterwards is the caller's job via the [`RecordStore`]
//! seam. A failed save discards the mutation with it, so the store and
//! the caller's view stay consistent.
//!
//! [`RecordStore`]: crate::traits::RecordStore

use crate::record::{SentenceRecord, VisitorId};
use crate::sentiment::Sentiment;
use chrono::Utc;
use thiserror::Error;

/// Errors from recording a vote
///
/// Either variant leaves the record set untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    /// The sentiment string is not one of the four recognized categories
    #[error("Unrecognized sentiment: {0}")]
    UnknownSentiment(String),

    /// No record's content matches the submitted sentence text
    #[error("Sentence not found: {0}")]
    SentenceNotFound(String),
}

/// Record one vote against the record whose content matches `sentence`
///
/// The sentiment is normalized case-insensitively. On a match the tally,
/// voter log, and timestamp are updated together; the first record with
/// matching content wins when duplicates share text. Returns the
/// normalized sentiment so callers can echo it back.
///
/// The caller must pass a real identity; unidentified visitors get a
/// token minted by the web layer before this runs.
pub fn record_vote(
    records: &mut [SentenceRecord],
    sentence: &str,
    sentiment: &str,
    visitor: &VisitorId,
) -> Result<Sentiment, VoteError> {
    let sentiment = Sentiment::parse(sentiment)
        .ok_or_else(|| VoteError::UnknownSentiment(sentiment.to_string()))?;

    let record = records
        .iter_mut()
        .find(|record| record.content == sentence)
        .ok_or_else(|| VoteError::SentenceNotFound(sentence.to_string()))?;

    record.apply_vote(sentiment, visitor.clone(), Utc::now());
    Ok(sentiment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_increments_tally_and_voter_log() {
        let mut records = vec![SentenceRecord::new("good")];
        records[0].apply_vote(Sentiment::Positive, VisitorId::mint(), Utc::now());

        let result = record_vote(&mut records, "good", "positive", &VisitorId::mint());

        assert_eq!(result, Ok(Sentiment::Positive));
        assert_eq!(records[0].tally.positive, 2);
        assert_eq!(records[0].voters.len(), 2);
        assert!(records[0].updated_at.is_some());
    }

    #[test]
    fn test_sentiment_is_normalized_case_insensitively() {
        let mut records = vec![SentenceRecord::new("mixed")];

        let result = record_vote(&mut records, "mixed", "NEGATIVE", &VisitorId::mint());

        assert_eq!(result, Ok(Sentiment::Negative));
        assert_eq!(records[0].tally.negative, 1);
    }

    #[test]
    fn test_unknown_sentiment_leaves_state_untouched() {
        let mut records = vec![SentenceRecord::new("good")];

        let result = record_vote(&mut records, "good", "fantastic", &VisitorId::mint());

        assert_eq!(
            result,
            Err(VoteError::UnknownSentiment("fantastic".to_string()))
        );
        assert_eq!(records[0].total_votes(), 0);
        assert!(records[0].voters.is_empty());
        assert_eq!(records[0].updated_at, None);
    }

    #[test]
    fn test_unknown_sentence_leaves_state_untouched() {
        let mut records = vec![SentenceRecord::new("good")];

        let result = record_vote(&mut records, "missing", "positive", &VisitorId::mint());

        assert_eq!(
            result,
            Err(VoteError::SentenceNotFound("missing".to_string()))
        );
        assert_eq!(records[0].total_votes(), 0);
    }

    #[test]
    fn test_annotated_count_never_decreases() {
        use crate::selection::PoolStats;

        let mut records = vec![
            SentenceRecord::new("fresh"),
            SentenceRecord::new("touched"),
        ];
        records[1].apply_vote(Sentiment::Neutral, VisitorId::mint(), Utc::now());
        let before = PoolStats::compute(&records);

        record_vote(&mut records, "fresh", "positive", &VisitorId::mint()).unwrap();
        let after = PoolStats::compute(&records);

        assert!(after.annotated_count >= before.annotated_count);
        assert_eq!(after.annotated_count, 2);
        assert_eq!(after.progress_percentage, 100);
    }

    #[test]
    fn test_first_matching_record_wins_on_duplicate_content() {
        let mut records = vec![SentenceRecord::new("dup"), SentenceRecord::new("dup")];

        record_vote(&mut records, "dup", "unsure", &VisitorId::mint()).unwrap();

        assert_eq!(records[0].tally.unsure, 1);
        assert_eq!(records[1].total_votes(), 0);
    }
}
