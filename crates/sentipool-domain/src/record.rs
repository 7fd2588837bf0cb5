//! Record module - the sentence pool's fundamental unit

use crate::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a sentence record based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability
/// - 128-bit uniqueness
/// - No coordination required for distributed generation
///
/// The id is a stable surrogate key for external reference; vote matching
/// and batch dedup remain content-based (exact string equality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(uuid::Uuid);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Parse a RecordId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }
}

impl Default for RecordId {
    /// Records deserialized from legacy documents without an id get a
    /// freshly minted one.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque durable token identifying one browser across visits
///
/// Carries no PII. The web layer mints a fresh token before recording a
/// vote for an unidentified visitor, so every voter entry is attributable
/// to some identity, even if weakly so.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(String);

impl VisitorId {
    /// Wrap an existing token (e.g. read back from a cookie)
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Mint a fresh opaque token (UUIDv7)
    pub fn mint() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Get the raw token string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-category vote counts for one sentence
///
/// Missing categories deserialize as 0, so documents written before a
/// category existed still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Votes for "positive"
    #[serde(default)]
    pub positive: u32,

    /// Votes for "neutral"
    #[serde(default)]
    pub neutral: u32,

    /// Votes for "negative"
    #[serde(default)]
    pub negative: u32,

    /// Votes for "unsure"
    #[serde(default)]
    pub unsure: u32,
}

impl VoteTally {
    /// Get the count for one category
    pub fn get(&self, sentiment: Sentiment) -> u32 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
            Sentiment::Unsure => self.unsure,
        }
    }

    /// Increment the count for one category
    pub fn increment(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Unsure => self.unsure += 1,
        }
    }

    /// Total votes across all categories
    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative + self.unsure
    }

    /// The unique strict plurality winner, if one exists
    ///
    /// Returns `None` when two or more categories tie for the maximum
    /// (including the all-zero tally).
    pub fn leader(&self) -> Option<Sentiment> {
        let max = Sentiment::ALL
            .iter()
            .map(|&s| self.get(s))
            .max()
            .unwrap_or(0);
        let mut at_max = Sentiment::ALL.iter().filter(|&&s| self.get(s) == max);
        match (at_max.next(), at_max.next()) {
            (Some(&winner), None) => Some(winner),
            _ => None,
        }
    }
}

/// One vote event in a record's append-only voter log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteEvent {
    /// Identity of the voter
    pub voter_id: VisitorId,

    /// Category the voter chose
    pub sentiment: Sentiment,

    /// When the vote was cast
    pub cast_at: DateTime<Utc>,
}

/// One sentence in the pool, with accumulated votes
///
/// The `content` string acts as the soft primary key: uniqueness is by
/// exact string equality, and vote matching is content-based. The `id`
/// is a stable surrogate for external reference only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Surrogate identifier; minted fresh for legacy documents without one
    #[serde(default)]
    pub id: RecordId,

    /// The sentence text, treated as an opaque string throughout
    pub content: String,

    /// Per-category vote counts
    #[serde(default)]
    pub tally: VoteTally,

    /// Append-only log of vote events
    ///
    /// Invariant: `tally.get(c)` equals the number of entries here with
    /// category `c`; `apply_vote` updates both together.
    #[serde(default)]
    pub voters: Vec<VoteEvent>,

    /// Timestamp of the most recent vote; `None` if never voted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SentenceRecord {
    /// Create a fresh, unvoted record for the given sentence text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            content: content.into(),
            tally: VoteTally::default(),
            voters: Vec::new(),
            updated_at: None,
        }
    }

    /// Total votes this record has accumulated
    pub fn total_votes(&self) -> u32 {
        self.tally.total()
    }

    /// Whether the given visitor already voted on this record
    pub fn has_voter(&self, visitor: &VisitorId) -> bool {
        self.voters.iter().any(|vote| &vote.voter_id == visitor)
    }

    /// Whether the record lacks a clear winner at or above the threshold
    ///
    /// Below the threshold a record is never considered ambiguous; it
    /// simply needs more votes.
    pub fn is_ambiguous(&self, threshold: u32) -> bool {
        self.total_votes() >= threshold && self.tally.leader().is_none()
    }

    /// Whether the record still needs annotation
    ///
    /// True below the threshold, and at/above the threshold while no
    /// single category strictly beats all others. A record with a unique
    /// plurality winner is resolved and drops out of circulation.
    pub fn needs_annotation(&self, threshold: u32) -> bool {
        self.total_votes() < threshold || self.tally.leader().is_none()
    }

    /// The resolved label, if this record has one
    ///
    /// A record resolves once it holds at least `threshold` votes with a
    /// unique strict plurality winner.
    pub fn resolved_label(&self, threshold: u32) -> Option<Sentiment> {
        if self.total_votes() >= threshold {
            self.tally.leader()
        } else {
            None
        }
    }

    /// Apply one vote: tally, voter log, and timestamp move together
    pub fn apply_vote(&mut self, sentiment: Sentiment, voter: VisitorId, at: DateTime<Utc>) {
        self.tally.increment(sentiment);
        self.voters.push(VoteEvent {
            voter_id: voter,
            sentiment,
            cast_at: at,
        });
        self.updated_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(positive: u32, neutral: u32, negative: u32, unsure: u32) -> VoteTally {
        VoteTally {
            positive,
            neutral,
            negative,
            unsure,
        }
    }

    #[test]
    fn test_leader_unique_maximum() {
        assert_eq!(tally(3, 1, 0, 0).leader(), Some(Sentiment::Positive));
        assert_eq!(tally(0, 0, 2, 1).leader(), Some(Sentiment::Negative));
        assert_eq!(tally(0, 0, 0, 1).leader(), Some(Sentiment::Unsure));
    }

    #[test]
    fn test_leader_ties_have_no_winner() {
        assert_eq!(tally(1, 1, 1, 0).leader(), None);
        assert_eq!(tally(2, 2, 0, 0).leader(), None);
        assert_eq!(tally(0, 0, 0, 0).leader(), None);
    }

    #[test]
    fn test_needs_annotation_below_threshold() {
        // A record under the threshold always needs votes, even with a
        // clear front-runner.
        let mut record = SentenceRecord::new("test");
        record.tally = tally(2, 0, 0, 0);
        assert!(record.needs_annotation(3));
        assert!(!record.is_ambiguous(3));
    }

    #[test]
    fn test_resolved_at_threshold_with_unique_winner() {
        let mut record = SentenceRecord::new("test");
        record.tally = tally(2, 1, 0, 0);
        assert!(!record.needs_annotation(3));
        assert_eq!(record.resolved_label(3), Some(Sentiment::Positive));
    }

    #[test]
    fn test_ambiguous_at_threshold() {
        let mut record = SentenceRecord::new("test");
        record.tally = tally(1, 1, 1, 0);
        assert!(record.is_ambiguous(3));
        assert!(record.needs_annotation(3));
        assert_eq!(record.resolved_label(3), None);
    }

    #[test]
    fn test_two_way_tie_above_threshold_is_ambiguous() {
        let mut record = SentenceRecord::new("test");
        record.tally = tally(2, 2, 0, 0);
        assert!(record.is_ambiguous(3));
        assert!(record.needs_annotation(3));
    }

    #[test]
    fn test_resolved_label_under_threshold_is_none() {
        let mut record = SentenceRecord::new("test");
        record.tally = tally(2, 0, 0, 0);
        assert_eq!(record.resolved_label(3), None);
    }

    #[test]
    fn test_apply_vote_updates_tally_log_and_timestamp() {
        let mut record = SentenceRecord::new("test");
        let voter = VisitorId::mint();
        let now = Utc::now();

        record.apply_vote(Sentiment::Negative, voter.clone(), now);

        assert_eq!(record.tally.negative, 1);
        assert_eq!(record.voters.len(), 1);
        assert_eq!(record.voters[0].voter_id, voter);
        assert_eq!(record.voters[0].sentiment, Sentiment::Negative);
        assert_eq!(record.updated_at, Some(now));
        assert!(record.has_voter(&voter));
    }

    #[test]
    fn test_has_voter_distinguishes_identities() {
        let mut record = SentenceRecord::new("test");
        let alice = VisitorId::mint();
        let bob = VisitorId::mint();
        record.apply_vote(Sentiment::Positive, alice.clone(), Utc::now());

        assert!(record.has_voter(&alice));
        assert!(!record.has_voter(&bob));
    }

    #[test]
    fn test_record_id_display_and_parse() {
        let id = RecordId::new();
        let id_str = id.to_string();

        // UUID strings are 36 characters (8-4-4-4-12 with hyphens)
        assert_eq!(id_str.len(), 36);

        let parsed = RecordId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_record_id_invalid_string() {
        assert!(RecordId::from_string("not-a-valid-uuid").is_err());
        assert!(RecordId::from_string("").is_err());
    }

    #[test]
    fn test_serde_roundtrip_preserves_everything() {
        let mut record = SentenceRecord::new("Il-prodott kien tajjeb ħafna!");
        record.apply_vote(Sentiment::Positive, VisitorId::mint(), Utc::now());
        record.apply_vote(Sentiment::Unsure, VisitorId::mint(), Utc::now());

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: SentenceRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back, record);
    }

    #[test]
    fn test_legacy_document_without_id_or_tally_keys() {
        // Older documents carried only content and partial counts; missing
        // categories read as 0 and a surrogate id is minted on load.
        let json = r#"{"content": "x", "tally": {"positive": 2}}"#;
        let record: SentenceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.content, "x");
        assert_eq!(record.tally.positive, 2);
        assert_eq!(record.tally.neutral, 0);
        assert_eq!(record.tally.unsure, 0);
        assert!(record.voters.is_empty());
        assert_eq!(record.updated_at, None);
    }
}
