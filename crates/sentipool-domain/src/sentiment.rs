//! Sentiment module - the vote categories visitors choose between

use serde::{Deserialize, Serialize};

/// Sentiment category for a single vote
///
/// Every vote lands in exactly one of four categories:
/// - Positive: the sentence expresses a good experience or emotion
/// - Neutral: factual or balanced, no strong emotion
/// - Negative: disappointment, anger, or a bad experience
/// - Unsure: the annotator could not decide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Expresses a good experience or emotion
    Positive,

    /// Factual or balanced, no strong emotion
    Neutral,

    /// Disappointment, anger, or a bad experience
    Negative,

    /// The annotator could not decide
    Unsure,
}

impl Sentiment {
    /// All categories in a fixed order, for tally iteration
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
        Sentiment::Unsure,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::Unsure => "unsure",
        }
    }

    /// Parse a category from a string, case-insensitively
    ///
    /// Anything outside the four recognized names is unrecognized and
    /// returns `None`; callers decide whether that is an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            "unsure" => Some(Sentiment::Unsure),
            _ => None,
        }
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sentiment: {}", s))
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
